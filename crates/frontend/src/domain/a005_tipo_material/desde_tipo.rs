//! Construcción de columnas editables a partir de un tipo de material
//! persistido por el backend.

use std::collections::HashMap;

use contracts::domain::a005_tipo_material::{Calculo, TipoMaterial};

use super::headers::{
    base_header_orden, ColumnKind, HeaderDraft, OperacionCalculo, ValorCalculo, BASE_DETALLE,
    BASE_TOTAL, BASE_UNITARIO, ORDEN_TOTAL,
};

/// Columnas editables de un tipo de material, en el orden persistido.
///
/// Las bases obligatorias (Detalle, $Unitario, $Total) aparecen siempre,
/// aun si el backend las marcó inactivas. Los ids de referencia siguen la
/// convención "base-{id}" / "attr-{id}".
pub fn headers_desde_tipo(tipo: &TipoMaterial) -> Vec<HeaderDraft> {
    let mut orden_map: HashMap<(ColumnKind, i64), i64> = HashMap::new();
    if let Some(orders) = &tipo.order_headers {
        for entry in orders {
            let kind = if entry.kind.starts_with("atr") {
                ColumnKind::Atributo
            } else {
                ColumnKind::Base
            };
            orden_map.insert((kind, entry.id), entry.order);
        }
    }

    // Títulos por id de referencia, para resolver los operandos.
    let mut titulos: HashMap<String, String> = HashMap::new();
    for hb in &tipo.headers_base {
        titulos.insert(format!("base-{}", hb.id_header_base), hb.titulo.clone());
    }
    if let Some(attrs) = &tipo.headers_atributes {
        for ha in attrs {
            titulos.insert(format!("attr-{}", ha.id_header_atribute), ha.titulo.clone());
        }
    }

    let mut headers: Vec<HeaderDraft> = Vec::new();

    for hb in &tipo.headers_base {
        let base_id = hb.id_header_base as u8;
        let obligatoria = matches!(base_id, BASE_DETALLE | BASE_UNITARIO | BASE_TOTAL);
        if !hb.active && !obligatoria {
            continue;
        }
        let mut draft = HeaderDraft::base(base_id);
        draft.orden = orden_map
            .get(&(ColumnKind::Base, hb.id_header_base))
            .copied()
            .or(hb.order)
            .unwrap_or_else(|| base_header_orden(base_id));
        if base_id == BASE_TOTAL {
            draft.orden = ORDEN_TOTAL;
        }
        draft.operaciones = operaciones_desde_calculo(hb.calculo.as_ref(), &titulos);
        headers.push(draft);
    }

    if let Some(attrs) = &tipo.headers_atributes {
        for ha in attrs {
            let id = format!("attr-{}", ha.id_header_atribute);
            let orden = orden_map
                .get(&(ColumnKind::Atributo, ha.id_header_atribute))
                .copied()
                .or(ha.order)
                .unwrap_or(headers.len() as i64 + 1);
            headers.push(HeaderDraft {
                id,
                titulo: ha.titulo.clone(),
                editable: true,
                base_header_id: None,
                es_cantidad: ha.is_cantidad,
                cantidad_definida: true,
                pregunta_cantidad: false,
                operaciones: operaciones_desde_calculo(ha.calculo.as_ref(), &titulos),
                orden,
            });
        }
    }

    super::headers::normalize_headers(headers)
}

fn operaciones_desde_calculo(
    calculo: Option<&Calculo>,
    titulos: &HashMap<String, String>,
) -> Vec<OperacionCalculo> {
    let Some(calculo) = calculo.filter(|c| c.activo) else {
        return Vec::new();
    };
    calculo
        .operaciones
        .iter()
        .filter_map(|op| {
            let mut valores: Vec<ValorCalculo> = Vec::new();
            for id in op.headers_base.iter().flatten() {
                valores.push(valor_ligado(format!("base-{id}"), ColumnKind::Base, titulos));
            }
            for id in op.headers_atributes.iter().flatten() {
                valores.push(valor_ligado(format!("attr-{id}"), ColumnKind::Atributo, titulos));
            }
            if valores.is_empty() {
                None
            } else {
                Some(OperacionCalculo {
                    operador: op.tipo,
                    valores,
                })
            }
        })
        .collect()
}

fn valor_ligado(
    referencia: String,
    kind: ColumnKind,
    titulos: &HashMap<String, String>,
) -> ValorCalculo {
    let titulo = titulos.get(&referencia).cloned();
    ValorCalculo {
        id: uuid::Uuid::new_v4().to_string(),
        header_ref: Some(referencia),
        header_title: titulo,
        tipo: kind,
    }
}
