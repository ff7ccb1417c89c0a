//! Fila de material en edición y recálculo de sus celdas calculadas.

use std::collections::HashMap;

use contracts::shared::format::{format_number, parse_numeric};

use super::calculo::evaluar_operaciones;
use super::headers::{HeaderDraft, BASE_CANTIDAD, BASE_DETALLE, BASE_TOTAL, BASE_UNIDAD, BASE_UNITARIO};

/// Campo base de la fila, direccionable por el id de su columna.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoDraft {
    Detalle,
    Cantidad,
    Unidad,
    CostoUnitario,
    CostoTotal,
}

impl CampoDraft {
    pub fn desde_base_id(id: u8) -> Option<Self> {
        match id {
            BASE_DETALLE => Some(CampoDraft::Detalle),
            BASE_CANTIDAD => Some(CampoDraft::Cantidad),
            BASE_UNIDAD => Some(CampoDraft::Unidad),
            BASE_UNITARIO => Some(CampoDraft::CostoUnitario),
            BASE_TOTAL => Some(CampoDraft::CostoTotal),
            _ => None,
        }
    }
}

/// Valores de la fila en edición. Todo se guarda como texto tal cual lo
/// tipeó el usuario; la conversión numérica ocurre recién al recalcular.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialDraft {
    pub detalle: String,
    pub cantidad: String,
    pub unidad: String,
    pub costo_unitario: String,
    pub costo_total: String,
    /// Valores de columnas custom, por id de columna.
    pub atributos: HashMap<String, String>,
}

impl MaterialDraft {
    pub fn campo(&self, campo: CampoDraft) -> &str {
        match campo {
            CampoDraft::Detalle => &self.detalle,
            CampoDraft::Cantidad => &self.cantidad,
            CampoDraft::Unidad => &self.unidad,
            CampoDraft::CostoUnitario => &self.costo_unitario,
            CampoDraft::CostoTotal => &self.costo_total,
        }
    }

    pub fn set_campo(&mut self, campo: CampoDraft, valor: String) {
        match campo {
            CampoDraft::Detalle => self.detalle = valor,
            CampoDraft::Cantidad => self.cantidad = valor,
            CampoDraft::Unidad => self.unidad = valor,
            CampoDraft::CostoUnitario => self.costo_unitario = valor,
            CampoDraft::CostoTotal => self.costo_total = valor,
        }
    }

    /// Fila vacía con un slot por cada columna custom presente.
    pub fn vacio_para(headers: &[HeaderDraft]) -> Self {
        let mut draft = Self::default();
        for header in headers {
            if !header.es_base() {
                draft.atributos.insert(header.id.clone(), String::new());
            }
        }
        draft
    }

    fn valor_por_id(&self, id: &str, headers: &[HeaderDraft]) -> Option<f64> {
        let texto = if let Some(header) = headers.iter().find(|h| h.id == id) {
            match header.base_header_id.and_then(CampoDraft::desde_base_id) {
                Some(campo) => self.campo(campo).to_string(),
                None => self.atributos.get(id).cloned().unwrap_or_default(),
            }
        } else {
            return None;
        };
        let texto = texto.trim();
        if texto.is_empty() {
            return None;
        }
        Some(parse_numeric(texto))
    }
}

/// Recalcula las celdas con cálculo de la fila: primero las columnas
/// atributo, después las bases, de modo que $Total vea los atributos ya
/// actualizados. Solo se escriben resultados completos y finitos; una
/// celda cuyo cálculo quedó incompleto conserva lo tipeado.
pub fn recalcular(headers: &[HeaderDraft], draft: &MaterialDraft) -> MaterialDraft {
    let mut actual = draft.clone();

    let pasadas: [&dyn Fn(&HeaderDraft) -> bool; 2] =
        [&|h: &HeaderDraft| !h.es_base(), &|h: &HeaderDraft| h.es_base()];

    for filtro in pasadas {
        for header in headers.iter().filter(|h| filtro(h) && !h.operaciones.is_empty()) {
            let snapshot = actual.clone();
            let resultado = evaluar_operaciones(&header.operaciones, |id| {
                snapshot.valor_por_id(id, headers)
            });
            if !resultado.completa || !resultado.valor.is_finite() {
                continue;
            }
            let texto = format_number(resultado.valor);
            match header.base_header_id.and_then(CampoDraft::desde_base_id) {
                Some(campo) => actual.set_campo(campo, texto),
                None => {
                    actual.atributos.insert(header.id.clone(), texto);
                }
            }
        }
    }

    actual
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_tipo_material::headers::{ColumnKind, OperacionCalculo, ValorCalculo};
    use contracts::domain::a005_tipo_material::OperadorCalculo;

    fn operando(referencia: &str, kind: ColumnKind) -> ValorCalculo {
        ValorCalculo {
            id: uuid::Uuid::new_v4().to_string(),
            header_ref: Some(referencia.to_string()),
            header_title: None,
            tipo: kind,
        }
    }

    fn headers_con_total_calculado() -> Vec<HeaderDraft> {
        let mut total = HeaderDraft::base(BASE_TOTAL);
        total.operaciones.push(OperacionCalculo {
            operador: OperadorCalculo::Multiplicacion,
            valores: vec![
                operando("base-2", ColumnKind::Base),
                operando("base-4", ColumnKind::Base),
            ],
        });
        vec![
            HeaderDraft::base(BASE_DETALLE),
            HeaderDraft::base(BASE_CANTIDAD),
            HeaderDraft::base(BASE_UNIDAD),
            HeaderDraft::base(BASE_UNITARIO),
            total,
        ]
    }

    #[test]
    fn total_es_cantidad_por_unitario() {
        let headers = headers_con_total_calculado();
        let mut draft = MaterialDraft::vacio_para(&headers);
        draft.cantidad = "3".to_string();
        draft.costo_unitario = "2.5".to_string();

        let recalculado = recalcular(&headers, &draft);
        assert_eq!(recalculado.costo_total, "7.5");
    }

    #[test]
    fn acepta_coma_decimal() {
        let headers = headers_con_total_calculado();
        let mut draft = MaterialDraft::vacio_para(&headers);
        draft.cantidad = "1,5".to_string();
        draft.costo_unitario = "4".to_string();

        let recalculado = recalcular(&headers, &draft);
        assert_eq!(recalculado.costo_total, "6");
    }

    #[test]
    fn celda_incompleta_conserva_lo_tipeado() {
        let headers = headers_con_total_calculado();
        let mut draft = MaterialDraft::vacio_para(&headers);
        draft.cantidad = "3".to_string();
        draft.costo_total = "999".to_string();
        // costo_unitario vacío: el operando no resuelve.

        let recalculado = recalcular(&headers, &draft);
        assert_eq!(recalculado.costo_total, "999");
    }

    #[test]
    fn los_atributos_se_calculan_antes_que_las_bases() {
        // attr "Subtotal" = Cantidad × $Unitario; $Total = Subtotal + $Unitario
        let mut subtotal = HeaderDraft::nuevo_custom("Subtotal", 6);
        let subtotal_id = subtotal.id.clone();
        subtotal.operaciones.push(OperacionCalculo {
            operador: OperadorCalculo::Multiplicacion,
            valores: vec![
                operando("base-2", ColumnKind::Base),
                operando("base-4", ColumnKind::Base),
            ],
        });
        let mut total = HeaderDraft::base(BASE_TOTAL);
        total.operaciones.push(OperacionCalculo {
            operador: OperadorCalculo::Suma,
            valores: vec![
                operando(&subtotal_id, ColumnKind::Atributo),
                operando("base-4", ColumnKind::Base),
            ],
        });
        let headers = vec![
            HeaderDraft::base(BASE_DETALLE),
            HeaderDraft::base(BASE_CANTIDAD),
            HeaderDraft::base(BASE_UNITARIO),
            subtotal,
            total,
        ];

        let mut draft = MaterialDraft::vacio_para(&headers);
        draft.cantidad = "2".to_string();
        draft.costo_unitario = "10".to_string();

        let recalculado = recalcular(&headers, &draft);
        assert_eq!(recalculado.atributos.get(&subtotal_id).map(String::as_str), Some("20"));
        assert_eq!(recalculado.costo_total, "30");
    }
}
