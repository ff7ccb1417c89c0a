//! Motor de generación de estructuras de costos.
//!
//! A partir de los items de obra con recursos asignados y de los catálogos
//! de equipos y personal, produce los buckets de costos, las líneas de
//! costo con su reparto por item y los items con su total actualizado.

use std::collections::HashMap;

use contracts::domain::a002_item_obra::ItemObra;
use contracts::domain::a003_equipo::Equipo;
use contracts::domain::a004_personal::Personal;
use contracts::domain::a006_costo::{Costo, CostoItemObra, CostoValue, TipoCosto, TipoCostoItem};
use contracts::shared::format::round2;

pub const TIPO_EQUIPOS: i64 = 1;
pub const TIPO_PERSONAL: i64 = 2;
pub const TIPO_COMBUSTIBLES: i64 = 3;
pub const TIPO_NEUMATICOS: i64 = 4;

pub struct GenerateCostInput<'a> {
    pub items: &'a [ItemObra],
    pub equipos: &'a [Equipo],
    pub personal: &'a [Personal],
}

#[derive(Debug, Clone, Default)]
pub struct GenerateCostOutput {
    pub tipos_costo: Vec<TipoCosto>,
    pub costos: Vec<Costo>,
    pub items_actualizados: Vec<ItemObra>,
}

/// Usos de un recurso: pares (id de item, meses), en orden de aparición.
type Usos = Vec<(i64, f64)>;

/// Acumula los meses de uso por recurso recorriendo los items en orden.
/// Un mismo recurso repetido dentro de un item suma sus meses; los usos
/// con meses no positivos se ignoran.
fn acumular_usos<I>(items: &[ItemObra], extraer: impl Fn(&ItemObra) -> I) -> Vec<(i64, Usos)>
where
    I: IntoIterator<Item = (i64, f64)>,
{
    let mut orden: Vec<i64> = Vec::new();
    let mut por_recurso: HashMap<i64, Usos> = HashMap::new();

    for item in items {
        for (id_recurso, meses) in extraer(item) {
            if meses <= 0.0 {
                continue;
            }
            let usos = por_recurso.entry(id_recurso).or_insert_with(|| {
                orden.push(id_recurso);
                Vec::new()
            });
            match usos.iter_mut().find(|(id_item, _)| *id_item == item.id_item_obra) {
                Some((_, acumulado)) => *acumulado += meses,
                None => usos.push((item.id_item_obra, meses)),
            }
        }
    }

    orden
        .into_iter()
        .filter_map(|id| por_recurso.remove(&id).map(|usos| (id, usos)))
        .collect()
}

fn tipo_costo_base(id: i64, tipo: &str, descripcion: &str, items: &[ItemObra]) -> TipoCosto {
    TipoCosto {
        id_tipo_costo: id,
        tipo: tipo.to_string(),
        descripcion: descripcion.to_string(),
        costo_total: 0.0,
        items: items
            .iter()
            .map(|item| TipoCostoItem {
                id: item.id_item_obra,
                tipo: Some(tipo.to_string()),
                desc: item.descripcion.clone(),
                costo_total: 0.0,
            })
            .collect(),
    }
}

/// Reparto de una línea entre los items que usan el recurso. El porcentaje
/// se expresa sobre 100 y el total por item se redondea a 2 decimales.
fn construir_items_obra(usos: &Usos, costo_unitario: f64, costo_total: f64) -> Vec<CostoItemObra> {
    usos.iter()
        .map(|(id_item, meses)| {
            let total = round2(meses * costo_unitario);
            let porcentaje = if costo_total != 0.0 {
                round2(total / costo_total * 100.0)
            } else {
                0.0
            };
            CostoItemObra {
                id_item: *id_item,
                cantidad: *meses,
                total,
                porcentaje,
            }
        })
        .collect()
}

/// Emite una línea de costo: la agrega a la lista, suma su total al
/// bucket y acumula el reparto en los resúmenes por item. El id de línea
/// es secuencial desde 1.
#[allow(clippy::too_many_arguments)]
fn emitir_linea(
    bucket_id: i64,
    detalle: &str,
    values: Vec<CostoValue>,
    costo_unitario: f64,
    usos: &Usos,
    buckets: &mut [TipoCosto],
    costos: &mut Vec<Costo>,
    totales_item: &mut HashMap<i64, f64>,
) {
    let cantidad: f64 = usos.iter().map(|(_, meses)| meses).sum();
    let costo_total = round2(costo_unitario * cantidad);
    let items_obra = construir_items_obra(usos, costo_unitario, costo_total);

    if let Some(bucket) = buckets.iter_mut().find(|b| b.id_tipo_costo == bucket_id) {
        for asignacion in &items_obra {
            if let Some(resumen) = bucket.items.iter_mut().find(|i| i.id == asignacion.id_item) {
                resumen.costo_total = round2(resumen.costo_total + asignacion.total);
            }
            let acumulado = totales_item.entry(asignacion.id_item).or_insert(0.0);
            *acumulado = round2(*acumulado + asignacion.total);
        }
        bucket.costo_total = round2(bucket.costo_total + costo_total);
    }

    costos.push(Costo {
        id_costo: costos.len() as i64 + 1,
        id_tipo_costo: bucket_id,
        detalle: detalle.to_string(),
        values,
        afectacion: None,
        unidad: "mes".to_string(),
        costo_unitario,
        cantidad,
        costo_total,
        items_obra,
    });
}

/// Genera las estructuras de costos completas. Los buckets sin líneas no
/// aparecen en la salida; los totales de bucket y de item son siempre la
/// suma redondeada de sus componentes.
pub fn generar_estructuras_costo(input: GenerateCostInput<'_>) -> GenerateCostOutput {
    let mut buckets: Vec<TipoCosto> = vec![
        tipo_costo_base(
            TIPO_EQUIPOS,
            "equipo",
            "Inmuebles , rodados y equipos",
            input.items,
        ),
        tipo_costo_base(
            TIPO_COMBUSTIBLES,
            "equipo",
            "Combustibles  y Lubricantes",
            input.items,
        ),
        tipo_costo_base(
            TIPO_NEUMATICOS,
            "equipo",
            "Neumaticos y Mantenimiento",
            input.items,
        ),
        tipo_costo_base(TIPO_PERSONAL, "personal", "Detalle de personal", input.items),
    ];
    let mut costos: Vec<Costo> = Vec::new();
    let mut totales_item: HashMap<i64, f64> = HashMap::new();

    // Equipos: línea principal más combustibles y neumáticos cuando su
    // costo unitario es positivo.
    let usos_equipos = acumular_usos(input.items, |item| {
        item.equipos
            .iter()
            .map(|e| (e.id_equipo, e.meses_operario))
            .collect::<Vec<_>>()
    });
    for (id_equipo, usos) in &usos_equipos {
        let Some(equipo) = input.equipos.iter().find(|e| e.id_equipo == *id_equipo) else {
            log::warn!("equipo {id_equipo} asignado pero ausente del catálogo");
            continue;
        };

        let mut values = equipo.componentes_base();
        values.push(CostoValue::new("Promedio", round2(equipo.amortizacion * 100.0)));
        emitir_linea(
            TIPO_EQUIPOS,
            &equipo.detalle,
            values,
            equipo.costo_unitario_mensual(),
            usos,
            &mut buckets,
            &mut costos,
            &mut totales_item,
        );

        let combustibles = equipo.componentes_combustibles();
        let unitario_comb = round2(combustibles.iter().map(|c| c.value).sum());
        if unitario_comb > 0.0 {
            emitir_linea(
                TIPO_COMBUSTIBLES,
                &equipo.detalle,
                combustibles,
                unitario_comb,
                usos,
                &mut buckets,
                &mut costos,
                &mut totales_item,
            );
        }

        let neumaticos = equipo.componentes_neumaticos();
        let unitario_neum = round2(neumaticos.iter().map(|c| c.value).sum());
        if unitario_neum > 0.0 {
            emitir_linea(
                TIPO_NEUMATICOS,
                &equipo.detalle,
                neumaticos,
                unitario_neum,
                usos,
                &mut buckets,
                &mut costos,
                &mut totales_item,
            );
        }
    }

    // Personal.
    let usos_personal = acumular_usos(input.items, |item| {
        item.mano_obra
            .iter()
            .map(|p| (p.id_personal, p.meses_operario))
            .collect::<Vec<_>>()
    });
    for (id_personal, usos) in &usos_personal {
        let Some(persona) = input.personal.iter().find(|p| p.id_personal == *id_personal)
        else {
            log::warn!("personal {id_personal} asignado pero ausente del catálogo");
            continue;
        };
        emitir_linea(
            TIPO_PERSONAL,
            &persona.funcion,
            persona.componentes_mensuales(),
            persona.costo_unitario_mensual(),
            usos,
            &mut buckets,
            &mut costos,
            &mut totales_item,
        );
    }

    let items_actualizados = input
        .items
        .iter()
        .map(|item| {
            let mut actualizado = item.clone();
            actualizado.costo_total = totales_item
                .get(&item.id_item_obra)
                .copied()
                .unwrap_or(0.0);
            actualizado
        })
        .collect();

    let con_lineas: Vec<i64> = costos.iter().map(|c| c.id_tipo_costo).collect();
    buckets.retain(|b| con_lineas.contains(&b.id_tipo_costo));

    GenerateCostOutput {
        tipos_costo: buckets,
        costos,
        items_actualizados,
    }
}
