use serde::{Deserialize, Serialize};

use crate::domain::a006_costo::CostoValue;
use crate::shared::format::round2;

/// Equipo del catálogo (inmuebles, rodados y maquinaria) con la apertura
/// mensual de costos tal como la importa el backend desde la planilla
/// madre. Los nombres de campo respetan la capitalización del backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipo {
    pub id_equipo: i64,
    pub detalle: String,
    #[serde(rename = "Amortizacion")]
    pub amortizacion: f64,
    #[serde(rename = "Seguro")]
    pub seguro: f64,
    #[serde(rename = "Patente")]
    pub patente: f64,
    #[serde(rename = "Transporte")]
    pub transporte: f64,
    #[serde(rename = "Fee_alquiler")]
    pub fee_alquiler: f64,
    #[serde(rename = "Combustible")]
    pub combustible: f64,
    #[serde(rename = "Lubricantes")]
    pub lubricantes: f64,
    #[serde(rename = "Neumaticos")]
    pub neumaticos: f64,
    #[serde(rename = "Mantenim")]
    pub mantenimiento: f64,
    #[serde(rename = "Operador")]
    pub operador: f64,
    #[serde(rename = "Total_mes")]
    pub total_mes: f64,
}

impl Equipo {
    /// Apertura del costo mensual base (bucket "Inmuebles, rodados y equipos").
    pub fn componentes_base(&self) -> Vec<CostoValue> {
        vec![
            CostoValue::new("Amortizacion", round2(self.amortizacion)),
            CostoValue::new("Seguro", round2(self.seguro)),
            CostoValue::new("Patente", round2(self.patente)),
            CostoValue::new("Transporte", round2(self.transporte)),
            CostoValue::new("Fee Alquiler ", round2(self.fee_alquiler)),
        ]
    }

    /// Apertura de combustibles y lubricantes (bucket propio).
    pub fn componentes_combustibles(&self) -> Vec<CostoValue> {
        vec![
            CostoValue::new("Combustible", round2(self.combustible)),
            CostoValue::new("Lubricante", round2(self.lubricantes)),
        ]
    }

    /// Apertura de neumáticos y mantenimiento (bucket propio).
    pub fn componentes_neumaticos(&self) -> Vec<CostoValue> {
        vec![
            CostoValue::new("Neumaticos", round2(self.neumaticos)),
            CostoValue::new("Mantenimiento", round2(self.mantenimiento)),
        ]
    }

    /// Costo unitario mensual del bucket base: suma de sus componentes.
    pub fn costo_unitario_mensual(&self) -> f64 {
        round2(self.componentes_base().iter().map(|c| c.value).sum())
    }
}
