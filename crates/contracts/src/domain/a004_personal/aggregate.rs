use serde::{Deserialize, Serialize};

use crate::domain::a006_costo::CostoValue;
use crate::shared::format::round2;

/// Registro del catálogo de personal con la apertura salarial mensual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub id_personal: i64,
    pub funcion: String,
    #[serde(default)]
    pub sueldo_bruto: f64,
    #[serde(default)]
    pub descuentos: f64,
    #[serde(default)]
    pub porc_descuento: f64,
    #[serde(default)]
    pub sueldo_no_remunerado: f64,
    #[serde(default)]
    pub neto_mensual_con_vianda_xdia: f64,
    #[serde(default)]
    pub cargas_sociales: f64,
    #[serde(default)]
    pub porc_cargas_sociales_sobre_sueldo_bruto: f64,
    #[serde(default)]
    pub costo_total_mensual: f64,
    #[serde(default)]
    pub costo_mensual_sin_seguros: f64,
    #[serde(default)]
    pub seguros_art_mas_vo: f64,
    #[serde(default)]
    pub examen_medico_y_capacitacion: f64,
    #[serde(default)]
    pub indumentaria_y_epp: f64,
    #[serde(default)]
    pub pernoctes_y_viajes: f64,
    #[serde(default)]
    pub costo_total_mensual_apertura: f64,
}

impl Personal {
    /// Apertura mensual usada por el motor de costos (bucket "Detalle de
    /// personal"). Las etiquetas son las que muestran las tablas de resumen.
    pub fn componentes_mensuales(&self) -> Vec<CostoValue> {
        vec![
            CostoValue::new("CostoR+NR+CS", round2(self.costo_mensual_sin_seguros)),
            CostoValue::new("Seguros", round2(self.seguros_art_mas_vo)),
            CostoValue::new("Ex Medic+Cap.", round2(self.examen_medico_y_capacitacion)),
            CostoValue::new("Indum.y EPP", round2(self.indumentaria_y_epp)),
            CostoValue::new("Pernoctes", round2(self.pernoctes_y_viajes)),
        ]
    }

    pub fn costo_unitario_mensual(&self) -> f64 {
        round2(self.componentes_mensuales().iter().map(|c| c.value).sum())
    }
}
