use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Obra (proyecto de construcción) agrupada bajo una cotización.
///
/// Espejo del JSON que entrega el backend en `/obras`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obra {
    #[serde(default)]
    pub id_obra: Option<i64>,
    pub id_cliente: i64,
    #[serde(default)]
    pub codigo_proyecto: Option<String>,
    pub nombre_proyecto: String,
    #[serde(default)]
    pub descripcion_proyecto: Option<String>,
    pub fecha_creacion: NaiveDate,
    #[serde(default)]
    pub fecha_entrega: Option<NaiveDate>,
    #[serde(default)]
    pub fecha_recepcion: Option<NaiveDate>,
    pub moneda: String,
    pub estado: String,
}

impl Obra {
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre_proyecto.trim().is_empty() {
            return Err("El nombre del proyecto no puede estar vacío".into());
        }
        if self.moneda.trim().is_empty() {
            return Err("La moneda es obligatoria".into());
        }
        Ok(())
    }
}
