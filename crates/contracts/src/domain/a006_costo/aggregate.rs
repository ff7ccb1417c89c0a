use serde::{Deserialize, Serialize};

/// Resumen por item de obra dentro de un bucket de costos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoCostoItem {
    pub id: i64,
    #[serde(default)]
    pub tipo: Option<String>,
    pub desc: String,
    #[serde(default)]
    pub costo_total: f64,
}

/// Bucket de agregación: agrupa líneas de costo por categoría de recurso.
///
/// Invariante: `costo_total` es siempre la suma redondeada a 2 decimales
/// de los `costo_total` de sus líneas; se recalcula en cada mutación y
/// nunca se parchea por separado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoCosto {
    pub id_tipo_costo: i64,
    pub tipo: String,
    pub descripcion: String,
    #[serde(default)]
    pub costo_total: f64,
    #[serde(default)]
    pub items: Vec<TipoCostoItem>,
}

/// Componente nominal de una línea de costo (apertura mostrada en tablas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostoValue {
    pub name: String,
    pub value: f64,
}

impl CostoValue {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// Asignación de una línea de costo a un item de obra.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostoItemObra {
    #[serde(rename = "idItem")]
    pub id_item: i64,
    pub cantidad: f64,
    pub total: f64,
    /// Porcentaje (0..=100) del total de la línea que absorbe el item.
    pub porcentaje: f64,
}

/// Línea de costo de un recurso, repartida entre uno o más items de obra.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Costo {
    pub id_costo: i64,
    pub id_tipo_costo: i64,
    pub detalle: String,
    #[serde(default)]
    pub values: Vec<CostoValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afectacion: Option<serde_json::Value>,
    pub unidad: String,
    pub costo_unitario: f64,
    pub cantidad: f64,
    pub costo_total: f64,
    #[serde(rename = "itemsObra", default)]
    pub items_obra: Vec<CostoItemObra>,
}
