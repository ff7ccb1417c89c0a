use serde::{Deserialize, Serialize};

/// Operador de un paso de cálculo. Los nombres serializados son los que
/// persiste el backend dentro del JSON de cada header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperadorCalculo {
    Multiplicacion,
    Division,
    Suma,
    Resta,
}

impl OperadorCalculo {
    /// Glifo usado al renderizar expresiones ("Cantidad × $Unitario").
    pub fn simbolo(&self) -> &'static str {
        match self {
            OperadorCalculo::Multiplicacion => "×",
            OperadorCalculo::Division => "÷",
            OperadorCalculo::Suma => "+",
            OperadorCalculo::Resta => "-",
        }
    }

    pub fn nombre(&self) -> &'static str {
        match self {
            OperadorCalculo::Multiplicacion => "multiplicación",
            OperadorCalculo::Division => "división",
            OperadorCalculo::Suma => "suma",
            OperadorCalculo::Resta => "resta",
        }
    }
}

/// Un paso de cálculo persistido: referencia columnas base y/o atributos
/// por su id numérico.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculoOperacion {
    pub tipo: OperadorCalculo,
    #[serde(default)]
    pub headers_base: Option<Vec<i64>>,
    #[serde(default)]
    pub headers_atributes: Option<Vec<i64>>,
}

/// Cálculo asociado a una columna persistida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculo {
    pub activo: bool,
    #[serde(rename = "isMultiple", default)]
    pub is_multiple: bool,
    #[serde(default)]
    pub operaciones: Vec<CalculoOperacion>,
}

/// Columna base del sistema (Detalle, Cantidad, Unidad, $Unitario, $Total).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderBase {
    pub id_header_base: i64,
    pub titulo: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub calculo: Option<Calculo>,
}

/// Columna atributo definida por el usuario para un tipo de material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderAtributo {
    pub id_header_atribute: i64,
    pub titulo: String,
    #[serde(rename = "isCantidad", default)]
    pub is_cantidad: bool,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub calculo: Option<Calculo>,
    #[serde(default)]
    pub total_costo_header: f64,
}

/// Posición persistida de una columna dentro de la tabla.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHeader {
    /// "base" o "atribute" (grafía histórica del backend).
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    pub order: i64,
}

/// Tipo de material: define el esquema de columnas de su tabla.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoMaterial {
    pub id_tipo_material: i64,
    pub titulo: String,
    #[serde(default)]
    pub total_costo_unitario: f64,
    #[serde(default)]
    pub total_costo_total: f64,
    #[serde(default)]
    pub headers_base: Vec<HeaderBase>,
    #[serde(default)]
    pub headers_atributes: Option<Vec<HeaderAtributo>>,
    #[serde(default)]
    pub order_headers: Option<Vec<OrderHeader>>,
}

/// Valor de un atributo para un material concreto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialAtributo {
    pub id_header_atribute: i64,
    pub value: String,
}

/// Fila de material perteneciente a un tipo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id_material: i64,
    pub id_tipo_material: i64,
    pub detalle: String,
    #[serde(default)]
    pub unidad: Option<String>,
    #[serde(default)]
    pub cantidad: Option<String>,
    #[serde(default)]
    pub costo_unitario: f64,
    #[serde(default)]
    pub costo_total: f64,
    #[serde(default)]
    pub atributos: Option<Vec<MaterialAtributo>>,
}

fn default_true() -> bool {
    true
}
