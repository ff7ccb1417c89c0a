//! Modelo de columnas editable de la tabla de materiales.
//!
//! Las columnas base son fijas del sistema; las columnas custom las crea el
//! usuario. Cada columna puede llevar operaciones de cálculo que referencian
//! otras columnas por id.

use contracts::domain::a005_tipo_material::OperadorCalculo;
use serde::{Deserialize, Serialize};

pub const BASE_DETALLE: u8 = 1;
pub const BASE_CANTIDAD: u8 = 2;
pub const BASE_UNIDAD: u8 = 3;
pub const BASE_UNITARIO: u8 = 4;
pub const BASE_TOTAL: u8 = 5;

/// $Total siempre cierra la tabla.
pub const ORDEN_TOTAL: i64 = 999;

/// Clase de columna referenciada desde una operación de cálculo.
/// "atribute" conserva la grafía histórica del backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "atribute")]
    Atributo,
}

/// Operando de una operación: un slot que apunta (o apuntará) a otra columna.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValorCalculo {
    pub id: String,
    #[serde(rename = "headerRef", default)]
    pub header_ref: Option<String>,
    #[serde(rename = "headerTitle", default)]
    pub header_title: Option<String>,
    pub tipo: ColumnKind,
}

/// Operación de cálculo: un operador aplicado en cadena sobre sus operandos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperacionCalculo {
    pub operador: OperadorCalculo,
    pub valores: Vec<ValorCalculo>,
}

/// Columna en edición, base o custom, con su cálculo asociado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderDraft {
    pub id: String,
    pub titulo: String,
    pub editable: bool,
    #[serde(rename = "baseHeaderId", default)]
    pub base_header_id: Option<u8>,
    pub es_cantidad: bool,
    pub cantidad_definida: bool,
    pub pregunta_cantidad: bool,
    #[serde(default)]
    pub operaciones: Vec<OperacionCalculo>,
    pub orden: i64,
}

pub struct BaseHeaderDef {
    pub id: u8,
    pub etiqueta: &'static str,
    pub opcional: bool,
    pub orden: i64,
}

/// Columnas base del sistema en su orden por defecto.
pub static BASE_HEADERS: [BaseHeaderDef; 5] = [
    BaseHeaderDef {
        id: BASE_DETALLE,
        etiqueta: "Detalle",
        opcional: false,
        orden: 1,
    },
    BaseHeaderDef {
        id: BASE_CANTIDAD,
        etiqueta: "Cantidad",
        opcional: true,
        orden: 2,
    },
    BaseHeaderDef {
        id: BASE_UNIDAD,
        etiqueta: "Unidad",
        opcional: true,
        orden: 3,
    },
    BaseHeaderDef {
        id: BASE_UNITARIO,
        etiqueta: "$Unitario",
        opcional: false,
        orden: 4,
    },
    BaseHeaderDef {
        id: BASE_TOTAL,
        etiqueta: "$Total",
        opcional: false,
        orden: ORDEN_TOTAL,
    },
];

pub fn base_header_def(id: u8) -> Option<&'static BaseHeaderDef> {
    BASE_HEADERS.iter().find(|d| d.id == id)
}

pub fn base_header_label(id: u8) -> &'static str {
    base_header_def(id).map(|d| d.etiqueta).unwrap_or("")
}

pub fn base_header_orden(id: u8) -> i64 {
    base_header_def(id).map(|d| d.orden).unwrap_or(0)
}

impl HeaderDraft {
    /// Columna base del sistema con sus propiedades por defecto.
    pub fn base(id: u8) -> Self {
        let editable = matches!(id, BASE_CANTIDAD | BASE_UNIDAD);
        Self {
            id: format!("base-{id}"),
            titulo: base_header_label(id).to_string(),
            editable,
            base_header_id: Some(id),
            es_cantidad: id == BASE_CANTIDAD,
            cantidad_definida: true,
            pregunta_cantidad: false,
            operaciones: Vec::new(),
            orden: base_header_orden(id),
        }
    }

    /// Columna custom vacía lista para editar.
    pub fn nuevo_custom(titulo: &str, orden: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            titulo: titulo.to_string(),
            editable: true,
            base_header_id: None,
            es_cantidad: false,
            cantidad_definida: false,
            pregunta_cantidad: true,
            operaciones: Vec::new(),
            orden,
        }
    }

    pub fn es_base(&self) -> bool {
        self.base_header_id.is_some()
    }

    /// Título a mostrar; las bases siempre muestran su etiqueta del sistema.
    pub fn titulo_visible(&self) -> String {
        match self.base_header_id {
            Some(id) => base_header_label(id).to_string(),
            None => self.titulo.clone(),
        }
    }
}

/// Normaliza una lista de columnas para edición: convierte referencias
/// vacías ("") en `None` y ordena de forma estable por `orden`.
pub fn normalize_headers(mut headers: Vec<HeaderDraft>) -> Vec<HeaderDraft> {
    for header in &mut headers {
        for op in &mut header.operaciones {
            for valor in &mut op.valores {
                if valor.header_ref.as_deref() == Some("") {
                    valor.header_ref = None;
                }
                if valor.header_title.as_deref() == Some("") {
                    valor.header_title = None;
                }
            }
        }
    }
    headers.sort_by_key(|h| h.orden);
    headers
}
