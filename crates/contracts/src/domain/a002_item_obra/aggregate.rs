use serde::{Deserialize, Serialize};

/// Equipo vinculado a un item de obra, con sus meses de uso cargados
/// por el usuario en la etapa de asignación de recursos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipoAsignado {
    pub id_equipo: i64,
    pub detalle: String,
    pub meses_operario: f64,
}

/// Mano de obra vinculada a un item de obra.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalAsignado {
    pub id_personal: i64,
    pub funcion: String,
    pub meses_operario: f64,
}

/// Item (partida) de una obra: la unidad a la que se asignan recursos
/// y sobre la que se derivan los costos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemObra {
    // El backend expone el campo con esta capitalización histórica.
    #[serde(rename = "id_item_Obra")]
    pub id_item_obra: i64,
    pub descripcion: String,
    #[serde(default)]
    pub meses_operario: Option<f64>,
    #[serde(default)]
    pub capataz: Option<f64>,
    #[serde(default)]
    pub equipos: Vec<EquipoAsignado>,
    #[serde(rename = "manoObra", default)]
    pub mano_obra: Vec<PersonalAsignado>,
    /// Total monetario derivado por el motor de costos; 0 hasta que se genera.
    #[serde(default)]
    pub costo_total: f64,
}

impl ItemObra {
    /// Un item se considera completo cuando tiene meses operario positivos.
    /// Es la precondición que la pantalla de recursos verifica antes de
    /// habilitar la generación de costos.
    pub fn is_complete(&self) -> bool {
        matches!(self.meses_operario, Some(m) if m > 0.0)
    }
}
