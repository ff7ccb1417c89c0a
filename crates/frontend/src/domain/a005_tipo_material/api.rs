//! Llamadas REST del módulo de materiales.

use contracts::domain::a005_tipo_material::{Material, TipoMaterial};

use crate::shared::api_utils::{get_text, send_json};

pub async fn fetch_tipos() -> Result<Vec<TipoMaterial>, String> {
    let body = get_text("/materiales/tipos").await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}

pub async fn fetch_tipo_detalle(id_tipo: i64) -> Result<TipoMaterial, String> {
    let body = get_text(&format!("/materiales/tipos/{id_tipo}")).await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}

pub async fn fetch_materiales_por_tipo(id_tipo: i64) -> Result<Vec<Material>, String> {
    let body = get_text(&format!("/materiales/tipo/{id_tipo}")).await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}

pub async fn save_material(material: &Material) -> Result<Material, String> {
    let payload = serde_json::to_string(material).map_err(|e| e.to_string())?;
    let body = send_json("/materiales", "POST", &payload).await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}
