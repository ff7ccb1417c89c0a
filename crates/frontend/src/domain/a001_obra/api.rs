//! Llamadas REST del módulo de obras.

use contracts::domain::a001_obra::Obra;

use crate::shared::api_utils::{get_text, send_json};

pub async fn fetch_obras() -> Result<Vec<Obra>, String> {
    let body = get_text("/obras").await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}

pub async fn fetch_obra(id_obra: i64) -> Result<Obra, String> {
    let body = get_text(&format!("/obras/{id_obra}")).await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}

pub async fn save_obra(obra: &Obra) -> Result<Obra, String> {
    let payload = serde_json::to_string(obra).map_err(|e| e.to_string())?;
    let body = send_json("/obras", "POST", &payload).await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}

pub async fn update_obra(id_obra: i64, obra: &Obra) -> Result<Obra, String> {
    let payload = serde_json::to_string(obra).map_err(|e| e.to_string())?;
    let body = send_json(&format!("/obras/{id_obra}"), "PUT", &payload).await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}
