//! Llamadas REST del catálogo de personal.

use contracts::domain::a004_personal::Personal;

use crate::shared::api_utils::get_text;

pub async fn fetch_personal() -> Result<Vec<Personal>, String> {
    let body = get_text("/personal").await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}
