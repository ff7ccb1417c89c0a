//! Llamadas REST del catálogo de equipos.

use contracts::domain::a003_equipo::Equipo;

use crate::shared::api_utils::get_text;

pub async fn fetch_equipos() -> Result<Vec<Equipo>, String> {
    let body = get_text("/equipos/").await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}
