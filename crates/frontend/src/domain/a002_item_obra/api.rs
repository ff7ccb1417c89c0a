//! Llamadas REST del módulo de items de obra.

use contracts::domain::a002_item_obra::ItemObra;

use crate::shared::api_utils::{get_text, send_json};

pub async fn fetch_items_obra(id_obra: i64) -> Result<Vec<ItemObra>, String> {
    let body = get_text(&format!("/itemsObra?id_obra={id_obra}")).await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}

pub async fn save_item_obra(item: &ItemObra) -> Result<ItemObra, String> {
    let payload = serde_json::to_string(item).map_err(|e| e.to_string())?;
    let body = send_json("/itemsObra", "POST", &payload).await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}

pub async fn update_item_obra(item: &ItemObra) -> Result<ItemObra, String> {
    let payload = serde_json::to_string(item).map_err(|e| e.to_string())?;
    let body = send_json(
        &format!("/itemsObra/{}", item.id_item_obra),
        "PUT",
        &payload,
    )
    .await?;
    serde_json::from_str(&body).map_err(|e| format!("respuesta inválida: {e}"))
}
