//! Persistencia en localStorage de los datos de la cotización en curso.
//!
//! Los lectores toleran claves ausentes o contenido malformado devolviendo
//! el valor de respaldo: el peor caso es rehacer la generación de costos,
//! nunca un panic del cliente.

use serde::de::DeserializeOwned;
use serde::Serialize;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Lee y deserializa una clave JSON; `fallback` ante ausencia o error.
pub fn read_json<T: DeserializeOwned>(key: &str, fallback: T) -> T {
    let Some(storage) = local_storage() else {
        return fallback;
    };
    let Ok(Some(raw)) = storage.get_item(key) else {
        return fallback;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("almacenamiento local ilegible para {key}: {err}");
            fallback
        }
    }
}

/// Serializa y escribe una clave JSON.
pub fn write_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            let _ = storage.set_item(key, &json);
        }
        Err(err) => log::error!("no se pudo serializar {key}: {err}"),
    }
}

pub fn remove_key(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Bandera booleana persistida como "true" / clave ausente.
pub fn read_flag(key: &str) -> bool {
    local_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .as_deref()
        == Some("true")
}

pub fn write_flag(key: &str, value: bool) {
    if let Some(storage) = local_storage() {
        if value {
            let _ = storage.set_item(key, "true");
        } else {
            let _ = storage.remove_item(key);
        }
    }
}
