//! Acceso HTTP al backend REST.
//!
//! La URL base se deriva de la ubicación actual de la ventana; el backend
//! FastAPI escucha en el puerto 8000 bajo el prefijo `/api/v1`.

use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// URL base del backend, por ejemplo "http://localhost:8000/api/v1".
/// Devuelve cadena vacía si no hay `window` disponible.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000/api/v1", protocol, hostname)
}

/// Construye la URL completa de un recurso del backend.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET que devuelve el cuerpo como texto. Los errores (red, HTTP no-2xx,
/// cuerpo ilegible) se reportan como `String` para que la capa de UI los
/// muestre tal cual.
pub async fn get_text(path: &str) -> Result<String, String> {
    send(path, "GET", None).await
}

/// Envía JSON con el método indicado y devuelve el cuerpo como texto.
pub async fn send_json(path: &str, method: &str, body: &str) -> Result<String, String> {
    send(path, method, Some(body)).await
}

async fn send(path: &str, method: &str, body: Option<&str>) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(body));
    }

    let url = api_url(path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{e:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if resp.status() == 404 {
        return Err("Not found".to_string());
    }
    if !resp.ok() {
        log::error!("{} {} respondió HTTP {}", method, url, resp.status());
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}
