//! Text fetch over the browser's `fetch` API.

use starmap_engine::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// GET `url` and return the body as text.
///
/// Network errors, non-2xx statuses and non-text bodies all come back as
/// `LoadError`; nothing is thrown into JS.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| request_error(url, e))?;
    let response: Response = response.dyn_into().map_err(|e| request_error(url, e))?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response.text().map_err(|e| request_error(url, e))?;
    let body = JsFuture::from(body).await.map_err(|e| request_error(url, e))?;
    body.as_string().ok_or_else(|| LoadError::Body { url: url.to_string() })
}

fn request_error(url: &str, err: JsValue) -> LoadError {
    LoadError::Request {
        url: url.to_string(),
        reason: format!("{:?}", err),
    }
}
