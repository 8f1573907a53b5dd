use living_shapes_core::{parse_projects, GalleryError, ProjectRecord};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::js_error::js_err;

/// One attempt, no timeout or retry.
pub(crate) async fn fetch_projects(path: &str) -> Result<Vec<ProjectRecord>, GalleryError> {
    let raw = fetch_json_text(path).await?;
    parse_projects(&raw)
}

async fn fetch_json_text(path: &str) -> Result<String, GalleryError> {
    let window = web_sys::window().ok_or_else(|| GalleryError::Fetch("missing window".to_string()))?;
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(path, &init).map_err(fetch_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(fetch_err)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_err)?;
    let response: Response = value.dyn_into().map_err(fetch_err)?;
    if !response.ok() {
        return Err(GalleryError::Http {
            status: response.status(),
        });
    }
    let text = JsFuture::from(response.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    text.as_string()
        .ok_or_else(|| GalleryError::Payload("response body is not text".to_string()))
}

fn fetch_err(error: JsValue) -> GalleryError {
    GalleryError::Fetch(js_err(error))
}
