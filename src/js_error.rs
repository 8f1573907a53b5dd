use wasm_bindgen::JsValue;

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            if value != "{}" {
                return value;
            }
        }
    }
    format!("{error:?}")
}
