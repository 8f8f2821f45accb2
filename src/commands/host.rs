//! Host Page Commands
//!
//! Values the embedding page can hand to the editor.

use wasm_bindgen::prelude::*;
use questionnaire_model::EditorConfig;

use super::{js_error, window};

/// Global the host page may define before the editor starts
pub const HOST_CONFIG_GLOBAL: &str = "__QUESTIONNAIRE_EDITOR_CONFIG__";

/// Editor configuration from the host page. `Ok(None)` when the page
/// defines none.
pub fn load_host_config() -> Result<Option<EditorConfig>, String> {
    let value = js_sys::Reflect::get(&window()?.into(), &JsValue::from_str(HOST_CONFIG_GLOBAL)).map_err(js_error)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| e.to_string())
}
