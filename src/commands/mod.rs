//! Browser Command Wrappers
//!
//! Thin bindings to the browser APIs the editor needs, organized by concern.

mod download;
mod upload;
mod host;

use wasm_bindgen::prelude::*;

// Re-export all public items
pub use download::*;
pub use upload::*;
pub use host::*;

/// Render a thrown JS value for display
fn js_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| js_sys::JSON::stringify(&err).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "unknown browser error".to_string())
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}
