//! Upload Commands
//!
//! Read files chosen through an `<input type="file">`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

use super::js_error;

/// First file selected in the input that fired `ev`, if any
pub fn selected_file(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read the whole file as UTF-8 text
pub async fn read_file_text(file: &File) -> Result<String, String> {
    let value = JsFuture::from(file.text()).await.map_err(js_error)?;
    value
        .as_string()
        .ok_or_else(|| format!("{} did not contain text", file.name()))
}
