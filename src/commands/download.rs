//! Download Commands
//!
//! Offer generated text to the user as a file download.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::{js_error, window};

/// Download `contents` as `file_name` via a temporary object URL.
/// The URL is revoked as soon as the download has been triggered.
pub fn download_text(file_name: &str, contents: &str, mime_type: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;
    let result = click_download_link(&url, file_name);
    Url::revoke_object_url(&url).map_err(js_error)?;
    result
}

fn click_download_link(url: &str, file_name: &str) -> Result<(), String> {
    let document = window()?.document().ok_or_else(|| "no document".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
