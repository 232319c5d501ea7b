//! File Download
//!
//! Offers generated files to the user through a temporary object URL.

use planner_core::csv::CsvFile;
use wasm_bindgen::{JsCast, JsValue};

/// Hand `file` to the browser as a download
pub fn offer(file: &CsvFile) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    web_sys::Url::revoke_object_url(&url)?;
    web_sys::console::log_1(&format!("[EXPORT] Offered {} ({} bytes)", file.file_name, file.contents.len()).into());
    Ok(())
}
