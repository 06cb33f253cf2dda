//! Small `web-sys` helpers that report errors instead of panicking.

use folio_common::{FolioError, Result};
use folio_motion::{ScrollBehavior, ScrollRequest};
use tracing::trace;
use wasm_bindgen::JsValue;

pub fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FolioError::Dom("no document".into()))
}

pub fn set_title(title: &str) -> Result<()> {
    document()?.set_title(title);
    Ok(())
}

/// The URL fragment including `#`, or an empty string.
pub fn location_hash() -> Result<String> {
    web_sys::window()
        .ok_or_else(|| FolioError::Dom("no window".into()))?
        .location()
        .hash()
        .map_err(dom_error)
}

/// Bring the requested anchor into view.
pub fn scroll_to(request: &ScrollRequest) -> Result<()> {
    let element = document()?
        .get_element_by_id(request.anchor)
        .ok_or_else(|| FolioError::Dom(format!("no element with id {:?}", request.anchor)))?;

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(match request.behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
    trace!(anchor = request.anchor, "scrolled into view");
    Ok(())
}

/// Render a thrown JS value for logs.
pub fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn dom_error(value: JsValue) -> FolioError {
    FolioError::Dom(describe(&value))
}
