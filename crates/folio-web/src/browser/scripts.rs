//! Script tag injection for the background effect library.

use folio_common::{FolioError, Result};
use folio_motion::ScriptPlan;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::{document, dom_error};

/// Append one `<script>` per plan entry to `<head>`.
///
/// Dynamically inserted scripts run in insertion order because `async` is
/// cleared. `on_ready` fires from the load event of the entry that
/// signals readiness. Load failures are logged and not retried.
pub fn inject(plan: &ScriptPlan, on_ready: impl FnOnce() + 'static) -> Result<()> {
    let document = document()?;
    let head = document
        .head()
        .ok_or_else(|| FolioError::Dom("no <head> element".into()))?;

    let mut on_ready = Some(on_ready);
    for entry in plan.entries() {
        let script: web_sys::HtmlScriptElement = document
            .create_element("script")
            .map_err(dom_error)?
            .dyn_into()
            .map_err(|_| FolioError::Dom("created element is not a script".into()))?;
        script.set_src(&entry.url);
        script.set_async(false);

        if entry.signals_ready {
            if let Some(callback) = on_ready.take() {
                let url = entry.url.clone();
                let onload = Closure::once_into_js(move || {
                    debug!(%url, "effect library loaded");
                    callback();
                });
                script.set_onload(Some(onload.unchecked_ref()));
            }
        }

        let url = entry.url.clone();
        let onerror = Closure::<dyn FnMut()>::new(move || {
            warn!(%url, "script failed to load");
        })
        .into_js_value();
        script.set_onerror(Some(onerror.unchecked_ref()));

        head.append_child(&script).map_err(dom_error)?;
        debug!(url = %entry.url, "script injected");
    }
    Ok(())
}
