//! Viewport intersection tracking.

use folio_common::{FolioError, Result};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use super::dom::dom_error;

/// Reports whether one element intersects the viewport.
///
/// Disconnects when dropped.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Start observing `target`; `on_change` receives `is_intersecting`.
    pub fn observe(
        target: &Element,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            },
        );
        let observer =
            IntersectionObserver::new(callback.as_ref().unchecked_ref()).map_err(dom_error)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
