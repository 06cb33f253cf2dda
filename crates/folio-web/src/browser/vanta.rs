//! `VANTA.HALO` as an [`EffectBackend`].

use folio_common::EffectError;
use folio_config::schema::HaloConfig;
use folio_motion::EffectBackend;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::dom::describe;

#[wasm_bindgen]
extern "C" {
    /// Effect instance returned by the halo constructor.
    pub type VantaEffect;

    #[wasm_bindgen(catch, js_namespace = VANTA, js_name = HALO)]
    fn halo(options: &JsValue) -> Result<VantaEffect, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &VantaEffect);
}

/// Builds halo effects through the global `VANTA` object.
///
/// If the library never loaded, construction fails with
/// [`EffectError::LibraryUnavailable`] instead of throwing.
#[derive(Debug, Default)]
pub struct VantaBackend;

impl EffectBackend for VantaBackend {
    type Mount = HtmlElement;
    type Handle = VantaEffect;

    fn construct(
        &mut self,
        mount: &HtmlElement,
        options: &HaloConfig,
    ) -> Result<VantaEffect, EffectError> {
        let options = halo_options(mount, options)
            .map_err(|e| EffectError::LibraryUnavailable(describe(&e)))?;
        halo(&options).map_err(|e| EffectError::LibraryUnavailable(describe(&e)))
    }

    fn destroy(&mut self, handle: VantaEffect) {
        handle.destroy();
    }
}

fn halo_options(mount: &HtmlElement, config: &HaloConfig) -> Result<JsValue, JsValue> {
    let options = Object::new();
    let fields: [(&str, JsValue); 9] = [
        ("el", JsValue::from(mount.clone())),
        ("mouseControls", config.mouse_controls.into()),
        ("touchControls", config.touch_controls.into()),
        ("gyroControls", config.gyro_controls.into()),
        ("minHeight", config.min_height.into()),
        ("minWidth", config.min_width.into()),
        ("baseColor", config.base_color.into()),
        ("backgroundColor", config.background_color.into()),
        ("yOffset", config.y_offset.into()),
    ];
    for (key, value) in fields {
        Reflect::set(&options, &JsValue::from_str(key), &value)?;
    }
    Ok(options.into())
}
