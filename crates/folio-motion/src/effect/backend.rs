//! Effect backend trait.

use folio_common::EffectError;
use folio_config::schema::HaloConfig;

/// Capability to build and tear down a background effect.
///
/// `Mount` is whatever the effect binds to (a DOM element in the browser).
/// `Handle` is the opaque value the library returns; it is passed back to
/// [`EffectBackend::destroy`] exactly once.
pub trait EffectBackend {
    type Mount;
    type Handle;

    /// Build an effect bound to `mount`.
    fn construct(
        &mut self,
        mount: &Self::Mount,
        options: &HaloConfig,
    ) -> Result<Self::Handle, EffectError>;

    /// Release an effect previously returned by `construct`.
    fn destroy(&mut self, handle: Self::Handle);
}
