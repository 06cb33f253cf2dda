//! Null backend: builds nothing, renders nothing.

use folio_common::EffectError;
use folio_config::schema::HaloConfig;

use super::backend::EffectBackend;
use super::lifecycle::EffectLifecycle;

/// A no-op backend. Construction always succeeds with a unit handle.
#[derive(Debug, Default)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        Self
    }
}

impl EffectBackend for NullBackend {
    type Mount = ();
    type Handle = ();

    fn construct(&mut self, _mount: &(), _options: &HaloConfig) -> Result<(), EffectError> {
        Ok(())
    }

    fn destroy(&mut self, _handle: ()) {}
}

impl EffectLifecycle<NullBackend> {
    /// Lifecycle for a disabled background: active at once, with nothing
    /// to load and nothing drawn.
    pub fn inert(options: HaloConfig) -> Self {
        let mut lifecycle = Self::new(NullBackend, options);
        lifecycle.attach_mount(());
        lifecycle.mark_dependencies_ready();
        lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectPhase;

    #[test]
    fn null_backend_constructs_unit() {
        let mut backend = NullBackend::new();
        assert_eq!(backend.construct(&(), &HaloConfig::default()), Ok(()));
        backend.destroy(());
    }

    #[test]
    fn inert_lifecycle_is_active_until_teardown() {
        let mut lifecycle = EffectLifecycle::inert(HaloConfig::default());
        assert_eq!(lifecycle.phase(), EffectPhase::Active);
        assert!(lifecycle.dependencies_ready());
        assert_eq!(lifecycle.teardown(), EffectPhase::Destroyed);
        assert_eq!(lifecycle.mark_dependencies_ready(), EffectPhase::Destroyed);
    }
}
