//! Effect lifecycle state machine.

use folio_config::schema::HaloConfig;
use tracing::{debug, info, warn};

use super::backend::EffectBackend;

/// Observable phase of the background effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectPhase {
    /// Waiting for the mount point and/or the library.
    Uninitialized,
    /// A handle exists and is bound to the mount point.
    Active,
    /// Construction failed; the page runs without a background.
    Unavailable,
    /// Torn down. Terminal for this mount.
    Destroyed,
}

enum Slot<H> {
    Uninitialized,
    Active(H),
    Unavailable,
    Destroyed,
}

impl<H> Slot<H> {
    fn phase(&self) -> EffectPhase {
        match self {
            Slot::Uninitialized => EffectPhase::Uninitialized,
            Slot::Active(_) => EffectPhase::Active,
            Slot::Unavailable => EffectPhase::Unavailable,
            Slot::Destroyed => EffectPhase::Destroyed,
        }
    }
}

/// Owns at most one effect handle for the lifetime of a page mount.
///
/// The handle is built once both inputs are present: a mount point
/// ([`attach_mount`](Self::attach_mount)) and the library
/// ([`mark_dependencies_ready`](Self::mark_dependencies_ready)), in either
/// order. Repeated signals never build a second handle. [`teardown`]
/// destroys the handle exactly once; dropping the lifecycle tears down too.
///
/// [`teardown`]: Self::teardown
pub struct EffectLifecycle<B: EffectBackend> {
    backend: B,
    options: HaloConfig,
    mount: Option<B::Mount>,
    dependencies_ready: bool,
    slot: Slot<B::Handle>,
}

impl<B: EffectBackend> EffectLifecycle<B> {
    pub fn new(backend: B, options: HaloConfig) -> Self {
        Self {
            backend,
            options,
            mount: None,
            dependencies_ready: false,
            slot: Slot::Uninitialized,
        }
    }

    /// Provide the element the effect draws into.
    pub fn attach_mount(&mut self, mount: B::Mount) -> EffectPhase {
        if matches!(self.slot, Slot::Destroyed) {
            return EffectPhase::Destroyed;
        }
        if self.mount.is_some() {
            debug!("effect mount already attached");
            return self.phase();
        }
        self.mount = Some(mount);
        self.try_activate()
    }

    /// Record that the effect library has finished loading.
    pub fn mark_dependencies_ready(&mut self) -> EffectPhase {
        if self.dependencies_ready {
            debug!("effect dependencies already marked ready");
        }
        self.dependencies_ready = true;
        self.try_activate()
    }

    /// Destroy the handle if one exists. Further calls are no-ops.
    pub fn teardown(&mut self) -> EffectPhase {
        match std::mem::replace(&mut self.slot, Slot::Destroyed) {
            Slot::Active(handle) => {
                self.backend.destroy(handle);
                info!("background effect destroyed");
            }
            Slot::Uninitialized | Slot::Unavailable => {
                debug!("effect torn down before activation");
            }
            Slot::Destroyed => {}
        }
        self.mount = None;
        EffectPhase::Destroyed
    }

    pub fn phase(&self) -> EffectPhase {
        self.slot.phase()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.slot, Slot::Active(_))
    }

    pub fn dependencies_ready(&self) -> bool {
        self.dependencies_ready
    }

    fn try_activate(&mut self) -> EffectPhase {
        if !matches!(self.slot, Slot::Uninitialized) || !self.dependencies_ready {
            return self.phase();
        }
        let Some(mount) = self.mount.as_ref() else {
            return self.phase();
        };

        self.slot = match self.backend.construct(mount, &self.options) {
            Ok(handle) => {
                info!("background effect active");
                Slot::Active(handle)
            }
            Err(e) => {
                warn!("background effect unavailable: {e}");
                Slot::Unavailable
            }
        };
        self.phase()
    }
}

impl<B: EffectBackend> Drop for EffectLifecycle<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
