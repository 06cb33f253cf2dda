//! Background effect lifecycle.
//!
//! The decorative background is drawn by an external library. Which
//! library, and how it is reached, is hidden behind [`EffectBackend`] so
//! the lifecycle can be driven with a no-op or recording backend in tests.

mod backend;
mod lifecycle;
mod null;

#[cfg(test)]
mod tests;

pub use backend::EffectBackend;
pub use lifecycle::{EffectLifecycle, EffectPhase};
pub use null::NullBackend;
