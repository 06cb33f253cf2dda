//! Page behaviour as plain state machines.
//!
//! Nothing in this crate touches the DOM. The web frontend feeds browser
//! events (script loads, intersection changes, timer ticks, clicks) into
//! these types and renders whatever state they report.

pub mod effect;
pub mod navigation;
pub mod reveal;
pub mod scripts;
pub mod typewriter;

pub use effect::{EffectBackend, EffectLifecycle, EffectPhase, NullBackend};
pub use navigation::{Navigator, ScrollBehavior, ScrollRequest};
pub use reveal::{stagger_delay, Easing, Pose, RevealController, RevealState, RevealVariants};
pub use scripts::{ScriptEntry, ScriptPlan};
pub use typewriter::{Typewriter, TypewriterStep};
