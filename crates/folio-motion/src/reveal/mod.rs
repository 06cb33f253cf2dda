//! Scroll-triggered reveal animations.
//!
//! Each section owns a [`RevealController`] fed by its viewport observer,
//! and renders the [`RevealVariants`] pose for the controller's state.

mod controller;
pub mod presets;
mod variants;

pub use controller::{RevealController, RevealState};
pub use variants::{stagger_delay, Easing, Pose, RevealVariants};
