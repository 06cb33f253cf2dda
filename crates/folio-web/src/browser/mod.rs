//! DOM adapters.

pub mod dom;
pub mod scripts;
pub mod vanta;
pub mod viewport;

pub use vanta::VantaBackend;
pub use viewport::ViewportObserver;
