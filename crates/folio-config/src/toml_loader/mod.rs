//! TOML config loading.

mod embedded;
mod loader;

#[cfg(test)]
mod tests;

pub use embedded::{load_embedded, EMBEDDED_CONFIG};
pub use loader::{load_from_path, load_from_str};
