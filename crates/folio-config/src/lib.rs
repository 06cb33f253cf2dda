//! Portfolio configuration system.
//!
//! Provides TOML-based configuration for the page content (profile,
//! skills, projects) and behaviour (background effect, reveal timing,
//! typing speed). All sections default to the published site, so the
//! bundled TOML only needs to carry overrides.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FolioConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_embedded, load_from_path, load_from_str};

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FolioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
