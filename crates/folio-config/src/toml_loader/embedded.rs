//! Config bundled into the binary at build time.

use crate::schema::FolioConfig;
use crate::validation;
use folio_common::ConfigError;
use tracing::debug;

use super::loader::load_from_str;

/// Site overrides shipped with the web bundle.
pub const EMBEDDED_CONFIG: &str = include_str!("../../../../assets/portfolio.toml");

/// Parse and strictly validate the bundled config.
pub fn load_embedded() -> Result<FolioConfig, ConfigError> {
    let config = load_from_str(EMBEDDED_CONFIG)?;
    validation::validate(&config)?;
    debug!(
        skills = config.skills.items.len(),
        projects = config.projects.items.len(),
        "loaded embedded config"
    );
    Ok(config)
}
