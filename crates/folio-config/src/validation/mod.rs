//! Full configuration validation.
//!
//! Validates numeric ranges, link formats, and list contents. Each
//! domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod background;
mod content;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

pub use helpers::is_valid_link;

use crate::schema::FolioConfig;
use folio_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    background::validate_background(&mut errors, config);
    content::validate_skills(&mut errors, config);
    content::validate_projects(&mut errors, config);
    content::validate_profile(&mut errors, config);
    misc::validate_hero(&mut errors, config);
    misc::validate_reveal(&mut errors, config);
    misc::validate_contact(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
