//! Validation for smaller config sections: hero, reveal, and contact.

use crate::schema::FolioConfig;

use super::helpers::{validate_not_empty, validate_range, validate_range_f64};

/// Validate hero constraints.
pub(crate) fn validate_hero(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_not_empty(errors, "hero.name", &config.hero.name);
    validate_not_empty(errors, "hero.tagline", &config.hero.tagline);
    validate_range(
        errors,
        "hero.typing_interval_ms",
        config.hero.typing_interval_ms,
        10,
        2000,
    );
}

/// Validate reveal timing constraints.
pub(crate) fn validate_reveal(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_range_f64(
        errors,
        "reveal.section_duration",
        config.reveal.section_duration,
        0.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "reveal.item_duration",
        config.reveal.item_duration,
        0.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "reveal.stagger_step",
        config.reveal.stagger_step,
        0.0,
        2.0,
    );
    // Badges must appear one after another.
    if config.reveal.stagger_step <= 0.0 {
        errors.push(format!(
            "reveal.stagger_step = {} must be greater than 0",
            config.reveal.stagger_step
        ));
    }
}

/// Validate contact form constraints.
pub(crate) fn validate_contact(errors: &mut Vec<String>, config: &FolioConfig) {
    validate_range(
        errors,
        "contact.message_rows",
        config.contact.message_rows,
        1,
        20,
    );
}
