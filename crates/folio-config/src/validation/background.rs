//! Background effect validation (scripts and halo options).

use crate::schema::FolioConfig;

use super::helpers::{validate_link, validate_range_f64};

const MAX_COLOR: u32 = 0xff_ffff;

/// Validate all background-related constraints.
pub(crate) fn validate_background(errors: &mut Vec<String>, config: &FolioConfig) {
    let bg = &config.background;

    if bg.enabled && bg.scripts.is_empty() {
        errors.push("background.scripts must not be empty when the effect is enabled".into());
    }
    for (i, script) in bg.scripts.iter().enumerate() {
        if !script.starts_with("https://") {
            errors.push(format!("background.scripts[{i}] = {script:?} must use https"));
        } else {
            validate_link(errors, &format!("background.scripts[{i}]"), script);
        }
    }

    validate_range_f64(
        errors,
        "background.halo.min_height",
        bg.halo.min_height,
        0.0,
        10_000.0,
    );
    validate_range_f64(
        errors,
        "background.halo.min_width",
        bg.halo.min_width,
        0.0,
        10_000.0,
    );
    validate_range_f64(errors, "background.halo.y_offset", bg.halo.y_offset, -1.0, 1.0);

    for (name, color) in [
        ("background.halo.base_color", bg.halo.base_color),
        ("background.halo.background_color", bg.halo.background_color),
    ] {
        if color > MAX_COLOR {
            errors.push(format!("{name} = {color:#x} is not a 24-bit color"));
        }
    }
}
