//! Shared validation helpers used by all domain validators.

use regex::Regex;
use std::sync::LazyLock;

/// Outbound links: http(s) pages or a mail address.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://[^\s/]+\S*|mailto:[^\s@]+@[^\s@]+)$").unwrap());

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is blank.
pub(crate) fn validate_not_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

/// Push an error if `value` is not an http(s) or mailto link.
pub(crate) fn validate_link(errors: &mut Vec<String>, name: &str, value: &str) {
    if !is_valid_link(value) {
        errors.push(format!("{name} = {value:?} is not a valid link"));
    }
}

/// Whether `value` is an http(s) or mailto link.
pub fn is_valid_link(value: &str) -> bool {
    LINK_RE.is_match(value)
}
