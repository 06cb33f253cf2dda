//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = FolioConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_typing_interval_too_small() {
    let mut config = FolioConfig::default();
    config.hero.typing_interval_ms = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hero.typing_interval_ms"));
}

#[test]
fn catches_empty_tagline() {
    let mut config = FolioConfig::default();
    config.hero.tagline = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hero.tagline must not be empty"));
}

#[test]
fn catches_negative_reveal_duration() {
    let mut config = FolioConfig::default();
    config.reveal.section_duration = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("reveal.section_duration"));
}

#[test]
fn catches_stagger_step_too_large() {
    let mut config = FolioConfig::default();
    config.reveal.stagger_step = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("reveal.stagger_step"));
}

#[test]
fn catches_zero_stagger_step() {
    let mut config = FolioConfig::default();
    config.reveal.stagger_step = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("reveal.stagger_step = 0 must be greater than 0"));
}

#[test]
fn catches_missing_scripts_when_enabled() {
    let mut config = FolioConfig::default();
    config.background.scripts.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("background.scripts must not be empty"));
}

#[test]
fn allows_missing_scripts_when_disabled() {
    let mut config = FolioConfig::default();
    config.background.enabled = false;
    config.background.scripts.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_insecure_script() {
    let mut config = FolioConfig::default();
    config.background.scripts[0] = "http://cdn.example.com/three.js".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("background.scripts[0]"));
    assert!(err.contains("must use https"));
}

#[test]
fn catches_color_out_of_range() {
    let mut config = FolioConfig::default();
    config.background.halo.base_color = 0x1_000_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("background.halo.base_color"));
}

#[test]
fn catches_y_offset_out_of_range() {
    let mut config = FolioConfig::default();
    config.background.halo.y_offset = 3.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("background.halo.y_offset"));
}

#[test]
fn catches_empty_skills() {
    let mut config = FolioConfig::default();
    config.skills.items.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("skills.items must not be empty"));
}

#[test]
fn catches_duplicate_skill() {
    let mut config = FolioConfig::default();
    config.skills.items.push("rust".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("is a duplicate"));
}

#[test]
fn catches_bad_project_link() {
    let mut config = FolioConfig::default();
    config.projects.items[1].link = "javascript:void(0)".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("projects.items[1].link"));
}

#[test]
fn catches_bad_social_link() {
    let mut config = FolioConfig::default();
    config.profile.socials[0].url = "github.com/cyrixninja".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("profile.socials[0].url"));
}

#[test]
fn catches_message_rows_zero() {
    let mut config = FolioConfig::default();
    config.contact.message_rows = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("contact.message_rows"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = FolioConfig::default();
    config.hero.typing_interval_ms = 0;
    config.contact.message_rows = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hero.typing_interval_ms"));
    assert!(err.contains("contact.message_rows"));
    assert!(err.contains("; "));
}
