//! Tests for TOML config loading.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_folio_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, folio_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.toml");
    std::fs::write(
        &path,
        r#"
[hero]
name = "Ada"
typing_interval_ms = 50

[skills]
items = ["Rust", "WASM"]
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.hero.name, "Ada");
    assert_eq!(config.hero.typing_interval_ms, 50);
    assert_eq!(config.skills.items, ["Rust", "WASM"]);
    // Defaults preserved
    assert_eq!(config.hero.tagline, "Cloud Engineer & Full Stack Developer");
    assert_eq!(config.skills.heading, "Skills");
    assert_eq!(config.projects.items.len(), 6);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, folio_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned() {
    let config = load_from_str(
        r#"
[hero]
typing_interval_ms = 0
"#,
    )
    .unwrap();
    assert_eq!(config.hero.typing_interval_ms, 0);
}

#[test]
fn load_projects_from_toml() {
    let config = load_from_str(
        r#"
[[projects.items]]
title = "folio"
description = "This site"
image_url = "https://example.com/folio.png"
link = "https://github.com/cyrixninja/folio"
"#,
    )
    .unwrap();
    assert_eq!(config.projects.items.len(), 1);
    assert_eq!(config.projects.items[0].link, "https://github.com/cyrixninja/folio");
    assert_eq!(config.projects.heading, "Projects");
}

#[test]
fn unknown_reveal_policy_is_parse_error() {
    let err = load_from_str(
        r#"
[reveal]
policy = "sometimes"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, folio_common::ConfigError::ParseError(_)));
}

#[test]
fn embedded_config_loads_and_validates() {
    let config = load_embedded().unwrap();
    assert_eq!(config.hero.tagline, "Cloud Engineer & Full Stack Developer");
    assert_eq!(
        config.projects.items[0].link,
        "https://github.com/cyrixninja/Lingua.BOT"
    );
}
