//! Integration tests for configuration loading.

use std::fs;
use std::path::PathBuf;

use codex_common::config::{ConfigError, TextConfig};

#[test]
fn test_defaults() {
    let config = TextConfig::default();
    assert!(config.extract.include_raw_text);
    assert_eq!(config.truncate.max_length, 160);
    assert_eq!(config.truncate.suffix, "...");
    assert_eq!(config.content.title_max_length, 100);
    assert_eq!(config.content.slug_max_length, 60);
    assert_eq!(config.content.seo_title_max_length, 60);
    assert_eq!(config.content.excerpt_length, 157);
    assert_eq!(config.content.image_alt_placeholder, "TEC Generated Image");
}

#[test]
fn test_empty_object_gives_defaults() {
    let config = TextConfig::from_json_str("{}").unwrap();
    assert_eq!(config, TextConfig::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config =
        TextConfig::from_json_str(r#"{"truncate": {"max_length": 80}, "extract": {"include_raw_text": false}}"#)
            .unwrap();
    assert_eq!(config.truncate.max_length, 80);
    assert_eq!(config.truncate.suffix, "...");
    assert!(!config.extract.include_raw_text);
    assert_eq!(config.content.slug_max_length, 60);
}

#[test]
fn test_wrong_type_is_parse_error() {
    let err = TextConfig::from_json_str(r#"{"truncate": {"max_length": "long"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = PathBuf::from("/nonexistent/codex-config.json");
    let err = TextConfig::from_json_file(&path).unwrap_err();
    match err {
        ConfigError::Io { path: p, .. } => assert_eq!(p, path),
        ConfigError::Parse(_) => panic!("Expected Io error"),
    }
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("codex-config-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{"content": {"image_alt_placeholder": "Codex art", "slug_max_length": 40}}"#,
    )
    .unwrap();
    let config = TextConfig::from_json_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.content.image_alt_placeholder, "Codex art");
    assert_eq!(config.content.slug_max_length, 40);
    assert_eq!(config.content.title_max_length, 100);
}
