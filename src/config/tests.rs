//! Tests for the config module

use super::loader::{resolve, WarningKind};
use super::types::*;
use crate::error::CalcError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.precision, None);
    assert!(config.output.unicode);
    assert_eq!(config.logging.default, "warn");
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[output]
format = "json"
precision = 3
unicode = false

[logging]
default = "debug"
"#;

    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.precision, Some(3));
    assert!(!config.output.unicode);
    assert_eq!(config.logging.default, "debug");
}

#[test]
fn test_config_partial_toml_keeps_defaults() {
    let config: Config = toml::from_str("[output]\nprecision = 2\n").unwrap();
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.output.unicode);
    assert_eq!(config.output.precision, Some(2));
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_config_empty_toml() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nfromat = \"json\"\nprecision = 4\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.output.precision, Some(4));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "fromat");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(
        warnings[0].kind,
        WarningKind::UnknownKey {
            suggestion: Some("format".to_string())
        }
    );
}

#[test]
fn test_config_load_warns_on_invalid_log_directive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nprecision = 2\n\n[logging]\ndefault = \"minicalc=loud\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.logging.default, "minicalc=loud");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "default");
    assert_eq!(warnings[0].line, Some(5));
    assert!(matches!(warnings[0].kind, WarningKind::InvalidValue { .. }));
}

#[test]
fn test_config_load_rejects_oversized_precision() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nprecision = 70000\n").unwrap();

    match Config::load(&path).unwrap_err() {
        CalcError::Config { message, .. } => {
            assert!(message.contains("exceeds the maximum of 17"), "got: {message}")
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_config_load_invalid_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CalcError::Config { .. }));
}

#[test]
fn test_resolve_explicit_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = resolve(Some(&path)).unwrap_err();
    assert!(matches!(err, CalcError::Io(_)));
}

#[test]
fn test_resolve_explicit_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

    let loaded = resolve(Some(&path)).unwrap();
    assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    assert_eq!(loaded.config.output.format, OutputFormat::Json);
    assert!(loaded.warnings.is_empty());
}
