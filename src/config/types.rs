//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CalcResult;

use super::loader::{self, ConfigWarning};

/// Largest accepted `precision`; `f64` carries no more significant decimals
pub const MAX_PRECISION: usize = 17;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line, for scripting
    Json,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Maximum number of decimal places; shortest round-trip form when unset
    #[serde(
        default,
        deserialize_with = "deserialize_precision",
        skip_serializing_if = "Option::is_none"
    )]
    pub precision: Option<usize>,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: None,
            unicode: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when neither `RUST_LOG` nor `-v` is given
    #[serde(default = "default_log_level")]
    pub default: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
        }
    }
}

fn deserialize_precision<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<usize>::deserialize(deserializer)? {
        Some(p) if p > MAX_PRECISION => Err(serde::de::Error::custom(format!(
            "precision {p} exceeds the maximum of {MAX_PRECISION}"
        ))),
        other => Ok(other),
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CalcResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
