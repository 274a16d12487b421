//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CalcError, CalcResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Key not recognised, with the closest known key if one is near
    UnknownKey { suggestion: Option<String> },
    /// Value parsed but unusable; the built-in default is used instead
    InvalidValue { message: String },
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CalcResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CalcError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                kind: WarningKind::UnknownKey {
                    suggestion: suggest_key(&key),
                },
            }
        })
        .collect();

    if let Err(message) = crate::logging::check_directive(&config.logging.default) {
        warnings.push(ConfigWarning {
            key: "default".to_string(),
            file: path.to_path_buf(),
            line: find_line_number(&content, "default"),
            kind: WarningKind::InvalidValue { message },
        });
    }

    Ok((config, warnings))
}

/// Resolve configuration: explicit path, then user config, then defaults.
///
/// An explicit path must exist. The user config file is optional.
pub fn resolve(explicit: Option<&Path>) -> CalcResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match user_config_path() {
            Some(path) if path.is_file() => path,
            _ => {
                debug!("no config file found, using defaults");
                return Ok(LoadedConfig::default());
            }
        },
    };

    debug!(path = %path.display(), "loading config");
    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config,
        source: Some(path),
        warnings,
    })
}

/// Location of the per-user config file (`$XDG_CONFIG_HOME/minicalc/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("minicalc/config.toml"))
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "format",
        "precision",
        "unicode",
        "logging",
        "default",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
