//! Configuration module for minicalc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. `--config <PATH>` if given
//! 3. User config (`$XDG_CONFIG_HOME/minicalc/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{resolve, user_config_path, ConfigWarning, LoadedConfig, WarningKind};
pub use types::{Config, LoggingConfig, OutputConfig, OutputFormat, MAX_PRECISION};
