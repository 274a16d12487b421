//! Command handlers

mod batch;
mod demo;
mod eval;

pub use batch::cmd_batch;
pub use demo::cmd_demo;
pub use eval::cmd_eval;

use std::io::{self, Write};

use minicalc::config::{Config, ConfigWarning, OutputFormat, WarningKind};
use minicalc::presentation::{create_renderer, RenderOptions, ReportRenderer};

use crate::cli::Cli;

/// Settings every command renders with, CLI flags applied over config
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub options: RenderOptions,
    pub verbose: u8,
}

impl CommandContext {
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        };

        Self {
            format,
            options: RenderOptions {
                precision: cli.precision.or(config.output.precision),
                unicode: config.output.unicode && !cli.ascii,
                summary: false,
            },
            verbose: cli.verbose,
        }
    }

    pub fn renderer(&self, summary: bool) -> Box<dyn ReportRenderer> {
        create_renderer(
            self.format,
            RenderOptions {
                summary,
                ..self.options
            },
        )
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) -> io::Result<()> {
    write_config_warnings(warnings, unicode, &mut io::stderr().lock())
}

fn write_config_warnings(
    warnings: &[ConfigWarning],
    unicode: bool,
    err: &mut dyn Write,
) -> io::Result<()> {
    let icon = if unicode { "⚠" } else { "[WARN]" };

    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };

        match &w.kind {
            WarningKind::UnknownKey { suggestion } => {
                writeln!(err, "{icon} Unknown config key '{}' in {location}", w.key)?;
                if let Some(suggestion) = suggestion {
                    writeln!(err, "   Did you mean '{suggestion}'?\n")?;
                }
            }
            WarningKind::InvalidValue { message } => {
                writeln!(err, "{icon} Invalid value for '{}' in {location}", w.key)?;
                writeln!(err, "   {}", message.trim_end())?;
                writeln!(err, "   falling back to 'warn'\n")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn cli_flags_override_config() {
        let mut config = Config::default();
        config.output.precision = Some(2);
        config.output.format = OutputFormat::Text;

        let cli =
            Cli::try_parse_from(["minicalc", "--json", "--precision", "5", "--ascii"]).unwrap();
        let ctx = CommandContext::new(&cli, &config);

        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.options.precision, Some(5));
        assert!(!ctx.options.unicode);
    }

    #[test]
    fn config_applies_without_flags() {
        let mut config = Config::default();
        config.output.precision = Some(2);
        config.output.format = OutputFormat::Json;
        config.output.unicode = false;

        let cli = Cli::try_parse_from(["minicalc"]).unwrap();
        let ctx = CommandContext::new(&cli, &config);

        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.options.precision, Some(2));
        assert!(!ctx.options.unicode);
    }

    fn rendered_warnings(unicode: bool) -> String {
        let warnings = vec![
            ConfigWarning {
                key: "fromat".to_string(),
                file: PathBuf::from("config.toml"),
                line: Some(2),
                kind: WarningKind::UnknownKey {
                    suggestion: Some("format".to_string()),
                },
            },
            ConfigWarning {
                key: "default".to_string(),
                file: PathBuf::from("config.toml"),
                line: None,
                kind: WarningKind::InvalidValue {
                    message: "invalid filter directive".to_string(),
                },
            },
        ];
        let mut err = Vec::new();
        write_config_warnings(&warnings, unicode, &mut err).unwrap();
        String::from_utf8(err).unwrap()
    }

    #[test]
    fn config_warnings_use_unicode_icon() {
        let text = rendered_warnings(true);
        assert!(text.starts_with("⚠ Unknown config key 'fromat' in config.toml:2\n"));
        assert!(text.contains("   Did you mean 'format'?\n"));
        assert!(text.contains("⚠ Invalid value for 'default' in config.toml\n"));
        assert!(text.contains("   falling back to 'warn'\n"));
    }

    #[test]
    fn config_warnings_respect_ascii() {
        let text = rendered_warnings(false);
        assert!(!text.contains('⚠'));
        assert_eq!(text.matches("[WARN] ").count(), 2);
    }
}
