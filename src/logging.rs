//! Diagnostic logging on stderr.
//!
//! Filter precedence:
//! 1. `RUST_LOG`
//! 2. `-v` count on the command line (`-v` info, `-vv` debug, `-vvv` trace)
//! 3. `[logging] default` from the config file
//!
//! ```bash
//! RUST_LOG=minicalc=debug minicalc batch --file ops.txt
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Filter directive for a `-v` count, `None` when no flag was given
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Check that `directive` is a usable filter, returning the parse error if not
pub fn check_directive(directive: &str) -> Result<(), String> {
    EnvFilter::try_new(directive)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Initialize logging. Only the first call takes effect.
pub fn init(config: &LoggingConfig, verbose: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let directive = verbosity_filter(verbose).unwrap_or(config.default.as_str());
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
