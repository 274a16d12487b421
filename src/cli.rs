use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// minicalc - tiny arithmetic CLI
#[derive(Parser, Debug)]
#[command(name = "minicalc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'minicalc' without arguments to evaluate the built-in demo.")]
pub struct Cli {
    /// Output one JSON object per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (default: ~/.config/minicalc/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Round results to at most N decimal places (0-17)
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(0..=minicalc::config::MAX_PRECISION as u64)
    )]
    pub precision: Option<usize>,

    /// Use ASCII markers instead of unicode symbols
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Evaluate the built-in demo (default)
    Demo,

    /// Evaluate one operation: `4 + 5`, `add 4 5` or `4+5`
    Eval {
        /// Operation words
        #[arg(
            required = true,
            num_args = 1..,
            allow_hyphen_values = true,
            trailing_var_arg = true,
            value_name = "EXPR"
        )]
        expr: Vec<String>,
    },

    /// Evaluate one operation per line from a file or stdin
    Batch {
        /// Input file (`-` or omitted for stdin)
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}
