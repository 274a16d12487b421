//! minicalc CLI - tiny arithmetic calculator
//!
//! Usage: minicalc [COMMAND]
//!
//! Commands:
//!   demo    Evaluate the built-in demo (default)
//!   eval    Evaluate one operation given as words
//!   batch   Evaluate one operation per line from a file or stdin
//!
//! Exit codes: 0 success, 1 division by zero, 2 malformed input.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use minicalc::application::ExitStatus;

use cli::{Cli, Commands};
use commands::{cmd_batch, cmd_demo, cmd_eval, print_config_warnings, CommandContext};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = minicalc::config::resolve(cli.config.as_deref())
        .context("failed to load configuration")?;
    minicalc::logging::init(&loaded.config.logging, cli.verbose);

    let ctx = CommandContext::new(&cli, &loaded.config);
    print_config_warnings(&loaded.warnings, ctx.options.unicode)?;

    let status = match &cli.command {
        None | Some(Commands::Demo) => cmd_demo(&ctx)?,
        Some(Commands::Eval { expr }) => cmd_eval(expr, &ctx)?,
        Some(Commands::Batch { file }) => cmd_batch(file.as_deref(), &ctx)?,
    };

    if status != ExitStatus::Success {
        std::process::exit(status.code());
    }

    Ok(())
}
