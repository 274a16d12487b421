use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use tracing::info;

use minicalc::application::{run_lines, ExitStatus};
use minicalc::config::OutputFormat;

use super::CommandContext;

pub fn cmd_batch(file: Option<&Path>, ctx: &CommandContext) -> Result<ExitStatus> {
    let report = match file.filter(|p| *p != Path::new("-")) {
        Some(path) => {
            info!(path = %path.display(), "reading operations");
            let handle = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run_lines(BufReader::new(handle))?
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                info!("reading operations from stdin, one per line (Ctrl-D to finish)");
            }
            run_lines(stdin.lock())?
        }
    };

    let summary = ctx.verbose > 0 || ctx.format == OutputFormat::Json;
    ctx.renderer(summary)
        .render(&report, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    Ok(report.exit_status())
}
