use std::io;

use anyhow::Result;
use tracing::info;

use minicalc::application::{demo_requests, run_requests, ExitStatus};

use super::CommandContext;

pub fn cmd_demo(ctx: &CommandContext) -> Result<ExitStatus> {
    let requests = demo_requests();
    info!(count = requests.len(), "running demo");

    let report = run_requests(requests);
    ctx.renderer(false)
        .render(&report, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    Ok(report.exit_status())
}
