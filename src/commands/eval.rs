use std::io;

use anyhow::Result;
use tracing::debug;

use minicalc::application::{run_requests, ExitStatus};
use minicalc::parser::parse_args;

use super::CommandContext;

pub fn cmd_eval(expr: &[String], ctx: &CommandContext) -> Result<ExitStatus> {
    let renderer = ctx.renderer(false);
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let request = match parse_args(expr) {
        Ok(request) => request,
        Err(error) => {
            debug!(input = %expr.join(" "), %error, "could not parse expression");
            renderer.render_input_error(&error, &mut out, &mut err)?;
            return Ok(ExitStatus::for_error(&error));
        }
    };

    let report = run_requests([request]);
    renderer.render(&report, &mut out, &mut err)?;
    Ok(report.exit_status())
}
