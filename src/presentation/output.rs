//! Output Rendering
//!
//! Results go to `out` (stdout), failures and summaries go to `err` (stderr)
//! in text mode. JSON mode writes every event to `out`, one object per line.

use std::io::{self, Write};

use serde::Serialize;

use crate::application::{RunEntry, RunReport};
use crate::config::OutputFormat;
use crate::domain::entities::{Evaluation, OperationRequest};
use crate::domain::value_objects::Operator;
use crate::error::CalcError;

use super::number::{format_number, normalize_zero};

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
        }
    }
}

/// Rendering options shared by all renderers
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub precision: Option<usize>,
    pub unicode: bool,
    /// Print a summary line after the entries
    pub summary: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: None,
            unicode: true,
            summary: false,
        }
    }
}

/// Trait for rendering run reports
pub trait ReportRenderer {
    /// Render every entry of the report
    fn render(
        &self,
        report: &RunReport,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()>;

    /// Render an input error that prevented any evaluation
    fn render_input_error(
        &self,
        error: &CalcError,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()>;
}

/// Text renderer
#[derive(Debug, Default)]
pub struct TextRenderer {
    pub options: RenderOptions,
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.options.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn expression(&self, request: &OperationRequest) -> String {
        format!(
            "{} {} {}",
            format_number(request.lhs, None),
            request.operator.symbol(),
            format_number(request.rhs, None)
        )
    }
}

impl ReportRenderer for TextRenderer {
    fn render(
        &self,
        report: &RunReport,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        let icons = self.icons();

        for entry in &report.entries {
            match entry {
                RunEntry::Evaluated(evaluation) => match &evaluation.outcome {
                    Ok(value) => writeln!(
                        out,
                        "{} = {}",
                        self.expression(&evaluation.request),
                        format_number(*value, self.options.precision)
                    )?,
                    Err(error) => writeln!(
                        err,
                        "{} {}: {}",
                        icons.cross,
                        self.expression(&evaluation.request),
                        error
                    )?,
                },
                RunEntry::Malformed(malformed) => writeln!(
                    err,
                    "{} line {}: {}",
                    icons.cross, malformed.line, malformed.error
                )?,
            }
        }

        if self.options.summary {
            let icon = if report.is_success() {
                icons.check
            } else {
                icons.cross
            };
            write!(
                err,
                "{} {} succeeded, {} failed",
                icon,
                report.succeeded(),
                report.failed()
            )?;
            if report.malformed() > 0 {
                write!(err, ", {} malformed", report.malformed())?;
            }
            writeln!(err)?;
        }

        Ok(())
    }

    fn render_input_error(
        &self,
        error: &CalcError,
        _out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(err, "{} {}", self.icons().cross, error)
    }
}

/// One line of JSON output
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JsonEvent<'a> {
    Result {
        lhs: f64,
        operator: Operator,
        rhs: f64,
        result: f64,
        text: String,
    },
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        lhs: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        operator: Option<Operator>,
        #[serde(skip_serializing_if = "Option::is_none")]
        rhs: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        input: Option<&'a str>,
        kind: &'static str,
        error: String,
    },
    Summary {
        succeeded: usize,
        failed: usize,
        malformed: usize,
        exit_code: i32,
    },
}

impl<'a> JsonEvent<'a> {
    fn from_evaluation(evaluation: &Evaluation, precision: Option<usize>) -> Self {
        let OperationRequest { lhs, operator, rhs } = evaluation.request;
        match &evaluation.outcome {
            Ok(value) => JsonEvent::Result {
                lhs,
                operator,
                rhs,
                result: normalize_zero(*value),
                text: format_number(*value, precision),
            },
            Err(error) => JsonEvent::Error {
                lhs: Some(lhs),
                operator: Some(operator),
                rhs: Some(rhs),
                line: None,
                input: None,
                kind: error.kind(),
                error: error.to_string(),
            },
        }
    }

    fn from_error(error: &CalcError, line: Option<usize>, input: Option<&'a str>) -> Self {
        JsonEvent::Error {
            lhs: None,
            operator: None,
            rhs: None,
            line,
            input,
            kind: error.kind(),
            error: error.to_string(),
        }
    }

    fn summary(report: &RunReport) -> Self {
        JsonEvent::Summary {
            succeeded: report.succeeded(),
            failed: report.failed(),
            malformed: report.malformed(),
            exit_code: report.exit_status().code(),
        }
    }
}

/// JSON renderer
#[derive(Debug, Default)]
pub struct JsonRenderer {
    pub options: RenderOptions,
}

fn write_event(out: &mut dyn Write, event: &JsonEvent<'_>) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    writeln!(out, "{}", line)
}

impl ReportRenderer for JsonRenderer {
    fn render(
        &self,
        report: &RunReport,
        out: &mut dyn Write,
        _err: &mut dyn Write,
    ) -> io::Result<()> {
        for entry in &report.entries {
            let event = match entry {
                RunEntry::Evaluated(evaluation) => {
                    JsonEvent::from_evaluation(evaluation, self.options.precision)
                }
                RunEntry::Malformed(malformed) => JsonEvent::from_error(
                    &malformed.error,
                    Some(malformed.line),
                    Some(malformed.input.as_str()),
                ),
            };
            write_event(out, &event)?;
        }

        if self.options.summary {
            write_event(out, &JsonEvent::summary(report))?;
        }

        Ok(())
    }

    fn render_input_error(
        &self,
        error: &CalcError,
        out: &mut dyn Write,
        _err: &mut dyn Write,
    ) -> io::Result<()> {
        write_event(out, &JsonEvent::from_error(error, None, None))
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, options: RenderOptions) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { options }),
        OutputFormat::Json => Box::new(JsonRenderer { options }),
    }
}
