//! Run use case - evaluate a sequence of requests into a report

use std::io::BufRead;

use tracing::{debug, warn};

use crate::domain::entities::OperationRequest;
use crate::domain::services::evaluate_request;
use crate::error::CalcError;
use crate::parser::parse_request;

use super::report::RunReport;

/// Built-in scenario evaluated when no input is supplied
pub fn demo_requests() -> Vec<OperationRequest> {
    vec![
        OperationRequest::add(4.0, 5.0),
        OperationRequest::subtract(10.0, 3.0),
        OperationRequest::multiply(6.0, 7.0),
        OperationRequest::divide(20.0, 4.0),
    ]
}

/// Evaluate every request in order. A failed request does not stop the run.
pub fn run_requests<I>(requests: I) -> RunReport
where
    I: IntoIterator<Item = OperationRequest>,
{
    let mut report = RunReport::new();
    for request in requests {
        report.push_evaluation(evaluate_request(request));
    }
    report
}

/// Parse and evaluate one request per line.
///
/// Blank lines and lines starting with `#` are skipped. Lines that fail to
/// parse, including lines that are not valid UTF-8, are recorded as malformed
/// and the run continues. Only a failing read aborts the run.
pub fn run_lines<R: BufRead>(mut reader: R) -> std::io::Result<RunReport> {
    let mut report = RunReport::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(_) => {
                let lossy = String::from_utf8_lossy(&buf).trim().to_string();
                warn!(line = line_no, "skipping line that is not valid UTF-8");
                report.push_malformed(
                    line_no,
                    lossy.clone(),
                    CalcError::MalformedExpression { input: lossy },
                );
                continue;
            }
        };

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_request(line) {
            Ok(request) => {
                debug!(line = line_no, "parsed request");
                report.push_evaluation(evaluate_request(request));
            }
            Err(error) => {
                warn!(line = line_no, %error, "skipping malformed line");
                report.push_malformed(line_no, line, error);
            }
        }
    }

    Ok(report)
}
