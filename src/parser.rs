//! Operation request parser
//!
//! Accepts one binary operation per input, in any of these shapes:
//!
//! - infix with whitespace: `4 + 5`, `10 minus 3`
//! - prefix: `add 4 5`, `/ 20 4`
//! - compact infix: `4+5`, `-3*-2`, `1e-3/4`

use crate::domain::entities::OperationRequest;
use crate::domain::value_objects::Operator;
use crate::error::{CalcError, CalcResult};

/// Parse a single finite operand.
pub fn parse_operand(input: &str) -> CalcResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidOperand {
            input: trimmed.to_string(),
        }),
    }
}

/// Parse one line of text into an operation request.
pub fn parse_request(input: &str) -> CalcResult<OperationRequest> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(malformed(trimmed));
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if let [first, second, third] = tokens.as_slice() {
        return parse_three_tokens(trimmed, first, second, third);
    }

    let compact: String = tokens.concat();
    parse_compact(&compact).ok_or_else(|| malformed(trimmed))?
}

/// Parse command-line words (`["4", "+", "5"]` or `["4+5"]`) into a request.
pub fn parse_args<S: AsRef<str>>(words: &[S]) -> CalcResult<OperationRequest> {
    let joined = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    parse_request(&joined)
}

fn parse_three_tokens(
    input: &str,
    first: &str,
    second: &str,
    third: &str,
) -> CalcResult<OperationRequest> {
    if let Ok(op) = second.parse::<Operator>() {
        return Ok(OperationRequest::new(
            parse_operand(first)?,
            op,
            parse_operand(third)?,
        ));
    }

    if let Ok(op) = first.parse::<Operator>() {
        return Ok(OperationRequest::new(
            parse_operand(second)?,
            op,
            parse_operand(third)?,
        ));
    }

    match (parse_operand(first).is_ok(), parse_operand(second).is_ok()) {
        (true, false) => Err(CalcError::UnknownOperator {
            input: second.to_string(),
        }),
        (false, true) => Err(CalcError::UnknownOperator {
            input: first.to_string(),
        }),
        _ => Err(malformed(input)),
    }
}

/// Split `<number><op><number>` with no whitespace.
///
/// Returns `None` when no operator follows a leading number.
fn parse_compact(input: &str) -> Option<CalcResult<OperationRequest>> {
    let lhs_end = scan_number(input);
    if lhs_end == 0 {
        return None;
    }

    let mut rest = input[lhs_end..].chars();
    let op = Operator::from_symbol(rest.next()?)?;
    let rhs = rest.as_str();
    if rhs.is_empty() {
        return None;
    }

    let lhs = match parse_operand(&input[..lhs_end]) {
        Ok(v) => v,
        Err(e) => return Some(Err(e)),
    };
    Some(parse_operand(rhs).map(|rhs| OperationRequest::new(lhs, op, rhs)))
}

/// Byte length of the numeric literal at the start of `s`.
fn scan_number(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let mantissa_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if i == mantissa_start {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    i
}

fn malformed(input: &str) -> CalcError {
    CalcError::MalformedExpression {
        input: input.to_string(),
    }
}
