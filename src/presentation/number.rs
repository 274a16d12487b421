//! Number formatting for output

use crate::config::MAX_PRECISION;

/// Magnitudes at or above this print in exponent notation
const EXPONENT_ABOVE: f64 = 1e16;
/// Non-zero magnitudes below this print in exponent notation
const EXPONENT_BELOW: f64 = 1e-9;

/// Map `-0.0` to `0.0`, leave every other value alone.
pub fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Format a value for display.
///
/// With no precision the shortest round-trip form is used (`9`, `2.5`,
/// `0.30000000000000004`). With a precision the value is rounded to that many
/// decimal places (capped at [`MAX_PRECISION`]) and trailing zeros are
/// trimmed. Finite values with magnitude `>= 1e16` or `< 1e-9` use exponent
/// notation (`1e300`, `2.5e-10`); there the precision applies to the
/// mantissa. Negative zero prints as `0`.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    let value = normalize_zero(value);
    let precision = precision.map(|p| p.min(MAX_PRECISION));
    let magnitude = value.abs();
    let exponent = value.is_finite()
        && value != 0.0
        && (magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW);

    if exponent {
        let formatted = match precision {
            None => format!("{value:e}"),
            Some(p) => format!("{value:.p$e}"),
        };
        return match formatted.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
            None => formatted,
        };
    }

    let formatted = match precision {
        None => return format!("{value}"),
        Some(p) => format!("{value:.p$}"),
    };

    let trimmed = trim_fraction(&formatted);
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
