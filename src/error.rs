//! Error types for minicalc
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for minicalc operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Main error type for minicalc operations
#[derive(Error, Debug)]
pub enum CalcError {
    /// Divisor was zero
    #[error("division by zero")]
    DivisionByZero,

    /// Operand is not a finite number
    #[error("invalid operand '{input}'")]
    InvalidOperand { input: String },

    /// Operator selector not recognised
    #[error("unknown operator '{input}'")]
    UnknownOperator { input: String },

    /// Input does not have the shape of a binary operation
    #[error("malformed expression '{input}'")]
    MalformedExpression { input: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl CalcError {
    /// Stable machine-readable identifier, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::InvalidOperand { .. } => "invalid_operand",
            CalcError::UnknownOperator { .. } => "unknown_operator",
            CalcError::MalformedExpression { .. } => "malformed_expression",
            CalcError::Io(_) => "io",
            CalcError::Config { .. } => "config",
        }
    }

    /// True for errors caused by input that could not be parsed
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidOperand { .. }
                | CalcError::UnknownOperator { .. }
                | CalcError::MalformedExpression { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_display_invalid_operand() {
        let err = CalcError::InvalidOperand {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid operand 'abc'");
    }

    #[test]
    fn test_error_display_config() {
        let err = CalcError::Config {
            file: PathBuf::from("config.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in config.toml: expected a table"
        );
    }

    #[test]
    fn test_malformed_input_classification() {
        assert!(!CalcError::DivisionByZero.is_malformed_input());
        assert!(CalcError::UnknownOperator {
            input: "%".to_string()
        }
        .is_malformed_input());
        assert!(CalcError::MalformedExpression {
            input: "1 2".to_string()
        }
        .is_malformed_input());
    }
}
