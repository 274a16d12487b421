//! minicalc - tiny arithmetic calculator
//!
//! Evaluates operation requests (two operands and one of add, subtract,
//! multiply, divide) on `f64` values. Division by zero is reported as
//! [`CalcError::DivisionByZero`]; it never panics.
//!
//! ```
//! use minicalc::{divide, parse_request, evaluate, CalcError};
//!
//! let request = parse_request("20 / 4").unwrap();
//! assert_eq!(evaluate(&request).unwrap(), 5.0);
//! assert!(matches!(divide(5.0, 0.0), Err(CalcError::DivisionByZero)));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use application::{demo_requests, run_lines, run_requests, ExitStatus, RunReport};
pub use config::Config;
pub use domain::entities::{Evaluation, OperationRequest};
pub use domain::services::{add, divide, evaluate, multiply, subtract};
pub use domain::value_objects::Operator;
pub use error::{CalcError, CalcResult};
pub use parser::{parse_args, parse_operand, parse_request};
