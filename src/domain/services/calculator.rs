//! Calculator service
//!
//! Stateless arithmetic on `f64` operands. Division by zero is the only
//! failing operation; everything else follows IEEE-754, so an overflowing
//! product or sum yields infinity rather than an error.

use tracing::debug;

use crate::domain::entities::{Evaluation, OperationRequest};
use crate::domain::value_objects::Operator;
use crate::error::{CalcError, CalcResult};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, rejecting both `0.0` and `-0.0` as divisors.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Apply the request's operator to its operands.
pub fn evaluate(request: &OperationRequest) -> CalcResult<f64> {
    let OperationRequest { lhs, operator, rhs } = *request;
    let result = match operator {
        Operator::Add => Ok(add(lhs, rhs)),
        Operator::Subtract => Ok(subtract(lhs, rhs)),
        Operator::Multiply => Ok(multiply(lhs, rhs)),
        Operator::Divide => divide(lhs, rhs),
    };
    debug!(lhs, rhs, operator = operator.name(), ok = result.is_ok(), "evaluated");
    result
}

/// Evaluate a request and keep the request alongside its outcome.
pub fn evaluate_request(request: OperationRequest) -> Evaluation {
    let outcome = evaluate(&request);
    Evaluation::new(request, outcome)
}
