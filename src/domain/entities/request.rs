//! Operation request entity

use serde::Serialize;

use crate::domain::value_objects::Operator;

/// Two operands and the operator to apply to them.
///
/// A request has no identity beyond its values. It is created when input is
/// read and discarded once evaluated. A zero divisor is representable here;
/// the calculator rejects it at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationRequest {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
}

impl OperationRequest {
    pub fn new(lhs: f64, operator: Operator, rhs: f64) -> Self {
        Self { lhs, operator, rhs }
    }

    pub fn add(lhs: f64, rhs: f64) -> Self {
        Self::new(lhs, Operator::Add, rhs)
    }

    pub fn subtract(lhs: f64, rhs: f64) -> Self {
        Self::new(lhs, Operator::Subtract, rhs)
    }

    pub fn multiply(lhs: f64, rhs: f64) -> Self {
        Self::new(lhs, Operator::Multiply, rhs)
    }

    pub fn divide(lhs: f64, rhs: f64) -> Self {
        Self::new(lhs, Operator::Divide, rhs)
    }
}
