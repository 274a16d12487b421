//! Evaluation entity - a request paired with its outcome

use crate::domain::entities::OperationRequest;
use crate::error::CalcResult;

/// Result of evaluating a single operation request
#[derive(Debug)]
pub struct Evaluation {
    pub request: OperationRequest,
    pub outcome: CalcResult<f64>,
}

impl Evaluation {
    pub fn new(request: OperationRequest, outcome: CalcResult<f64>) -> Self {
        Self { request, outcome }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The computed value, if the evaluation succeeded
    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied()
    }
}
