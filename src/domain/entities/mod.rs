//! Domain entities

mod evaluation;
mod request;

pub use evaluation::Evaluation;
pub use request::OperationRequest;
