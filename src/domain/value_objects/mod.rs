//! Domain value objects

mod operator;

pub use operator::Operator;
