//! Domain services

pub mod calculator;

pub use calculator::{add, divide, evaluate, evaluate_request, multiply, subtract};
