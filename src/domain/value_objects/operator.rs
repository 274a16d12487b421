//! Operator value object - selects which arithmetic operation to apply

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Arithmetic operator of an operation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in display order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Infix symbol used in text output
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Lowercase operation name
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    /// Map a single character to an operator, for compact expressions like `4+5`
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_symbol(c) {
                return Ok(op);
            }
        }

        match trimmed.to_lowercase().as_str() {
            "add" | "plus" => Ok(Operator::Add),
            "subtract" | "sub" | "minus" => Ok(Operator::Subtract),
            "multiply" | "mul" | "times" => Ok(Operator::Multiply),
            "divide" | "div" => Ok(Operator::Divide),
            _ => Err(CalcError::UnknownOperator {
                input: trimmed.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
