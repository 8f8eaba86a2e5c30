//! Operations a unit may be asked to validate

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for operation name parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("Unknown operation: {0}")]
    Unknown(String),
}

/// Named operation on a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Divide,
    Compare,
    Convert,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Divide,
        Operation::Compare,
        Operation::Convert,
    ];

    /// Lowercase name used when parsing
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Divide => "divide",
            Operation::Compare => "compare",
            Operation::Convert => "convert",
        }
    }

    /// Names of all operations
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|op| op.name()).collect()
    }

    /// Whether the operation combines values arithmetically.
    ///
    /// Comparison and conversion only read a value, so units that refuse
    /// arithmetic still accept them.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Operation::Add | Operation::Subtract | Operation::Divide)
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == lower)
            .ok_or_else(|| OperationError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
