//! Structured measurement errors
//!
//! Errors are plain values with a machine-readable code, so callers can
//! branch on `code` without matching message text.

use crate::{Operation, OperationError};
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNSUPPORTED_OPERATION: &str = "UNSUPPORTED_OPERATION";
    pub const UNKNOWN_OPERATION: &str = "UNKNOWN_OPERATION";
}

/// Structured error raised by unit validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl MeasureError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// True if this error carries the given code
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    /// Serialize to a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        // A struct of strings always serializes; fall back to Null rather than panic.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    // ========== Common Error Constructors ==========

    pub fn unsupported_operation(unit: &str, operation: Operation) -> Self {
        Self::new(
            codes::UNSUPPORTED_OPERATION,
            format!("{} does not support {} operations", unit, operation),
        )
        .with_suggestion(format!("Convert {} to a unit that supports arithmetic first", unit))
    }

    pub fn unknown_operation(name: &str) -> Self {
        Self::new(codes::UNKNOWN_OPERATION, format!("Unknown operation: {}", name))
            .with_suggestion(format!("Use one of: {}", Operation::names().join(", ")))
    }
}

impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MeasureError {}

impl From<OperationError> for MeasureError {
    fn from(err: OperationError) -> Self {
        match err {
            OperationError::Unknown(name) => Self::unknown_operation(&name),
        }
    }
}
