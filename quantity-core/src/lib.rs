//! Quantity Core - Fundamental types
//!
//! This crate provides the types shared by measurement crates:
//! - `MeasureError`: Structured errors with machine-readable codes
//! - `Operation`: The operations a unit can be asked to validate

mod error;
mod operation;

pub use error::{MeasureError, codes};
pub use operation::{Operation, OperationError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{MeasureError, Operation};
    pub use crate::error::codes;
}
