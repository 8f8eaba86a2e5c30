//! Quantity Units - Measurable units and length values
//!
//! Provides the `Measurable` contract that every unit implements, along with
//! conversion helpers and the `Feet` value type.
//!
//! Units convert through a shared base unit. Linear units supply a factor and
//! inherit the default conversions; offset scales override them and refuse
//! arithmetic through `validate_operation_support`.

mod measurable;
mod linear;
mod feet;

pub use measurable::{
    ArithmeticSupport, DefaultArithmetic, Measurable, DEFAULT_ARITHMETIC, ROUND_TRIP_TOLERANCE,
    convert, reject_arithmetic, round_trips,
};
pub use linear::LinearUnit;
pub use feet::Feet;
pub use quantity_core::{MeasureError, Operation};
