//! The capability contract every measurement unit implements

use quantity_core::{MeasureError, Operation};
use tracing::debug;

/// Relative tolerance for the to-base/from-base round trip.
/// Applied as an absolute tolerance for magnitudes below 1.
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

/// Answers whether a unit permits arithmetic
pub trait ArithmeticSupport: Send + Sync {
    fn is_supported(&self) -> bool;
}

/// Shared answer for units that do not override `supports_arithmetic`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultArithmetic;

impl ArithmeticSupport for DefaultArithmetic {
    fn is_supported(&self) -> bool {
        true
    }
}

/// Process-wide default arithmetic capability
pub const DEFAULT_ARITHMETIC: DefaultArithmetic = DefaultArithmetic;

/// A unit of measurement that converts to and from its base unit.
///
/// Linear units only provide a name and a factor. Units with an offset or
/// any other non-linear relation to the base unit (temperature scales) must
/// override both conversions, and usually refuse arithmetic as well.
pub trait Measurable: Send + Sync {
    /// Display name of the unit
    fn unit_name(&self) -> &str;

    /// How many base units one of this unit is worth
    fn conversion_factor(&self) -> f64;

    /// Convert a value in this unit to the base unit
    fn convert_to_base_unit(&self, value: f64) -> f64 {
        value * self.conversion_factor()
    }

    /// Convert a value in the base unit to this unit
    fn convert_from_base_unit(&self, base_value: f64) -> f64 {
        base_value / self.conversion_factor()
    }

    /// Whether add/subtract/divide make sense for this unit
    fn supports_arithmetic(&self) -> bool {
        DEFAULT_ARITHMETIC.is_supported()
    }

    /// Check that `operation` may be performed on values of this unit.
    ///
    /// Accepts everything by default. Units returning false from
    /// `supports_arithmetic` must override this, typically with
    /// [`reject_arithmetic`].
    fn validate_operation_support(&self, _operation: &str) -> Result<(), MeasureError> {
        Ok(())
    }
}

/// Validation for units that refuse arithmetic.
///
/// Fails for unknown operation names and for arithmetic operations;
/// comparison and conversion pass.
pub fn reject_arithmetic<U: Measurable + ?Sized>(unit: &U, operation: &str) -> Result<(), MeasureError> {
    let op: Operation = operation.parse()?;
    if op.is_arithmetic() {
        debug!(unit = unit.unit_name(), operation = %op, "rejected arithmetic operation");
        return Err(MeasureError::unsupported_operation(unit.unit_name(), op));
    }
    Ok(())
}

/// Convert a value between two units through their common base unit
pub fn convert<F, T>(value: f64, from: &F, to: &T) -> f64
where
    F: Measurable + ?Sized,
    T: Measurable + ?Sized,
{
    let base = from.convert_to_base_unit(value);
    let result = to.convert_from_base_unit(base);
    debug!(value, from = from.unit_name(), to = to.unit_name(), result, "converted");
    result
}

/// Check that converting `value` to the base unit and back returns `value`
pub fn round_trips<U: Measurable + ?Sized>(unit: &U, value: f64) -> bool {
    let back = unit.convert_from_base_unit(unit.convert_to_base_unit(value));
    (back - value).abs() <= ROUND_TRIP_TOLERANCE * value.abs().max(1.0)
}
