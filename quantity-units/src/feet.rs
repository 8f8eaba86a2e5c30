//! Feet value type

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Serialize, Deserialize};

/// An immutable length in feet.
///
/// Equality is exact: values are compared bit for bit, with every NaN equal
/// to every other NaN and `0.0` distinct from `-0.0`. No tolerance is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Feet {
    value: f64,
}

impl Feet {
    /// Create a new length. The value is not validated.
    pub const fn new(value: f64) -> Self {
        Feet { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Equality against an arbitrary, possibly absent value.
    ///
    /// False for `None` and for any type other than `Feet`.
    pub fn matches(&self, other: Option<&dyn Any>) -> bool {
        match other {
            Some(any) => any.downcast_ref::<Feet>().is_some_and(|feet| self == feet),
            None => false,
        }
    }

    fn equality_bits(&self) -> u64 {
        if self.value.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.value.to_bits()
        }
    }
}

impl PartialEq for Feet {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.equality_bits() == other.equality_bits()
    }
}

impl Eq for Feet {}

impl Hash for Feet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.equality_bits().hash(state);
    }
}

impl From<f64> for Feet {
    fn from(value: f64) -> Self {
        Feet::new(value)
    }
}

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Another length type holding the same kind of value
    struct Inches(#[allow(dead_code)] f64);

    #[test]
    fn test_same_value_equal() {
        assert_eq!(Feet::new(12.0), Feet::new(12.0));
        assert_eq!(Feet::new(3.0), Feet::new(3.0));
    }

    #[test]
    fn test_different_value_not_equal() {
        assert_ne!(Feet::new(3.0), Feet::new(3.1));
        assert_ne!(Feet::new(12.0), Feet::new(12.0001));
    }

    #[test]
    fn test_reflexive() {
        let feet = Feet::new(7.25);
        assert_eq!(feet, feet);
        assert!(feet.matches(Some(&feet as &dyn Any)));

        let nan = Feet::new(f64::NAN);
        assert_eq!(nan, nan);
    }

    #[test]
    fn test_absent_is_never_equal() {
        let feet = Feet::new(1.0);
        assert!(!feet.matches(None));
        assert_ne!(Some(&feet), None);
    }

    #[test]
    fn test_other_type_is_never_equal() {
        let feet = Feet::new(5.0);
        let inches = Inches(5.0);
        assert!(!feet.matches(Some(&inches as &dyn Any)));
        assert!(!feet.matches(Some(&5.0_f64 as &dyn Any)));
    }

    #[test]
    fn test_matches_other_feet_by_value() {
        let feet = Feet::new(12.0);
        assert!(feet.matches(Some(&Feet::new(12.0) as &dyn Any)));
        assert!(!feet.matches(Some(&Feet::new(12.0001) as &dyn Any)));
    }

    #[test]
    fn test_exact_comparison_semantics() {
        assert_ne!(Feet::new(0.0), Feet::new(-0.0));
        assert_eq!(Feet::new(f64::NAN), Feet::new(-f64::NAN));
        assert_eq!(Feet::new(f64::INFINITY), Feet::new(f64::INFINITY));
        assert_ne!(Feet::new(0.1 + 0.2), Feet::new(0.3));
    }

    #[test]
    fn test_no_validation() {
        assert_eq!(Feet::new(-4.0).value(), -4.0);
        assert!(Feet::new(f64::NAN).value().is_nan());
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(Feet::new(12.0));
        set.insert(Feet::new(12.0));
        set.insert(Feet::new(f64::NAN));
        set.insert(Feet::new(f64::NAN));
        set.insert(Feet::new(-0.0));
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Feet::from(12.0)));
        assert!(!set.contains(&Feet::new(0.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Feet::new(12.0).to_string(), "12 ft");
        assert_eq!(Feet::new(2.5).to_string(), "2.5 ft");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Feet::new(12.0)).unwrap();
        assert_eq!(json, r#"{"value":12.0}"#);
        let feet: Feet = serde_json::from_str(r#"{"value": 3.5}"#).unwrap();
        assert_eq!(feet, Feet::new(3.5));
    }
}
