//! Data-driven linear units

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Measurable;

/// A unit defined by a name and a factor to its base unit
/// (value_base = value * factor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearUnit {
    name: String,
    factor: f64,
}

impl LinearUnit {
    pub fn new(name: &str, factor: f64) -> Self {
        LinearUnit {
            name: name.to_string(),
            factor,
        }
    }

    /// Check if this is the base unit itself
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }
}

impl Measurable for LinearUnit {
    fn unit_name(&self) -> &str {
        &self.name
    }

    fn conversion_factor(&self) -> f64 {
        self.factor
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
