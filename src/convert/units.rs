//! Length units and conversion constants
//!
//! Provides the inch/millimeter factor, a unit-tagged measurement type and the
//! fixed-precision renderings used everywhere results are displayed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Millimeters per inch, exact by international definition (1959)
pub const MM_PER_INCH: f64 = 25.4;

/// Decimal places shown for inch values
pub const INCH_DECIMALS: usize = 6;

/// Decimal places shown for millimeter values
pub const MM_DECIMALS: usize = 4;

/// Length unit of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Inches,
    Millimeters,
}

impl Unit {
    /// Short suffix for display
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Millimeters => "mm",
        }
    }

    /// Number of decimal places this unit is rendered with
    pub fn decimals(&self) -> usize {
        match self {
            Unit::Inches => INCH_DECIMALS,
            Unit::Millimeters => MM_DECIMALS,
        }
    }
}

/// A decimal value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn inches(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Inches,
        }
    }

    pub fn millimeters(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Millimeters,
        }
    }

    /// Convert to the given unit
    pub fn to(&self, unit: Unit) -> Measurement {
        let value = match (self.unit, unit) {
            (Unit::Inches, Unit::Millimeters) => inches_to_millimeters(self.value),
            (Unit::Millimeters, Unit::Inches) => millimeters_to_inches(self.value),
            _ => self.value,
        };
        Measurement { value, unit }
    }

    /// Value rendered at the unit's precision, without suffix
    pub fn formatted_value(&self) -> String {
        format!("{:.*}", self.unit.decimals(), self.value)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted_value(), self.unit.symbol())
    }
}

/// Convert inches to millimeters
pub fn inches_to_millimeters(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Convert millimeters to inches
pub fn millimeters_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Render a decimal-inch value to 6 places
pub fn format_inches(inches: f64) -> String {
    Measurement::inches(inches).formatted_value()
}

/// Render a millimeter value to 4 places
pub fn format_millimeters(mm: f64) -> String {
    Measurement::millimeters(mm).formatted_value()
}
