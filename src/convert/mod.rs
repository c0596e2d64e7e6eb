//! Conversion engine
//!
//! Pure functions for parsing measurement text, converting between inches and
//! millimeters, and snapping decimals onto a fraction ladder.

pub mod fraction;
pub mod nearest;
pub mod parser;
pub mod reference;
pub mod units;

pub use fraction::{gcd, Fraction, Mixed};
pub use nearest::{nearest_fraction, DEFAULT_MAX_DENOMINATOR};
pub use parser::{
    parse_decimal, parse_decimal_exact, parse_decimal_or_fraction, parse_fraction, ParseError,
    ParseResult,
};
pub use reference::{build_reference_table, reference_table, ReferenceEntry};
pub use units::{
    format_inches, format_millimeters, inches_to_millimeters, millimeters_to_inches, Measurement,
    Unit, MM_PER_INCH,
};
