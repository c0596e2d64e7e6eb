//! Converter tools
//!
//! Callers of the conversion engine: one tool per converter tab, plus the
//! About screen.

pub mod about;
pub mod conversions;

pub use about::{about, AboutResponse};
pub use conversions::{
    convert, fraction_to_decimal, inches_to_mm, mm_to_inches, reference_rows, select_row,
    selection_input, ConversionError, ConversionResponse, ConversionResult,
    FractionToDecimalResponse, InchesToMmResponse, MmToInchesResponse, RowSelected, Tab,
};
