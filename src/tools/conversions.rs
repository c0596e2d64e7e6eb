//! Converter tab tools
//!
//! One entry point per converter tab, plus the reference-table rows each tab
//! shows and the row-selection message that feeds a row back into its tab.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::{
    nearest_fraction, parse_decimal, parse_decimal_exact, parse_decimal_or_fraction,
    parse_fraction, Fraction, Measurement, ParseError, ParseResult, ReferenceEntry, Unit,
};

/// Converter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// Fraction -> decimal inches
    Fraction,
    /// Inches (decimal, fraction or mixed) -> millimeters
    InchesToMm,
    /// Millimeters -> decimal inches and nearest fraction
    MmToInches,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Fraction, Tab::InchesToMm, Tab::MmToInches];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Fraction => "fraction",
            Tab::InchesToMm => "in2mm",
            Tab::MmToInches => "mm2in",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fraction" | "frac" | "fraction_to_decimal" => Some(Tab::Fraction),
            "in2mm" | "inches" | "inches_to_mm" => Some(Tab::InchesToMm),
            "mm2in" | "mm" | "mm_to_inches" => Some(Tab::MmToInches),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Fraction => "Fraction → Decimal",
            Tab::InchesToMm => "Inches → Millimeters",
            Tab::MmToInches => "Millimeters → Inches",
        }
    }

    /// Prompt shown when the input cannot be parsed
    pub fn hint(&self) -> &'static str {
        match self {
            Tab::Fraction => "Enter a fraction like 3/8 or 7/16",
            Tab::InchesToMm => "Enter a value like 3/8, 1 3/8, or 0.375",
            Tab::MmToInches => "Enter a numeric value in millimeters.",
        }
    }

    /// Reference table column headings, in row order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Tab::Fraction => &["Fraction (in)", "Decimal (in)"],
            Tab::InchesToMm => &["Fraction (in)", "Decimal (in)", "Millimeters"],
            Tab::MmToInches => &["Millimeters", "Decimal (in)", "Fraction (in)"],
        }
    }
}

/// Errors surfaced to the user by the converter tabs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Value must be positive.")]
    Negative,

    #[error("No fraction can represent {0} inches")]
    NoNearestFraction(f64),

    #[error("Reference row {0} does not exist")]
    NoSuchRow(usize),
}

/// Result type for converter tools
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Response for fraction_to_decimal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractionToDecimalResponse {
    pub input: String,
    pub fraction: String,
    pub decimal: String,
}

/// Response for inches_to_mm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InchesToMmResponse {
    pub input: String,
    pub inches: String,
    pub millimeters: String,
}

/// Response for mm_to_inches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MmToInchesResponse {
    pub input: String,
    pub millimeters: String,
    pub inches: String,
    pub nearest_fraction: String,
}

/// Any tab's response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum ConversionResponse {
    Fraction(FractionToDecimalResponse),
    InchesToMm(InchesToMmResponse),
    MmToInches(MmToInchesResponse),
}

impl ConversionResponse {
    pub fn tab(&self) -> Tab {
        match self {
            ConversionResponse::Fraction(_) => Tab::Fraction,
            ConversionResponse::InchesToMm(_) => Tab::InchesToMm,
            ConversionResponse::MmToInches(_) => Tab::MmToInches,
        }
    }

    /// Labelled result values, as the tab displays them
    pub fn result_lines(&self) -> Vec<(&'static str, &str)> {
        match self {
            ConversionResponse::Fraction(r) => vec![("Decimal (in)", r.decimal.as_str())],
            ConversionResponse::InchesToMm(r) => vec![("Millimeters", r.millimeters.as_str())],
            ConversionResponse::MmToInches(r) => vec![
                ("Decimal (in)", r.inches.as_str()),
                ("Nearest fraction", r.nearest_fraction.as_str()),
            ],
        }
    }
}

/// Click on a reference table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSelected {
    pub tab: Tab,
    pub index: usize,
}

/// Fraction text, or failing that an exact decimal literal ("0.375" -> 3/8)
fn parse_fraction_field(raw: &str) -> ParseResult<Fraction> {
    parse_fraction(raw).or_else(|e| match e {
        ParseError::NonInteger(_) | ParseError::Malformed(_) => {
            parse_decimal_exact(raw).map_err(|_| e)
        }
        other => Err(other),
    })
}

/// Convert fraction (or decimal) text to decimal inches
pub fn fraction_to_decimal(text: &str) -> ConversionResult<FractionToDecimalResponse> {
    let raw = text.trim();
    let fraction = parse_fraction_field(raw).inspect_err(|e| {
        tracing::warn!("Rejected fraction input '{}': {}", raw, e);
    })?;

    if fraction.is_negative() {
        return Err(ConversionError::Negative);
    }

    let decimal = Measurement::inches(fraction.to_f64()).formatted_value();
    tracing::debug!("{} in = {} in", fraction, decimal);

    Ok(FractionToDecimalResponse {
        input: raw.to_string(),
        fraction: fraction.to_string(),
        decimal,
    })
}

/// Convert inch text (decimal, fraction or mixed number) to millimeters
pub fn inches_to_mm(text: &str) -> ConversionResult<InchesToMmResponse> {
    let raw = text.trim();
    let inches = parse_decimal_or_fraction(raw).inspect_err(|e| {
        tracing::warn!("Rejected inch input '{}': {}", raw, e);
    })?;

    if inches < 0.0 {
        return Err(ConversionError::Negative);
    }

    // "-0" parses to negative zero
    let inches = Measurement::inches(inches + 0.0);
    let millimeters = inches.to(Unit::Millimeters);
    tracing::debug!("{} = {}", inches, millimeters);

    Ok(InchesToMmResponse {
        input: raw.to_string(),
        inches: inches.formatted_value(),
        millimeters: millimeters.formatted_value(),
    })
}

/// Convert millimeter text to decimal inches and the nearest fraction
pub fn mm_to_inches(text: &str, max_denominator: u32) -> ConversionResult<MmToInchesResponse> {
    let raw = text.trim();
    let mm = parse_decimal(raw).inspect_err(|e| {
        tracing::warn!("Rejected millimeter input '{}': {}", raw, e);
    })?;

    if mm < 0.0 {
        return Err(ConversionError::Negative);
    }

    let mm = Measurement::millimeters(mm + 0.0);
    let inches = mm.to(Unit::Inches);
    let nearest = nearest_fraction(inches.value, max_denominator)
        .ok_or(ConversionError::NoNearestFraction(inches.value))?;
    tracing::debug!("{} = {} ~ {}", mm, inches, nearest);

    Ok(MmToInchesResponse {
        input: raw.to_string(),
        millimeters: mm.formatted_value(),
        inches: inches.formatted_value(),
        nearest_fraction: nearest.mixed().to_string(),
    })
}

/// Run the given tab's conversion
pub fn convert(tab: Tab, text: &str, max_denominator: u32) -> ConversionResult<ConversionResponse> {
    match tab {
        Tab::Fraction => fraction_to_decimal(text).map(ConversionResponse::Fraction),
        Tab::InchesToMm => inches_to_mm(text).map(ConversionResponse::InchesToMm),
        Tab::MmToInches => {
            mm_to_inches(text, max_denominator).map(ConversionResponse::MmToInches)
        }
    }
}

/// Reference rows for a tab, in the tab's column order
pub fn reference_rows(tab: Tab, table: &[ReferenceEntry]) -> Vec<Vec<String>> {
    table
        .iter()
        .map(|entry| {
            let fraction = entry.fraction.to_string();
            let inches = entry.inches_text();
            let mm = entry.millimeters_text();
            match tab {
                Tab::Fraction => vec![fraction, inches],
                Tab::InchesToMm => vec![fraction, inches, mm],
                Tab::MmToInches => vec![mm, inches, fraction],
            }
        })
        .collect()
}

/// Text a selected row puts into its tab's input field
pub fn selection_input(selection: RowSelected, table: &[ReferenceEntry]) -> ConversionResult<String> {
    let entry = table
        .get(selection.index)
        .ok_or(ConversionError::NoSuchRow(selection.index))?;

    Ok(match selection.tab {
        Tab::Fraction => entry.fraction.to_string(),
        Tab::InchesToMm => entry.inches_text(),
        Tab::MmToInches => entry.millimeters_text(),
    })
}

/// Populate the tab's input from the selected row and convert it
pub fn select_row(
    selection: RowSelected,
    table: &[ReferenceEntry],
    max_denominator: u32,
) -> ConversionResult<ConversionResponse> {
    let input = selection_input(selection, table)?;
    convert(selection.tab, &input, max_denominator)
}
