//! Common fractions reference table

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::Serialize;

use super::fraction::Fraction;
use super::nearest::DEFAULT_MAX_DENOMINATOR;
use super::units::{format_inches, format_millimeters, inches_to_millimeters};

/// One row of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceEntry {
    pub fraction: Fraction,
    pub inches: f64,
    pub millimeters: f64,
}

impl ReferenceEntry {
    fn from_fraction(fraction: Fraction) -> Self {
        let inches = fraction.to_f64();
        Self {
            fraction,
            inches,
            millimeters: inches_to_millimeters(inches),
        }
    }

    /// Decimal inches rendered to 6 places
    pub fn inches_text(&self) -> String {
        format_inches(self.inches)
    }

    /// Millimeters rendered to 4 places
    pub fn millimeters_text(&self) -> String {
        format_millimeters(self.millimeters)
    }
}

/// Build the ladder 1/max .. max/max, reduced, deduplicated and ascending
pub fn build_reference_table(max_denominator: u32) -> Vec<ReferenceEntry> {
    let den = i64::from(max_denominator);

    // BTreeSet orders by exact rational comparison and drops duplicates
    let fractions: BTreeSet<Fraction> =
        (1..=den).filter_map(|n| Fraction::new(n, den)).collect();

    fractions
        .into_iter()
        .map(ReferenceEntry::from_fraction)
        .collect()
}

static REFERENCE_TABLE: OnceLock<Vec<ReferenceEntry>> = OnceLock::new();

/// Shared 64ths table, built on first access
pub fn reference_table() -> &'static [ReferenceEntry] {
    REFERENCE_TABLE.get_or_init(|| build_reference_table(DEFAULT_MAX_DENOMINATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contains_exact_ladder() {
        let table = build_reference_table(64);
        assert_eq!(table.len(), 64);

        let expected: BTreeSet<Fraction> = (1..=64)
            .map(|n| Fraction::new(n, 64).unwrap())
            .collect();
        let actual: BTreeSet<Fraction> = table.iter().map(|e| e.fraction).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_table_strictly_ascending() {
        let table = build_reference_table(64);
        for pair in table.windows(2) {
            assert!(pair[0].fraction < pair[1].fraction);
            assert!(pair[0].inches < pair[1].inches);
        }
    }

    #[test]
    fn test_table_endpoints() {
        let table = build_reference_table(64);
        let first = table.first().unwrap();
        assert_eq!(first.fraction.to_string(), "1/64");
        assert_eq!(first.inches_text(), "0.015625");
        assert_eq!(first.millimeters_text(), "0.3969");

        let last = table.last().unwrap();
        assert_eq!(last.fraction.to_string(), "1");
        assert_eq!(last.millimeters_text(), "25.4000");
    }

    #[test]
    fn test_table_entries_reduced() {
        let table = build_reference_table(64);
        let half = table.iter().find(|e| e.inches == 0.5).unwrap();
        assert_eq!(half.fraction, Fraction::new(1, 2).unwrap());
        assert_eq!(half.millimeters_text(), "12.7000");

        let seven_sixteenths = table.iter().find(|e| e.inches == 0.4375).unwrap();
        assert_eq!(seven_sixteenths.fraction.to_string(), "7/16");
        assert_eq!(seven_sixteenths.millimeters_text(), "11.1125");
    }

    #[test]
    fn test_small_and_empty_ladders() {
        let quarters: Vec<String> = build_reference_table(4)
            .iter()
            .map(|e| e.fraction.to_string())
            .collect();
        assert_eq!(quarters, vec!["1/4", "1/2", "3/4", "1"]);

        assert!(build_reference_table(0).is_empty());
    }

    #[test]
    fn test_shared_table() {
        let shared = reference_table();
        assert_eq!(shared, build_reference_table(64).as_slice());
        assert!(std::ptr::eq(shared, reference_table()));
    }
}
