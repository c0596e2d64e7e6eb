//! Exact rational type
//!
//! Fractions are stored as a reduced integer pair so the reference table and
//! nearest-fraction results never pick up floating-point error.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A rational number in lowest terms with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFraction", into = "RawFraction")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

#[derive(Serialize, Deserialize)]
struct RawFraction {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = String;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Fraction::new(raw.numerator, raw.denominator)
            .ok_or_else(|| "denominator cannot be zero".to_string())
    }
}

impl From<Fraction> for RawFraction {
    fn from(f: Fraction) -> Self {
        Self {
            numerator: f.numerator,
            denominator: f.denominator,
        }
    }
}

/// Greatest common divisor of the absolute values
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Fraction {
    /// Zero, stored as 0/1
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    /// Build a reduced fraction. Returns None for a zero denominator or when
    /// the result cannot be represented in i64.
    pub fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        if numerator == 0 {
            return Some(Self::ZERO);
        }

        // gcd(i64::MIN, i64::MIN) does not fit back into i64
        let divisor = i64::try_from(gcd(numerator, denominator)).ok()?;
        let (mut num, mut den) = (numerator / divisor, denominator / divisor);
        if den < 0 {
            num = num.checked_neg()?;
            den = den.checked_neg()?;
        }

        Some(Self {
            numerator: num,
            denominator: den,
        })
    }

    /// A whole number n/1
    pub fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Decimal value, for display and distance comparisons only
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Integer part, truncated toward zero
    pub fn whole(&self) -> i64 {
        self.numerator / self.denominator
    }

    /// Proper fractional remainder, carrying the sign of the value
    pub fn remainder(&self) -> Fraction {
        let rest = self.numerator % self.denominator;
        if rest == 0 {
            return Self::ZERO;
        }
        Fraction {
            numerator: rest,
            denominator: self.denominator,
        }
    }

    pub fn abs(&self) -> Fraction {
        Fraction {
            numerator: self.numerator.saturating_abs(),
            denominator: self.denominator,
        }
    }

    /// Exact sum, None on overflow
    pub fn checked_add(&self, other: &Fraction) -> Option<Fraction> {
        let num = self
            .numerator
            .checked_mul(other.denominator)?
            .checked_add(other.numerator.checked_mul(self.denominator)?)?;
        let den = self.denominator.checked_mul(other.denominator)?;
        Fraction::new(num, den)
    }

    pub fn checked_neg(&self) -> Option<Fraction> {
        Some(Fraction {
            numerator: self.numerator.checked_neg()?,
            denominator: self.denominator,
        })
    }

    /// Mixed-number rendering: "1 3/8", "3/8", "-1 3/8" or "2"
    pub fn mixed(&self) -> Mixed<'_> {
        Mixed(self)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Display adapter returned by [`Fraction::mixed`]
pub struct Mixed<'a>(&'a Fraction);

impl fmt::Display for Mixed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let whole = value.whole();
        let rest = value.remainder().abs();

        if whole == 0 {
            // Sign lives on the remainder when there is no whole part
            write!(f, "{}", value)
        } else if rest.numerator == 0 {
            write!(f, "{}", whole)
        } else {
            write!(f, "{} {}", whole, rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reduces() {
        let f = Fraction::new(8, 64).unwrap();
        assert_eq!(f.numerator(), 1);
        assert_eq!(f.denominator(), 8);

        let f = Fraction::new(64, 64).unwrap();
        assert_eq!(f, Fraction::from_integer(1));
    }

    #[test]
    fn test_new_normalises_sign() {
        let f = Fraction::new(3, -8).unwrap();
        assert_eq!(f.numerator(), -3);
        assert_eq!(f.denominator(), 8);

        let f = Fraction::new(-6, -16).unwrap();
        assert_eq!(f, Fraction::new(3, 8).unwrap());
    }

    #[test]
    fn test_new_zero_denominator() {
        assert_eq!(Fraction::new(5, 0), None);
        assert_eq!(Fraction::new(0, 0), None);
    }

    #[test]
    fn test_zero_is_canonical() {
        assert_eq!(Fraction::new(0, 17).unwrap(), Fraction::ZERO);
        assert_eq!(Fraction::new(0, -3).unwrap().denominator(), 1);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(48, 64), 16);
        assert_eq!(gcd(-9, 6), 3);
        assert_eq!(gcd(7, 0), 7);
    }

    #[test]
    fn test_ordering_is_exact() {
        let a = Fraction::new(21, 64).unwrap();
        let b = Fraction::new(1, 3).unwrap();
        assert!(a < b);
        assert!(Fraction::new(-1, 2).unwrap() < Fraction::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::new(3, 8).unwrap().to_string(), "3/8");
        assert_eq!(Fraction::new(-7, 16).unwrap().to_string(), "-7/16");
        assert_eq!(Fraction::new(4, 2).unwrap().to_string(), "2");
    }

    #[test]
    fn test_mixed_display() {
        assert_eq!(Fraction::new(11, 8).unwrap().mixed().to_string(), "1 3/8");
        assert_eq!(Fraction::new(-11, 8).unwrap().mixed().to_string(), "-1 3/8");
        assert_eq!(Fraction::new(3, 8).unwrap().mixed().to_string(), "3/8");
        assert_eq!(Fraction::new(-3, 8).unwrap().mixed().to_string(), "-3/8");
        assert_eq!(Fraction::from_integer(2).mixed().to_string(), "2");
        assert_eq!(Fraction::ZERO.mixed().to_string(), "0");
    }

    #[test]
    fn test_checked_add() {
        let sum = Fraction::from_integer(1)
            .checked_add(&Fraction::new(3, 8).unwrap())
            .unwrap();
        assert_eq!(sum, Fraction::new(11, 8).unwrap());
        assert!((sum.to_f64() - 1.375).abs() < f64::EPSILON);

        let big = Fraction::from_integer(i64::MAX);
        assert_eq!(big.checked_add(&Fraction::from_integer(1)), None);
    }

    #[test]
    fn test_serde_rejects_zero_denominator() {
        let json = serde_json::to_string(&Fraction::new(6, 16).unwrap()).unwrap();
        assert_eq!(json, r#"{"numerator":3,"denominator":8}"#);

        let bad: Result<Fraction, _> =
            serde_json::from_str(r#"{"numerator":1,"denominator":0}"#);
        assert!(bad.is_err());

        let reduced: Fraction =
            serde_json::from_str(r#"{"numerator":4,"denominator":8}"#).unwrap();
        assert_eq!(reduced, Fraction::new(1, 2).unwrap());
    }
}
