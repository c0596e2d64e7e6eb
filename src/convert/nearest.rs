//! Nearest-fraction search
//!
//! Snaps a decimal value onto the ladder k / max_denominator and reduces the
//! winner. Exact half-steps go to the candidate with the smaller reduced
//! denominator, so on a 64ths ladder 5/128 resolves to 1/32 rather than 3/64.

use std::cmp::Ordering;

use super::fraction::Fraction;

/// Denominator granularity used by the reference table and display
pub const DEFAULT_MAX_DENOMINATOR: u32 = 64;

/// Find the fraction on the 1/max_denominator ladder closest to `value`
///
/// Returns None if `value` is not finite, `max_denominator` is zero, or the
/// scaled value does not fit the integer representation.
pub fn nearest_fraction(value: f64, max_denominator: u32) -> Option<Fraction> {
    if !value.is_finite() || max_denominator == 0 {
        return None;
    }

    let den = i64::from(max_denominator);
    let scaled = value * f64::from(max_denominator);
    let lower = scaled.floor();

    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63
    if lower < i64::MIN as f64 || lower >= i64::MAX as f64 {
        return None;
    }

    let lo = lower as i64;
    let below = Fraction::new(lo, den)?;
    let above = Fraction::new(lo.checked_add(1)?, den)?;

    let to_below = scaled - lower;
    let to_above = (lower + 1.0) - scaled;

    let nearest = match to_below.partial_cmp(&to_above)? {
        Ordering::Less => below,
        Ordering::Greater => above,
        Ordering::Equal => break_tie(below, above),
    };
    Some(nearest)
}

fn break_tie(a: Fraction, b: Fraction) -> Fraction {
    match a.denominator().cmp(&b.denominator()) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal => {
            if a.abs() <= b.abs() {
                a
            } else {
                b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_exact_value() {
        assert_eq!(nearest_fraction(0.4375, 64), Some(frac(7, 16)));
        assert_eq!(nearest_fraction(0.5, 64), Some(frac(1, 2)));
        assert_eq!(nearest_fraction(1.0, 64), Some(Fraction::from_integer(1)));
        assert_eq!(nearest_fraction(0.0, 64), Some(Fraction::ZERO));
    }

    #[test]
    fn test_inexact_value() {
        let nearest = nearest_fraction(0.333, 64).unwrap();
        assert_eq!(nearest, frac(21, 64));
        assert_eq!(format!("{:.6}", nearest.to_f64()), "0.328125");

        assert_eq!(nearest_fraction(0.3, 16), Some(frac(5, 16)));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(nearest_fraction(-0.4375, 64), Some(frac(-7, 16)));
        assert_eq!(nearest_fraction(-0.333, 64), Some(frac(-21, 64)));
    }

    #[test]
    fn test_values_above_one() {
        let nearest = nearest_fraction(1.376, 64).unwrap();
        assert_eq!(nearest, frac(11, 8));
        assert_eq!(nearest.mixed().to_string(), "1 3/8");

        assert_eq!(nearest_fraction(100.01, 64), Some(frac(6401, 64)));
    }

    #[test]
    fn test_ties_prefer_smaller_denominator() {
        // 1/128 sits halfway between 0 and 1/64
        assert_eq!(nearest_fraction(1.0 / 128.0, 64), Some(Fraction::ZERO));
        // 3/128 sits halfway between 1/64 and 1/32
        assert_eq!(nearest_fraction(3.0 / 128.0, 64), Some(frac(1, 32)));
        assert_eq!(nearest_fraction(-3.0 / 128.0, 64), Some(frac(-1, 32)));
        // 0.25 on a tenths ladder: 1/5 beats 3/10
        assert_eq!(nearest_fraction(0.25, 10), Some(frac(1, 5)));
        // Same denominator on both sides: smaller magnitude wins
        assert_eq!(nearest_fraction(0.5, 3), Some(frac(1, 3)));
        assert_eq!(nearest_fraction(-0.5, 3), Some(frac(-1, 3)));
    }

    #[test]
    fn test_matches_rounded_ladder() {
        for i in 0..2000 {
            let x = i as f64 * 0.00137 - 1.0;
            let scaled = x * 64.0;
            if (scaled - scaled.floor() - 0.5).abs() < 1e-9 {
                continue;
            }
            let expected = scaled.round() / 64.0;
            let nearest = nearest_fraction(x, 64).unwrap();
            assert_eq!(nearest.to_f64(), expected, "value {}", x);
            assert_eq!(
                nearest,
                frac(scaled.round() as i64, 64),
                "value {} not reduced consistently",
                x
            );
        }
    }

    #[test]
    fn test_unrepresentable_inputs() {
        assert_eq!(nearest_fraction(f64::NAN, 64), None);
        assert_eq!(nearest_fraction(f64::INFINITY, 64), None);
        assert_eq!(nearest_fraction(0.5, 0), None);
        assert_eq!(nearest_fraction(1e300, 64), None);
    }
}
