//! Text input parsing
//!
//! Accepts the forms people type into a measurement field:
//! - "3/8", "-7/16"            plain fractions
//! - "1 3/8", "-2 1/4"         mixed numbers (sign applies to the whole value)
//! - "3"                       whole numbers
//! - "0.375", "1e-3"           decimal literals (decimal parsers only; exact
//!                             with `parse_decimal_exact`)

use std::num::IntErrorKind;

use thiserror::Error;

use super::fraction::Fraction;

/// Errors produced while parsing measurement text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Input is empty")]
    Empty,

    #[error("Malformed value: '{0}'")]
    Malformed(String),

    #[error("Not an integer: '{0}'")]
    NonInteger(String),

    #[error("Denominator cannot be zero")]
    ZeroDenominator,

    #[error("Value out of range: '{0}'")]
    OutOfRange(String),

    #[error("Not a finite number: '{0}'")]
    NonFinite(String),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse an unsigned integer component of a fraction
fn parse_component(s: &str) -> ParseResult<i64> {
    if s.is_empty() {
        return Err(ParseError::Malformed(s.to_string()));
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonInteger(s.to_string()));
    }

    s.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseError::OutOfRange(s.to_string())
        }
        _ => ParseError::NonInteger(s.to_string()),
    })
}

/// Parse an unsigned "a/b" or "a" token
fn parse_unsigned_fraction(token: &str) -> ParseResult<Fraction> {
    match token.split_once('/') {
        Some((num, den)) => {
            if den.contains('/') {
                return Err(ParseError::Malformed(token.to_string()));
            }
            let num = parse_component(num)?;
            let den = parse_component(den)?;
            if den == 0 {
                return Err(ParseError::ZeroDenominator);
            }
            Fraction::new(num, den).ok_or_else(|| ParseError::OutOfRange(token.to_string()))
        }
        None => parse_component(token).map(Fraction::from_integer),
    }
}

/// Split a leading '+' or '-' off the text
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Parse fraction text: "a/b", "w a/b" or "w", optionally signed
pub fn parse_fraction(text: &str) -> ParseResult<Fraction> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (negative, unsigned) = split_sign(trimmed);
    // "- 3/8" and "--3/8" are not measurements
    if unsigned.starts_with(|c: char| c.is_whitespace() || c == '-' || c == '+') {
        return Err(ParseError::Malformed(trimmed.to_string()));
    }

    let parts: Vec<&str> = unsigned.split_whitespace().collect();
    let value = match parts.as_slice() {
        [single] => parse_unsigned_fraction(single)?,
        [whole, frac] => {
            // Whole part of a mixed number must be an integer and the
            // fractional part must carry the slash and no sign of its own
            if !frac.contains('/') || frac.starts_with(|c: char| c == '-' || c == '+') {
                return Err(ParseError::Malformed(trimmed.to_string()));
            }
            let whole = Fraction::from_integer(parse_component(whole)?);
            let frac = parse_unsigned_fraction(frac)?;
            whole
                .checked_add(&frac)
                .ok_or_else(|| ParseError::OutOfRange(trimmed.to_string()))?
        }
        _ => return Err(ParseError::Malformed(trimmed.to_string())),
    };

    if negative {
        value
            .checked_neg()
            .ok_or_else(|| ParseError::OutOfRange(trimmed.to_string()))
    } else {
        Ok(value)
    }
}

/// Parse a decimal literal such as "0.375", ".5" or "2.5e1"
pub fn parse_decimal(text: &str) -> ParseResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseError::Malformed(trimmed.to_string()))?;

    // f64's grammar also admits "inf" and "NaN"
    if !value.is_finite() {
        return Err(ParseError::NonFinite(trimmed.to_string()));
    }

    Ok(value)
}

/// Parse a decimal literal exactly, e.g. "0.375" -> 3/8 or "1e-3" -> 1/1000
pub fn parse_decimal_exact(text: &str) -> ParseResult<Fraction> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let malformed = || ParseError::Malformed(trimmed.to_string());
    let out_of_range = || ParseError::OutOfRange(trimmed.to_string());

    let (negative, unsigned) = split_sign(trimmed);
    let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().map_err(|_| malformed())?),
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(malformed());
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    // Trailing zeros after the point carry no value
    let frac_part = frac_part.trim_end_matches('0');
    let digits = format!("{}{}", int_part, frac_part);
    let mut numerator: i64 = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| out_of_range())?
    };

    let frac_len = i32::try_from(frac_part.len()).map_err(|_| out_of_range())?;
    let scale = exponent.checked_sub(frac_len).ok_or_else(out_of_range)?;
    let mut denominator: i64 = 1;
    if numerator != 0 {
        let power = 10i64
            .checked_pow(scale.unsigned_abs())
            .ok_or_else(out_of_range)?;
        if scale >= 0 {
            numerator = numerator.checked_mul(power).ok_or_else(out_of_range)?;
        } else {
            denominator = power;
        }
    }

    let value = Fraction::new(numerator, denominator).ok_or_else(out_of_range)?;
    if negative {
        value.checked_neg().ok_or_else(out_of_range)
    } else {
        Ok(value)
    }
}

/// Parse either a decimal literal or fraction text into a decimal value
pub fn parse_decimal_or_fraction(text: &str) -> ParseResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    match parse_decimal(trimmed) {
        Ok(value) => Ok(value),
        Err(ParseError::NonFinite(s)) => Err(ParseError::NonFinite(s)),
        Err(_) => parse_fraction(trimmed).map(|f| f.to_f64()),
    }
}
