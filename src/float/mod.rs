//! Correctly rounded float conversion.
//!
//! [`parse_float`] turns a decimal or scientific numeral into the nearest
//! double (round-half-to-even) and [`format_float`] prints a double with the
//! fewest digits that parse back to it. [`parse_float32`] and
//! [`format_float32`] do the same for single precision, rounding once from
//! the decimal value rather than through a double.
//!
//! Short literals take Clinger's fast path: a mantissa of at most 15 digits
//! (7 for single precision) and an exactly representable power of ten need a
//! single correctly rounded multiply or divide. Everything else goes through an exact big-integer
//! conversion, so literals of thousands of digits still round correctly.
//!
//! ## Accepted syntax
//!
//! ```text
//! [+-] digits [. digits] [(e|E) [+-] digits]
//! [+-] (inf | infinity)          any case
//! nan                            any case, unsigned
//! ```
//!
//! A literal needs at least one mantissa digit. Underscores, hexadecimal
//! forms and surrounding whitespace are rejected.

mod decimal;
mod exact;
mod format;

pub use format::{format_float, format_float32};

use crate::{Error, Result};
use decimal::{Decimal, Lexed};

/// Names reported by float conversion errors.
const FUNC: &str = "parse_float";
const FUNC32: &str = "parse_float32";

/// Decimal point positions beyond these bounds are decided without arithmetic:
/// `0.d × 10^310` exceeds the largest double and `0.d × 10^-324` is below half
/// of the smallest subnormal.
const MAX_POINT: i64 = 310;
const MIN_POINT: i64 = -324;

/// Single-precision bounds: `0.d × 10^40` exceeds `f32::MAX` and
/// `0.d × 10^-46` is below half of the smallest subnormal.
const MAX_POINT32: i64 = 40;
const MIN_POINT32: i64 = -46;

const MAX_FAST_DIGITS: usize = 15;
const MAX_FAST_EXPONENT: i64 = 22;

const MAX_FAST_DIGITS32: usize = 7;
const MAX_FAST_EXPONENT32: i64 = 10;

const POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

const POW10_32: [f32; 11] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10];

/// Parses a float literal into the nearest double.
///
/// # Errors
///
/// - [`Error::InvalidSyntax`] when the input is not a float literal; the
///   documented value in that case is `0` (see [`Error::saturated`]).
/// - [`Error::OutOfRange`] when the value exceeds the largest finite double;
///   the error carries the signed infinity the value saturated to.
///
/// Values below the smallest subnormal round to (signed) zero without error.
///
/// # Examples
///
/// ```rust
/// use serde_vars::parse_float;
///
/// assert_eq!(parse_float("625e-3").unwrap(), 0.625);
/// assert_eq!(parse_float("5e-324").unwrap(), 5e-324);
/// assert_eq!(parse_float("2e-324").unwrap(), 0.0);
/// assert!(parse_float("-0").unwrap().is_sign_negative());
/// assert!(parse_float("NaN").unwrap().is_nan());
///
/// let err = parse_float("1.7976931348623159e308").unwrap_err();
/// assert_eq!(err.saturated(), Some(f64::INFINITY));
/// ```
pub fn parse_float(input: &str) -> Result<f64> {
    let lexed = decimal::lex(input).ok_or_else(|| Error::invalid_float_syntax(FUNC, input))?;
    match lexed {
        Lexed::Nan => Ok(f64::NAN),
        Lexed::Infinity { negative } => Ok(with_sign(f64::INFINITY, negative)),
        Lexed::Number(decimal) => match to_f64(&decimal) {
            Some(value) => Ok(with_sign(value, decimal.negative)),
            None => Err(Error::out_of_range(
                FUNC,
                input,
                Some(with_sign(f64::INFINITY, decimal.negative)),
            )),
        },
    }
}

/// Parses a float literal into the nearest `f32`.
///
/// Accepts the same syntax as [`parse_float`] and rounds the decimal value
/// directly to single precision, so no value is rounded twice.
///
/// # Errors
///
/// - [`Error::InvalidSyntax`] when the input is not a float literal; the
///   documented value is `0`.
/// - [`Error::OutOfRange`] when the value exceeds `f32::MAX`; the error
///   carries the signed infinity.
///
/// # Examples
///
/// ```rust
/// use serde_vars::parse_float32;
///
/// assert_eq!(parse_float32("0.1").unwrap(), 0.1_f32);
/// assert_eq!(parse_float32("1.4e-45").unwrap(), f32::from_bits(1));
///
/// let err = parse_float32("-1e39").unwrap_err();
/// assert_eq!(err.saturated(), Some(f64::NEG_INFINITY));
/// ```
pub fn parse_float32(input: &str) -> Result<f32> {
    let lexed = decimal::lex(input).ok_or_else(|| Error::invalid_float_syntax(FUNC32, input))?;
    match lexed {
        Lexed::Nan => Ok(f32::NAN),
        Lexed::Infinity { negative } => Ok(with_sign32(f32::INFINITY, negative)),
        Lexed::Number(decimal) => match to_f32(&decimal) {
            Some(value) => Ok(with_sign32(value, decimal.negative)),
            None => Err(Error::out_of_range(
                FUNC32,
                input,
                Some(with_sign(f64::INFINITY, decimal.negative)),
            )),
        },
    }
}

/// Magnitude of `decimal`, or `None` on overflow.
fn to_f64(decimal: &Decimal) -> Option<f64> {
    if decimal.is_zero() || decimal.point < MIN_POINT {
        return Some(0.0);
    }
    if decimal.point > MAX_POINT {
        return None;
    }
    fast_path(decimal).or_else(|| exact::to_f64(&decimal.digits, decimal.exponent()))
}

fn fast_path(decimal: &Decimal) -> Option<f64> {
    if decimal.digits.len() > MAX_FAST_DIGITS {
        return None;
    }
    let mantissa = decimal
        .digits
        .iter()
        .fold(0u64, |acc, &d| acc * 10 + u64::from(d));
    let exponent = decimal.exponent();

    if (0..=MAX_FAST_EXPONENT).contains(&exponent) {
        return Some(mantissa as f64 * POW10[exponent as usize]);
    }
    if (-MAX_FAST_EXPONENT..0).contains(&exponent) {
        return Some(mantissa as f64 / POW10[(-exponent) as usize]);
    }

    // move surplus powers of ten into the mantissa while it stays exact
    let surplus = exponent - MAX_FAST_EXPONENT;
    let room = (MAX_FAST_DIGITS - decimal.digits.len()) as i64;
    if surplus > 0 && surplus <= room {
        let mantissa = mantissa * 10u64.pow(surplus as u32);
        return Some(mantissa as f64 * POW10[MAX_FAST_EXPONENT as usize]);
    }
    None
}

fn to_f32(decimal: &Decimal) -> Option<f32> {
    if decimal.is_zero() || decimal.point < MIN_POINT32 {
        return Some(0.0);
    }
    if decimal.point > MAX_POINT32 {
        return None;
    }
    fast_path32(decimal).or_else(|| exact::to_f32(&decimal.digits, decimal.exponent()))
}

fn fast_path32(decimal: &Decimal) -> Option<f32> {
    if decimal.digits.len() > MAX_FAST_DIGITS32 {
        return None;
    }
    // at most seven digits, so exact in the 24-bit significand
    let mantissa = decimal
        .digits
        .iter()
        .fold(0u32, |acc, &d| acc * 10 + u32::from(d)) as f32;
    let exponent = decimal.exponent();

    if (0..=MAX_FAST_EXPONENT32).contains(&exponent) {
        return Some(mantissa * POW10_32[exponent as usize]);
    }
    if (-MAX_FAST_EXPONENT32..0).contains(&exponent) {
        return Some(mantissa / POW10_32[(-exponent) as usize]);
    }
    None
}

#[inline]
fn with_sign(value: f64, negative: bool) -> f64 {
    if negative {
        -value
    } else {
        value
    }
}

#[inline]
fn with_sign32(value: f32, negative: bool) -> f32 {
    if negative {
        -value
    } else {
        value
    }
}
