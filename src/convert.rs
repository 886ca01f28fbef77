//! Typed conversions of raw values.
//!
//! Every entry in a variables file holds a raw string. The functions here turn
//! that string into a typed value on demand:
//!
//! | Target | Function | Accepts |
//! |--------|----------|---------|
//! | string | [`parse_string`] | anything (identity) |
//! | bool | [`parse_bool`] | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | float | [`parse_float`](crate::parse_float) | decimal and scientific numerals, `inf`, `nan` |
//! | integer | [`parse_int`] | optionally signed decimal digits |
//!
//! [`convert`] dispatches on a [`Kind`] and wraps the result in a [`VarValue`].

use crate::float::{format_float, parse_float};
use crate::{Error, Kind, Result, VarValue};
use std::num::IntErrorKind;
use std::str::FromStr;

const BOOL_FUNC: &str = "parse_bool";
const INT_FUNC: &str = "parse_int";

/// Returns the raw value unchanged. Always succeeds.
///
/// # Examples
///
/// ```rust
/// use serde_vars::parse_string;
///
/// assert_eq!(parse_string("-g -O2"), "-g -O2");
/// assert_eq!(parse_string(""), "");
/// ```
#[inline]
#[must_use]
pub fn parse_string(raw: &str) -> String {
    raw.to_string()
}

/// Parses one of the twelve canonical boolean spellings.
///
/// # Errors
///
/// Returns [`Error::InvalidSyntax`] for any other input, including the empty
/// string and spellings such as `yes`, `on` or `tRUE`.
///
/// # Examples
///
/// ```rust
/// use serde_vars::parse_bool;
///
/// assert_eq!(parse_bool("T").unwrap(), true);
/// assert_eq!(parse_bool("0").unwrap(), false);
/// assert!(parse_bool("yes").is_err());
/// ```
pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::invalid_syntax(BOOL_FUNC, raw)),
    }
}

/// Formats a boolean as `true` or `false`.
#[inline]
#[must_use]
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parses an optionally signed decimal integer of any primitive width.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when the digits do not fit `T` and
/// [`Error::InvalidSyntax`] otherwise.
///
/// # Examples
///
/// ```rust
/// use serde_vars::parse_int;
///
/// assert_eq!(parse_int::<i32>("-42").unwrap(), -42);
/// assert!(parse_int::<u8>("256").unwrap_err().is_range());
/// assert!(parse_int::<u8>("-1").unwrap_err().is_syntax());
/// ```
pub fn parse_int<T>(raw: &str) -> Result<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    raw.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::out_of_range(INT_FUNC, raw, None)
        }
        _ => Error::invalid_syntax(INT_FUNC, raw),
    })
}

/// Converts a raw value to the requested [`Kind`].
///
/// # Errors
///
/// Propagates the error of the underlying conversion. Range errors from float
/// conversion still carry the saturated value.
///
/// # Examples
///
/// ```rust
/// use serde_vars::{convert, Kind, VarValue};
///
/// assert_eq!(convert("amd64", Kind::String).unwrap(), VarValue::from("amd64"));
/// assert_eq!(convert("1", Kind::Bool).unwrap(), VarValue::Bool(true));
/// assert_eq!(convert("1e23", Kind::Float).unwrap().to_string(), "1e+23");
/// ```
pub fn convert(raw: &str, kind: Kind) -> Result<VarValue> {
    match kind {
        Kind::String => Ok(VarValue::String(parse_string(raw))),
        Kind::Bool => parse_bool(raw).map(VarValue::Bool),
        Kind::Float => parse_float(raw).map(VarValue::Float),
    }
}

/// Renders a typed value back into its raw form.
///
/// The result converts back to an equal value with the same [`Kind`]
/// (NaN excepted, which never compares equal).
#[must_use]
pub fn to_raw(value: &VarValue) -> String {
    match value {
        VarValue::String(s) => s.clone(),
        VarValue::Bool(b) => format_bool(*b).to_string(),
        VarValue::Float(f) => format_float(*f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_spellings() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool(raw).unwrap(), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_bool(raw).unwrap(), "{raw}");
        }
        for raw in ["", "x", "yes", "no", "tRUE", "fALSE", " true", "2", "on"] {
            let err = parse_bool(raw).unwrap_err();
            assert!(err.is_syntax(), "{raw}");
        }
    }

    #[test]
    fn test_int_errors() {
        assert_eq!(parse_int::<i64>("+17").unwrap(), 17);
        assert!(parse_int::<i64>("99999999999999999999").unwrap_err().is_range());
        assert!(parse_int::<i64>("-99999999999999999999").unwrap_err().is_range());
        assert!(parse_int::<i64>("").unwrap_err().is_syntax());
        assert!(parse_int::<i64>("1.5").unwrap_err().is_syntax());
    }

    #[test]
    fn test_convert_kinds() {
        assert_eq!(
            convert("/usr/lib/golang", Kind::String).unwrap(),
            VarValue::String("/usr/lib/golang".to_string())
        );
        assert_eq!(convert("False", Kind::Bool).unwrap(), VarValue::Bool(false));
        assert!(convert("", Kind::Bool).unwrap_err().is_syntax());
        assert_eq!(convert("-0.1", Kind::Float).unwrap(), VarValue::Float(-0.1));

        let err = convert("1e400", Kind::Float).unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.saturated(), Some(f64::INFINITY));
    }

    #[test]
    fn test_to_raw_converts_back() {
        let values = [
            VarValue::from("-fPIC -m64"),
            VarValue::Bool(true),
            VarValue::Float(1e23),
            VarValue::Float(-0.0),
            VarValue::Float(f64::NEG_INFINITY),
        ];
        for value in values {
            let raw = to_raw(&value);
            let back = convert(&raw, value.kind()).unwrap();
            assert_eq!(back, value, "{raw}");
        }
    }
}
