//! Shortest round-trip formatting of doubles.

/// Formats `value` with the fewest digits that parse back to the same double.
///
/// Uses fixed notation when the decimal exponent is in `-4..6` and exponent
/// notation otherwise, with a signed exponent of at least two digits.
/// Non-finite values print as `NaN`, `+Inf` and `-Inf`; negative zero keeps
/// its sign.
///
/// # Examples
///
/// ```rust
/// use serde_vars::format_float;
///
/// assert_eq!(format_float(1e23), "1e+23");
/// assert_eq!(format_float(123456700.0), "1.234567e+08");
/// assert_eq!(format_float(0.625), "0.625");
/// assert_eq!(format_float(-0.0), "-0");
/// assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    format_shortest(&format!("{:e}", value.abs()), value.is_sign_negative())
}

/// Like [`format_float`], with the fewest digits that parse back to the same
/// single-precision value.
///
/// ```rust
/// use serde_vars::{format_float, format_float32};
///
/// assert_eq!(format_float32(0.1), "0.1");
/// assert_eq!(format_float(0.1_f32 as f64), "0.10000000149011612");
/// ```
#[must_use]
pub fn format_float32(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    format_shortest(&format!("{:e}", value.abs()), value.is_sign_negative())
}

/// Lays out `scientific`, the `d[.ddd]e<exp>` output of `{:e}`.
fn format_shortest(scientific: &str, negative: bool) -> String {
    let mut out = String::with_capacity(24);
    if negative {
        out.push('-');
    }

    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits: Vec<u8> = mantissa.bytes().filter(|b| *b != b'.').collect();

    if exponent < -4 || exponent >= 6 {
        write_exponent_form(&mut out, &digits, exponent);
    } else {
        write_fixed_form(&mut out, &digits, exponent + 1);
    }
    out
}

fn write_exponent_form(out: &mut String, digits: &[u8], exponent: i64) {
    let Some((first, rest)) = digits.split_first() else {
        return;
    };
    out.push(char::from(*first));
    if !rest.is_empty() {
        out.push('.');
        out.extend(rest.iter().map(|&d| char::from(d)));
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    let magnitude = exponent.unsigned_abs();
    if magnitude < 10 {
        out.push('0');
    }
    out.push_str(&magnitude.to_string());
}

/// Writes `0.d1d2...dn × 10^point` without an exponent.
fn write_fixed_form(out: &mut String, digits: &[u8], point: i64) {
    let len = digits.len() as i64;
    if point <= 0 {
        out.push('0');
    } else {
        for i in 0..point {
            out.push(digits.get(i as usize).map_or('0', |&d| char::from(d)));
        }
    }

    if len > point {
        out.push('.');
        for _ in point..0 {
            out.push('0');
        }
        let start = point.max(0) as usize;
        out.extend(digits[start..].iter().map(|&d| char::from(d)));
    }
}
