//! Property-based tests for the round-trip and rounding guarantees
//!
//! These complement the fixture tables by checking the same properties over
//! generated entries, numerals and doubles.

use proptest::prelude::*;
use serde_vars::{
    entries_to_string, format_float, format_float32, parse_bool, parse_entries, parse_float,
    parse_float32, Entry,
};

fn key() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,15}"
}

fn value() -> impl Strategy<Value = String> {
    // anything printable on one line, quotes and equals signs included
    "[^\r\n]{0,40}"
}

/// Checks `parse_float` against the standard library's correctly rounded parser.
fn agrees_with_std(input: &str) -> Result<(), TestCaseError> {
    let want: f64 = input.parse().unwrap();
    match parse_float(input) {
        Ok(got) => prop_assert_eq!(got.to_bits(), want.to_bits(), "{}", input),
        Err(err) => {
            prop_assert!(err.is_range(), "{}: {}", input, err);
            prop_assert!(want.is_infinite(), "{}", input);
            prop_assert_eq!(err.saturated(), Some(want));
        }
    }
    Ok(())
}

/// Same check in single precision, where rounding must happen only once.
fn agrees_with_std32(input: &str) -> Result<(), TestCaseError> {
    let want: f32 = input.parse().unwrap();
    match parse_float32(input) {
        Ok(got) => prop_assert_eq!(got.to_bits(), want.to_bits(), "{}", input),
        Err(err) => {
            prop_assert!(err.is_range(), "{}: {}", input, err);
            prop_assert!(want.is_infinite(), "{}", input);
            prop_assert_eq!(err.saturated(), Some(f64::from(want)));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_entries_roundtrip(entries in prop::collection::vec((key(), value()), 0..20)) {
        let entries: Vec<Entry> = entries.into_iter().map(|(k, v)| Entry::new(k, v)).collect();
        let text = entries_to_string(&entries).unwrap();
        prop_assert_eq!(parse_entries(&text).unwrap(), entries);
    }

    #[test]
    fn prop_format_parse_roundtrip(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        prop_assume!(value.is_finite());
        let text = format_float(value);
        let back = parse_float(&text).unwrap();
        prop_assert_eq!(back.to_bits(), value.to_bits(), "{}", text);
    }

    #[test]
    fn prop_format_f32_roundtrip(bits in any::<u32>()) {
        let value = f32::from_bits(bits);
        prop_assume!(value.is_finite());
        let text = format_float32(value);
        let back = parse_float32(&text).unwrap();
        prop_assert_eq!(back.to_bits(), value.to_bits(), "{}", text);
    }

    #[test]
    fn prop_agrees_with_std(
        negative in any::<bool>(),
        int in "[0-9]{1,30}",
        frac in "[0-9]{0,30}",
        exp in -340i32..340,
    ) {
        let sign = if negative { "-" } else { "" };
        agrees_with_std(&format!("{sign}{int}.{frac}e{exp}"))?;
    }

    #[test]
    fn prop_f32_agrees_with_std(
        negative in any::<bool>(),
        int in "[0-9]{1,20}",
        frac in "[0-9]{0,40}",
        exp in -60i32..60,
    ) {
        let sign = if negative { "-" } else { "" };
        agrees_with_std32(&format!("{sign}{int}.{frac}e{exp}"))?;
    }

    #[test]
    fn prop_f32_halfway_neighbours_agree_with_std(bits in 0u32..0x7f7f_ffff, above in any::<bool>()) {
        // exact midpoint between two adjacent floats; 160 digits hold it in full
        let low = f64::from(f32::from_bits(bits));
        let high = f64::from(f32::from_bits(bits + 1));
        let mid = low + (high - low) / 2.0;
        let exact = format!("{mid:.160e}");
        let (mantissa, exp) = exact.split_once('e').unwrap();
        let text = if above {
            format!("{mantissa}1e{exp}")
        } else {
            exact.clone()
        };
        agrees_with_std32(&text)?;
    }

    #[test]
    fn prop_long_mantissas_agree_with_std(digits in "[1-9][0-9]{20,800}", exp in -1200i32..-300) {
        agrees_with_std(&format!("{digits}e{exp}"))?;
    }

    #[test]
    fn prop_bool_rejects_other_spellings(s in "\\PC{0,8}") {
        let canonical = ["1", "t", "T", "TRUE", "true", "True", "0", "f", "F", "FALSE", "false", "False"];
        prop_assert_eq!(parse_bool(&s).is_ok(), canonical.contains(&s.as_str()));
    }
}
