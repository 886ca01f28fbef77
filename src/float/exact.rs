//! Exact decimal-to-binary conversion with arbitrary precision integers.
//!
//! The value `M × 10^E` is written as a ratio `num / den`, scaled by a power
//! of two so that the integer quotient holds exactly `mantissa_bits + 1`
//! significant bits (or counts units of the smallest subnormal), and rounded
//! half-to-even on the remainder. Every step is exact, so this path is correct
//! for any input the lexer accepts; it only exists behind the fast path
//! because it is slow.

use num_bigint::BigUint;
use std::cmp::Ordering;
use tracing::trace;

/// Shape of an IEEE-754 binary format.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Format {
    /// Stored fraction bits (the leading one is implicit).
    pub mantissa_bits: i64,
    pub min_exponent: i64,
    /// Largest unbiased exponent, which is also the bias.
    pub max_exponent: i64,
    /// Scale that makes the quotient count multiples of the smallest subnormal.
    pub subnormal_shift: i64,
}

pub(crate) const DOUBLE: Format = Format {
    mantissa_bits: 52,
    min_exponent: -1022,
    max_exponent: 1023,
    subnormal_shift: 1074,
};

pub(crate) const SINGLE: Format = Format {
    mantissa_bits: 23,
    min_exponent: -126,
    max_exponent: 127,
    subnormal_shift: 149,
};

/// Converts `digits × 10^exp10` (digit values, most significant first) to the
/// nearest double. Returns `None` when the rounded value overflows.
pub(crate) fn to_f64(digits: &[u8], exp10: i64) -> Option<f64> {
    to_bits(digits, exp10, &DOUBLE).map(f64::from_bits)
}

/// Single-precision counterpart of [`to_f64`].
pub(crate) fn to_f32(digits: &[u8], exp10: i64) -> Option<f32> {
    to_bits(digits, exp10, &SINGLE).map(|bits| f32::from_bits(bits as u32))
}

/// Bit pattern of the value nearest to `digits × 10^exp10` in `format`.
fn to_bits(digits: &[u8], exp10: i64, format: &Format) -> Option<u64> {
    trace!(
        digits = digits.len(),
        exp10,
        mantissa_bits = format.mantissa_bits,
        "exact decimal conversion"
    );

    // digit values are always below the radix, so this cannot fail
    let mantissa = BigUint::from_radix_be(digits, 10).unwrap_or_default();
    if mantissa.bits() == 0 {
        return Some(0);
    }

    let (num, den) = if exp10 >= 0 {
        (mantissa * pow10(exp10), BigUint::from(1u32))
    } else {
        (mantissa, pow10(-exp10))
    };

    let precision = format.mantissa_bits + 1;

    // num / den lies in [2^(e-1), 2^(e+1))
    let e = num.bits() as i64 - den.bits() as i64;
    let mut shift = precision - e;
    let mut scaled = Scaled::new(&num, &den, shift);
    if scaled.quotient >= 1 << precision {
        shift -= 1;
        scaled = Scaled::new(&num, &den, shift);
    }

    if format.mantissa_bits - shift < format.min_exponent {
        shift = format.subnormal_shift;
        scaled = Scaled::new(&num, &den, shift);
    }

    let mut quotient = scaled.quotient;
    if scaled.round_up() {
        quotient += 1;
    }
    if quotient == 1 << precision {
        quotient >>= 1;
        shift -= 1;
    }

    assemble(quotient, shift, format)
}

/// Builds the bit pattern of `quotient × 2^-shift`.
fn assemble(quotient: u64, shift: i64, format: &Format) -> Option<u64> {
    let hidden = 1u64 << format.mantissa_bits;
    if quotient < hidden {
        // subnormal (or zero): the quotient is the raw bit pattern
        return Some(quotient);
    }

    let exponent = format.mantissa_bits - shift;
    if exponent > format.max_exponent {
        return None;
    }
    let biased = (exponent + format.max_exponent) as u64;
    Some((biased << format.mantissa_bits) | (quotient & (hidden - 1)))
}

fn pow10(exp: i64) -> BigUint {
    BigUint::from(10u32).pow(exp as u32)
}

/// `floor(num × 2^shift / den)` together with what is needed to round it.
struct Scaled {
    quotient: u64,
    remainder: BigUint,
    divisor: BigUint,
}

impl Scaled {
    fn new(num: &BigUint, den: &BigUint, shift: i64) -> Self {
        let (dividend, divisor) = if shift >= 0 {
            (num << shift as usize, den.clone())
        } else {
            (num.clone(), den << (-shift) as usize)
        };
        let quotient = &dividend / &divisor;
        let remainder = &dividend % &divisor;
        Scaled {
            // at most 54 bits by construction
            quotient: quotient.to_u64_digits().first().copied().unwrap_or(0),
            remainder,
            divisor,
        }
    }

    fn round_up(&self) -> bool {
        let twice = &self.remainder << 1usize;
        match twice.cmp(&self.divisor) {
            Ordering::Greater => true,
            Ordering::Equal => self.quotient & 1 == 1,
            Ordering::Less => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_simple_values() {
        assert_eq!(to_f64(&digits("1"), 0), Some(1.0));
        assert_eq!(to_f64(&digits("625"), -3), Some(0.625));
        assert_eq!(to_f64(&digits("1"), 23), Some(1e23));
        assert_eq!(to_f64(&digits("1"), -100), Some(1e-100));
    }

    #[test]
    fn test_halfway_rounds_to_even() {
        // exactly halfway between 1 and the next double: stays at 1
        let half = digits("100000000000000011102230246251565404236316680908203125");
        assert_eq!(to_f64(&half, -53), Some(1.0));

        // halfway above the next double: rounds up to the even neighbour
        let half = digits("100000000000000033306690738754696212708950042724609375");
        assert_eq!(to_f64(&half, -53), Some(1.0000000000000004));
    }

    #[test]
    fn test_subnormals() {
        assert_eq!(to_f64(&digits("5"), -324), Some(5e-324));
        assert_eq!(to_f64(&digits("3"), -324), Some(5e-324));
        assert_eq!(to_f64(&digits("2"), -324), Some(0.0));
        assert_eq!(
            to_f64(&digits("22250738585072011"), -324),
            Some(2.225073858507201e-308)
        );
        assert_eq!(
            to_f64(&digits("22250738585072012"), -324),
            Some(2.2250738585072014e-308)
        );
    }

    #[test]
    fn test_overflow_boundary() {
        assert_eq!(
            to_f64(&digits("17976931348623158"), 292),
            Some(f64::MAX)
        );
        assert_eq!(to_f64(&digits("17976931348623159"), 292), None);
        assert_eq!(to_f64(&digits("2"), 308), None);
    }

    #[test]
    fn test_assemble_smallest_normal() {
        assert_eq!(
            assemble(1 << 52, 1074, &DOUBLE),
            Some(f64::MIN_POSITIVE.to_bits())
        );
        assert_eq!(assemble(1, 1074, &DOUBLE), Some(1));
        assert_eq!(
            assemble(1 << 23, 149, &SINGLE),
            Some(u64::from(f32::MIN_POSITIVE.to_bits()))
        );
    }

    #[test]
    fn test_single_precision() {
        assert_eq!(to_f32(&digits("1"), -1), Some(0.1));
        assert_eq!(to_f32(&digits("34028234663852886"), 22), Some(f32::MAX));
        assert_eq!(to_f32(&digits("1"), 39), None);

        // 1 + 2^-24 + 2^-60: just above halfway, rounding through f64 first
        // would land on the tie and round down to 1
        let above_half = digits("100000005960464477625798673798840354720596224069595336914062");
        assert_eq!(to_f32(&above_half, -59), Some(1.0000001));

        // exactly 1 + 2^-24 ties to even
        let half = digits("100000005960464477539062500");
        assert_eq!(to_f32(&half, -26), Some(1.0));

        assert_eq!(to_f32(&digits("14"), -46), Some(f32::from_bits(1)));
        assert_eq!(to_f32(&digits("7"), -46), Some(0.0));
        assert_eq!(to_f32(&digits("71"), -47), Some(f32::from_bits(1)));
    }
}
