//! Lexing of float literals into an exact decimal representation.

/// Significant digits kept before the sticky digit takes over.
///
/// Halfway points between adjacent doubles need at most 767 significant
/// digits, so keeping 768 and folding the remainder into one non-zero digit
/// never changes which side of a halfway point the value lands on.
pub(crate) const MAX_DIGITS: usize = 768;

/// Exponents are saturated here while lexing; anything larger already
/// overflows or underflows every double.
const EXP_LIMIT: i64 = 100_000;

/// The result of lexing a float literal.
#[derive(Debug, PartialEq)]
pub(crate) enum Lexed {
    Nan,
    Infinity { negative: bool },
    Number(Decimal),
}

/// A decimal value `0.d1d2...dn × 10^point`.
///
/// `digits` holds digit values (0-9) with no leading zeros and, unless the
/// literal was truncated, no trailing zeros. An empty digit list is zero.
#[derive(Debug, PartialEq)]
pub(crate) struct Decimal {
    pub negative: bool,
    pub digits: Vec<u8>,
    pub point: i64,
}

impl Decimal {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Decimal exponent of the integer mantissa formed by `digits`.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.point - self.digits.len() as i64
    }
}

/// Lexes a complete float literal, returning `None` on any syntax error.
pub(crate) fn lex(input: &str) -> Option<Lexed> {
    let bytes = input.as_bytes();
    if let Some((lexed, consumed)) = special(bytes) {
        return (consumed == bytes.len()).then_some(lexed);
    }
    lex_decimal(bytes).map(Lexed::Number)
}

/// Recognizes `nan`, `inf` and `infinity` (any case, sign allowed on the
/// infinities only) at the start of `bytes`.
fn special(bytes: &[u8]) -> Option<(Lexed, usize)> {
    let (negative, rest, sign_len) = match bytes.first() {
        Some(b'+') => (false, &bytes[1..], 1),
        Some(b'-') => (true, &bytes[1..], 1),
        _ => (false, bytes, 0),
    };

    match rest.first() {
        Some(b'i' | b'I') => {
            let mut n = common_prefix_ignore_case(rest, b"infinity");
            // "infin" and friends consume only "inf" and then fail on the rest
            if 3 < n && n < 8 {
                n = 3;
            }
            (n == 3 || n == 8).then_some((Lexed::Infinity { negative }, sign_len + n))
        }
        Some(b'n' | b'N') if sign_len == 0 => {
            (common_prefix_ignore_case(rest, b"nan") == 3).then_some((Lexed::Nan, 3))
        }
        _ => None,
    }
}

fn common_prefix_ignore_case(s: &[u8], prefix: &[u8]) -> usize {
    s.iter()
        .zip(prefix)
        .take_while(|(a, b)| a.eq_ignore_ascii_case(b))
        .count()
}

fn lex_decimal(bytes: &[u8]) -> Option<Decimal> {
    let mut i = 0;
    let negative = match bytes.first() {
        Some(b'+') => {
            i = 1;
            false
        }
        Some(b'-') => {
            i = 1;
            true
        }
        _ => false,
    };

    let mut digits = Vec::new();
    let mut point: i64 = 0;
    let mut saw_dot = false;
    let mut saw_digits = false;
    let mut truncated = false;

    while let Some(&b) = bytes.get(i) {
        match b {
            b'.' if !saw_dot => saw_dot = true,
            b'0'..=b'9' => {
                saw_digits = true;
                if b == b'0' && digits.is_empty() {
                    if saw_dot {
                        point -= 1;
                    }
                } else if digits.len() < MAX_DIGITS {
                    digits.push(b - b'0');
                    if !saw_dot {
                        point += 1;
                    }
                } else {
                    truncated |= b != b'0';
                    if !saw_dot {
                        point += 1;
                    }
                }
            }
            _ => break,
        }
        i += 1;
    }

    if !saw_digits {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        let exp_negative = match bytes.get(i) {
            Some(b'+') => {
                i += 1;
                false
            }
            Some(b'-') => {
                i += 1;
                true
            }
            _ => false,
        };

        let start = i;
        let mut exp: i64 = 0;
        while let Some(&b) = bytes.get(i) {
            if !b.is_ascii_digit() {
                break;
            }
            if exp < EXP_LIMIT {
                exp = exp * 10 + i64::from(b - b'0');
            }
            i += 1;
        }
        if i == start {
            return None;
        }
        point += if exp_negative { -exp } else { exp };
    }

    if i != bytes.len() {
        return None;
    }

    if truncated {
        digits.push(1);
    } else {
        while digits.last() == Some(&0) {
            digits.pop();
        }
    }

    Some(Decimal {
        negative,
        digits,
        point,
    })
}
