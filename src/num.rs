//! String-to-number parsing for the string coercion branch.
//!
//! When an extractor meets a string node and the target is numeric, the
//! string is parsed here. The grammar is the C `strtol`-family one, not
//! strict JSON number syntax, preserved for behavioral compatibility:
//! optional leading whitespace, optional sign, then auto-base detection for
//! integers (`0x`/`0X` prefix is hexadecimal, a leading `0` is octal,
//! anything else decimal). Floats use the standard decimal/exponent grammar
//! plus the `inf`/`infinity`/`nan` words.
//!
//! Integers parse through a wide 128-bit representation before the
//! target-range check, so a magnitude the narrow type cannot hold is always
//! reported as out-of-range rather than silently clamped or confused with a
//! valid boundary value. The result is a plain [`Result`]; there is no
//! shared error signal, and parsing is freely callable from any thread.

use crate::error::{Error, Result};

/// Numeric types that can be parsed from a string node.
///
/// Sealed to the six bounded targets the extractors support.
pub(crate) trait FromNumericStr: Sized {
    fn from_numeric_str(s: &str) -> Result<Self>;
}

// Leading-whitespace set of C `isspace`, which the strtol family skips.
#[inline]
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Parses an integer literal with C-style auto-base detection into the wide
/// `i128` representation.
///
/// Consumes the whole input: a valid literal followed by anything else is
/// malformed, mirroring the `*endptr != '\0'` check of the original. The
/// base-detection artifacts carry over too: `"08"` consumes only the octal
/// `0` and fails on the trailing `8`, and `"0x"` without a hex digit fails
/// on the trailing `x`.
fn parse_wide_integer(s: &str) -> Result<i128> {
    let t = s.trim_start_matches(is_c_space);
    let (negative, t) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };

    let (radix, digits) = if (t.starts_with("0x") || t.starts_with("0X"))
        && t.as_bytes().get(2).is_some_and(u8::is_ascii_hexdigit)
    {
        (16, &t[2..])
    } else if t.starts_with('0') {
        (8, t)
    } else {
        (10, t)
    };

    let len = digits
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if len == 0 || len < digits.len() {
        return Err(Error::Malformed);
    }

    // Digits are pre-validated for the radix, so the only possible failure
    // left is magnitude overflow of the wide type itself.
    let magnitude = i128::from_str_radix(&digits[..len], radix).map_err(|_| Error::OutOfRange)?;
    Ok(if negative { -magnitude } else { magnitude })
}

macro_rules! impl_integer_from_str {
    ($($ty:ty),* $(,)?) => {$(
        impl FromNumericStr for $ty {
            fn from_numeric_str(s: &str) -> Result<Self> {
                let wide = parse_wide_integer(s)?;
                <$ty>::try_from(wide).map_err(|_| Error::OutOfRange)
            }
        }
    )*};
}

impl_integer_from_str!(i32, u32, i64, u64);

// After the sign, does the literal spell out an infinity word? Distinguishes
// an intentional `"inf"` from a finite-looking literal that overflowed.
fn spells_infinity(t: &str) -> bool {
    let t = match t.as_bytes().first() {
        Some(b'+') | Some(b'-') => &t[1..],
        _ => t,
    };
    t.as_bytes()
        .get(..3)
        .is_some_and(|head| head.eq_ignore_ascii_case(b"inf"))
}

macro_rules! impl_float_from_str {
    ($($ty:ty),* $(,)?) => {$(
        impl FromNumericStr for $ty {
            fn from_numeric_str(s: &str) -> Result<Self> {
                let t = s.trim_start_matches(is_c_space);
                let v: $ty = t.parse().map_err(|_| Error::Malformed)?;
                if v.is_infinite() && !spells_infinity(t) {
                    return Err(Error::OutOfRange);
                }
                Ok(v)
            }
        }
    )*};
}

impl_float_from_str!(f32, f64);
