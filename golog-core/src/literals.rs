//! Builders for numeric terms from literal text.
//!
//! Integer syntax follows ISO 6.4.4: `0'c` character codes, `0b`, `0o` and
//! `0x` radix prefixes, otherwise decimal. Numeric character escapes
//! (`0'\x41\`, `0'\101\`) are closed by a backslash.
//!
//! Float literals are read exactly whenever possible: `new_float("0.1")`
//! is the rational 1/10, not the nearest binary double.

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::{GologResult, ParseError};
use crate::fatal::{self, FatalError};
use crate::numerics::Numeric;

/// Decimal exponents beyond this are left to the f64 reader.
const MAX_EXACT_EXPONENT: i64 = 10_000;

/// Parse the text of an integer token.
///
/// Empty text, or text with no digits in the radix its prefix claims, is a
/// reader bug and aborts.
pub fn new_int(text: &str) -> GologResult<Numeric> {
    if text.is_empty() {
        fatal::abort(FatalError::EmptyInteger);
    }

    let bytes = text.as_bytes();
    if bytes[0] == b'0' && text.len() >= 3 {
        match bytes[1] {
            b'\'' => return parse_escape(text, &text[2..]).map(new_code),
            b'b' => return parse_integer(text, &text[2..], 2),
            b'o' => return parse_integer(text, &text[2..], 8),
            b'x' => return parse_integer(text, &text[2..], 16),
            _ => {}
        }
    }
    parse_integer(text, text, 10)
}

/// An integer from a machine integer.
pub fn new_int64(i: i64) -> Numeric {
    Numeric::from(i)
}

/// An integer from an arbitrary-precision value.
pub fn new_big_int(value: BigInt) -> Numeric {
    Numeric::Integer(value)
}

/// An integer whose value is the code point of `c`.
pub fn new_code(c: char) -> Numeric {
    Numeric::Integer(BigInt::from(u32::from(c)))
}

/// Parse a float token, preferring an exact rational reading.
pub fn new_float(text: &str) -> GologResult<Numeric> {
    if let Some(r) = new_rational(text) {
        return Ok(r);
    }
    f64::from_str(text).map(Numeric::Float).map_err(|_| {
        ParseError::InvalidFloat {
            token: text.to_owned(),
        }
        .into()
    })
}

/// Any f64, including NaN and the infinities, as a float. Never fails.
pub fn new_float64(f: f64) -> GologResult<Numeric> {
    Ok(Numeric::Float(f))
}

/// Read `text` as an exact fraction.
///
/// Accepts `N/D` and `NrD` fractions and decimals with a point or an
/// exponent (`1.5`, `-2.5e-3`, `1e10`). Bare integers are not fractions.
pub fn new_rational(text: &str) -> Option<Numeric> {
    let (negative, body) = split_sign(text);
    let value = match body.find(['/', 'r']) {
        Some(at) => {
            let numer = decimal_digits(&body[..at])?;
            let denom = decimal_digits(&body[at + 1..])?;
            if denom.is_zero() {
                return None;
            }
            BigRational::new(numer, denom)
        }
        None => parse_decimal(body)?,
    };
    Some(Numeric::Rational(if negative { -value } else { value }))
}

/// Mantissa digits with an optional fraction and exponent; at least one of
/// the two must be present.
fn parse_decimal(body: &str) -> Option<BigRational> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => {
            let (negative, exp) = split_sign(&body[at + 1..]);
            if exp.is_empty() || !exp.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let exp = i64::from_str(exp).ok()?;
            (&body[..at], Some(if negative { -exp } else { exp }))
        }
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) if !frac_part.is_empty() => (int_part, frac_part),
        Some(_) => return None,
        None if exponent.is_some() => (mantissa, ""),
        None => return None,
    };
    if int_part.is_empty() {
        return None;
    }
    let digits = format!("{}{}", int_part, frac_part);
    let mantissa = decimal_digits(&digits)?;
    let scale = exponent
        .unwrap_or(0)
        .checked_sub(i64::try_from(frac_part.len()).ok()?)?;
    if scale.unsigned_abs() > MAX_EXACT_EXPONENT.unsigned_abs() {
        return None;
    }
    // Bounded above, so the cast is lossless.
    let power = BigInt::from(10u8).pow(scale.unsigned_abs() as u32);
    Some(if scale >= 0 {
        BigRational::from_integer(mantissa * power)
    } else {
        BigRational::new(mantissa, power)
    })
}

fn decimal_digits(text: &str) -> Option<BigInt> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(text.as_bytes(), 10)
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

/// Digits in `radix`, with an optional sign in base 10.
fn parse_integer(token: &str, text: &str, radix: u32) -> GologResult<Numeric> {
    let (negative, digits) = if radix == 10 {
        split_sign(text)
    } else {
        (false, text)
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        fatal::abort(FatalError::NoDigits {
            token: token.to_owned(),
            radix,
        });
    }
    let invalid = || ParseError::InvalidInteger {
        token: token.to_owned(),
    };
    if end != digits.len() {
        return Err(invalid().into());
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(invalid)?;
    Ok(Numeric::Integer(if negative { -magnitude } else { magnitude }))
}

/// The character denoted by `text`, the part of `token` after `0'`.
fn parse_escape(token: &str, text: &str) -> GologResult<char> {
    let invalid_escape = || -> crate::error::GologError {
        ParseError::InvalidEscape {
            token: token.to_owned(),
        }
        .into()
    };

    let mut chars = text.chars();
    match chars.next() {
        Some('\\') => {
            let rest = &text[1..];
            let mut escape = rest.chars();
            let c = match escape.next() {
                Some(c) => c,
                None => {
                    return Err(ParseError::InvalidCharacterConstant {
                        token: token.to_owned(),
                    }
                    .into())
                }
            };
            let named = match c {
                // meta escapes
                '\\' | '\'' | '"' | '`' => c,
                // control escapes
                'a' => '\x07',
                'b' => '\x08',
                'f' => '\x0c',
                'n' => '\n',
                'r' => '\r',
                's' => ' ',
                't' => '\t',
                'v' => '\x0b',
                'x' => return numeric_escape(&rest[1..], 16).ok_or_else(invalid_escape),
                '0'..='7' => return numeric_escape(rest, 8).ok_or_else(invalid_escape),
                _ => return Err(invalid_escape()),
            };
            if escape.next().is_some() {
                return Err(invalid_escape());
            }
            Ok(named)
        }
        // `0'''` is the quote character with the quote doubled.
        Some('\'') if matches!(chars.as_str(), "" | "'") => Ok('\''),
        Some(c) if chars.as_str().is_empty() => Ok(c),
        _ => Err(ParseError::InvalidCharacterConstant {
            token: token.to_owned(),
        }
        .into()),
    }
}

/// `digits\` in `radix`, as a character.
fn numeric_escape(body: &str, radix: u32) -> Option<char> {
    let digits = body.strip_suffix('\\')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
}
