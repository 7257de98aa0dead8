use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::{Number, NumberError, NumberResult, canonical};

fn syntax(message: &'static str) -> NumberError {
    NumberError::Syntax { message }
}

fn digits(text: &str) -> NumberResult<BigInt> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(syntax("expected digits"));
    }
    text.parse().map_err(|_| syntax("expected digits"))
}

/// `12`, `-3/4` or `1.25`.
fn parse_real(text: &str) -> NumberResult<Number> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = if let Some((num, den)) = body.split_once('/') {
        Number::ratio(digits(num)?, digits(den)?)?
    } else if let Some((whole, frac)) = body.split_once('.') {
        if whole.is_empty() && frac.is_empty() {
            return Err(syntax("expected digits"));
        }
        let whole = if whole.is_empty() { BigInt::zero() } else { digits(whole)? };
        let frac_value = if frac.is_empty() { BigInt::zero() } else { digits(frac)? };
        let scale = BigInt::from(10).pow(frac.len() as u32);
        canonical::from_ratio(whole * &scale + frac_value, scale)
    } else {
        canonical::from_bigint(digits(body)?)
    };
    Ok(if negative { magnitude.negate() } else { magnitude })
}

/// Coefficient in front of `i`: empty, a bare sign, or a real.
fn parse_imaginary(text: &str) -> NumberResult<Number> {
    match text {
        "" | "+" => Ok(Number::one()),
        "-" => Ok(Number::from_i64(-1)),
        _ => parse_real(text),
    }
}

impl FromStr for Number {
    type Err = NumberError;

    /// Accepts integers, `n/d` ratios, decimals and `re+imi` complex forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(body) = s.strip_suffix('i') else {
            return parse_real(s);
        };
        // the last sign not in leading position starts the imaginary part
        let split = body
            .char_indices()
            .rev()
            .find(|&(at, c)| at > 0 && (c == '+' || c == '-'))
            .map(|(at, _)| at);
        let (re, im) = match split {
            Some(at) => (parse_real(&body[..at])?, parse_imaginary(&body[at..])?),
            None => (Number::zero(), parse_imaginary(body)?),
        };
        Ok(canonical::from_complex(re, im))
    }
}
