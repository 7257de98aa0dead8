//! Textual rendering.
//!
//! Integers print as plain decimal. Ratios print as a decimal expansion with
//! `RATIO_DIGITS` fraction digits, followed by `INEXACT_MARKER` when the
//! expansion does not terminate in that many digits.
use std::{
    fmt,
    io::{self, Write},
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::{Number, Repr, Value};

pub const RATIO_DIGITS: usize = 60;
pub const INEXACT_MARKER: char = '~';

pub fn render(value: &Number, w: &mut dyn Write) -> io::Result<()> {
    match value.repr() {
        Repr::Fixnum(n) => write!(w, "{n}"),
        Repr::BigInt(n) => write!(w, "{n}"),
        Repr::Ratio(r) => render_ratio(r, w),
        Repr::Complex(re, im) => render_complex(re, im, w),
    }
}

pub fn to_string(value: &Number) -> String {
    let mut out = Vec::new();
    // a Vec sink never fails
    let _ = render(value, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

fn render_ratio(value: &BigRational, w: &mut dyn Write) -> io::Result<()> {
    let scale = BigInt::from(10).pow(RATIO_DIGITS as u32);
    let scaled = value.numer().abs() * &scale;
    let denom = value.denom();

    let (digits, rem) = scaled.div_rem(denom);
    let exact = rem.is_zero();
    let digits = if exact {
        digits
    } else {
        // round half away from zero
        (scaled * 2u32 + denom).div_floor(&(denom * 2u32))
    };

    if value.is_negative() && !digits.is_zero() {
        w.write_all(b"-")?;
    }
    let (whole, frac) = digits.div_rem(&scale);
    let frac = format!("{:0>width$}", frac.to_string(), width = RATIO_DIGITS);
    if exact {
        write!(w, "{whole}.{}", frac.trim_end_matches('0'))
    } else {
        write!(w, "{whole}.{frac}{INEXACT_MARKER}")
    }
}

fn render_complex(re: &Number, im: &Number, w: &mut dyn Write) -> io::Result<()> {
    let show_re = !re.is_zero();
    if show_re {
        render(re, w)?;
    }

    let mut im_text = Vec::new();
    match im.to_i64() {
        Some(1) => {}
        Some(-1) => im_text.push(b'-'),
        _ => render(im, &mut im_text)?,
    }
    // a bare imaginary part gets no leading '+'
    if show_re && im_text.first() != Some(&b'-') {
        w.write_all(b"+")?;
    }
    w.write_all(&im_text)?;
    w.write_all(b"i")
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_string(self))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => fmt::Display::fmt(number, f),
            Value::Nan => f.write_str("nan"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Text(text) => f.write_str(text),
            Value::Date(date) => write!(f, "{date:?}"),
            Value::Pixel(pixel) => write!(f, "{pixel:?}"),
        }
    }
}
