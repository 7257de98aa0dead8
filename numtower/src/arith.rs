use std::ops::{Add, Mul, Neg, Sub};

use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    Number, NumberError, NumberResult, Repr,
    canonical::{from_bigint, from_rational_parts},
};

/// Exact rational accumulator for the real and imaginary parts.
#[derive(Debug, Clone)]
pub(crate) struct Accumulator {
    re: BigRational,
    im: BigRational,
}

impl Accumulator {
    pub(crate) fn zero() -> Self {
        Self {
            re: BigRational::zero(),
            im: BigRational::zero(),
        }
    }

    pub(crate) fn lift(value: &Number) -> Self {
        let (re, im) = parts(value);
        Self { re, im }
    }

    pub(crate) fn add(&mut self, value: &Number) {
        match value.repr() {
            Repr::Complex(re, im) => {
                self.re += rational(re);
                self.im += rational(im);
            }
            _ => self.re += rational(value),
        }
    }

    pub(crate) fn sub(&mut self, value: &Number) {
        match value.repr() {
            Repr::Complex(re, im) => {
                self.re -= rational(re);
                self.im -= rational(im);
            }
            _ => self.re -= rational(value),
        }
    }

    // (a+bi)(c+di) = (ac-bd) + (ad+bc)i
    pub(crate) fn mul(&mut self, value: &Number) {
        match value.repr() {
            Repr::Complex(re, im) => {
                let (c, d) = (rational(re), rational(im));
                let re = &self.re * &c - &self.im * &d;
                let im = &self.re * &d + &self.im * &c;
                self.re = re;
                self.im = im;
            }
            _ => {
                let c = rational(value);
                self.re *= &c;
                if !self.im.is_zero() {
                    self.im *= &c;
                }
            }
        }
    }

    // 1/(c+di) = (c-di)/(c^2+d^2)
    pub(crate) fn div(&mut self, value: &Number) -> NumberResult<()> {
        if value.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        let (c, d) = parts(value);
        if d.is_zero() {
            self.re /= &c;
            if !self.im.is_zero() {
                self.im /= &c;
            }
            return Ok(());
        }
        if c.is_zero() {
            // (a+bi)/(di) = b/d - (a/d)i
            let re = &self.im / &d;
            let im = -(&self.re / &d);
            self.re = re;
            self.im = im;
            return Ok(());
        }
        let norm = &c * &c + &d * &d;
        let re = (&self.re * &c + &self.im * &d) / &norm;
        let im = (&self.im * &c - &self.re * &d) / &norm;
        self.re = re;
        self.im = im;
        Ok(())
    }

    pub(crate) fn finish(self) -> Number {
        from_rational_parts(self.re, self.im)
    }
}

fn rational(value: &Number) -> BigRational {
    match value.repr() {
        Repr::Fixnum(v) => BigRational::from_integer((*v).into()),
        Repr::BigInt(v) => BigRational::from_integer(v.clone()),
        Repr::Ratio(v) => v.clone(),
        Repr::Complex(..) => unreachable!("complex part inside a complex value"),
    }
}

/// Real and imaginary parts as exact rationals.
pub(crate) fn parts(value: &Number) -> (BigRational, BigRational) {
    match value.repr() {
        Repr::Complex(re, im) => (rational(re), rational(im)),
        _ => (rational(value), BigRational::zero()),
    }
}

/// n-ary addition, the empty sum is zero.
pub fn sum(values: &[Number]) -> Number {
    if let [a, b] = values {
        if let (Repr::Fixnum(x), Repr::Fixnum(y)) = (a.repr(), b.repr()) {
            if let Some(res) = x.checked_add(*y) {
                return Number::from_i64(res);
            }
        }
    }
    let mut acc = Accumulator::zero();
    for value in values {
        acc.add(value);
    }
    acc.finish()
}

/// First operand minus all the others, a single operand is negated.
pub fn difference(values: &[Number]) -> Number {
    match values {
        [] => Number::zero(),
        [single] => single.negate(),
        [first, rest @ ..] => {
            let mut acc = Accumulator::lift(first);
            for value in rest {
                acc.sub(value);
            }
            acc.finish()
        }
    }
}

/// n-ary multiplication, the empty product is one.
pub fn product(values: &[Number]) -> Number {
    if let [a, b] = values {
        if let (Repr::Fixnum(x), Repr::Fixnum(y)) = (a.repr(), b.repr()) {
            if let Some(res) = x.checked_mul(*y) {
                return Number::from_i64(res);
            }
        }
    }
    let mut values = values.iter();
    let Some(first) = values.next() else {
        return Number::one();
    };
    let mut acc = Accumulator::lift(first);
    for value in values {
        acc.mul(value);
    }
    acc.finish()
}

/// First operand divided by each of the others, a single operand is inverted.
pub fn quotient(values: &[Number]) -> NumberResult<Number> {
    match values {
        [] => Err(NumberError::out_of_range("ratio needs at least one operand")),
        [single] => reciprocal(single),
        [first, rest @ ..] => {
            let mut acc = Accumulator::lift(first);
            for value in rest {
                acc.div(value)?;
            }
            Ok(acc.finish())
        }
    }
}

pub fn reciprocal(value: &Number) -> NumberResult<Number> {
    let mut acc = Accumulator::lift(&Number::one());
    acc.div(value)?;
    Ok(acc.finish())
}

/// Flooring division over the reals.
pub fn div(a: &Number, b: &Number) -> NumberResult<Number> {
    if let (Repr::Fixnum(x), Repr::Fixnum(y)) = (a.repr(), b.repr()) {
        if *y == 0 {
            return Err(NumberError::DivisionByZero);
        }
        // i64::MIN / -1 is the only overflow and falls through
        if !(*x == i64::MIN && *y == -1) {
            return Ok(Number::from_i64(x.div_floor(y)));
        }
    }
    let x = a.expect_real()?;
    let y = b.expect_real()?;
    if y.is_zero() {
        return Err(NumberError::DivisionByZero);
    }
    Ok(from_bigint((x / y).floor().to_integer()))
}

/// `a - div(a, b) * b`, takes the sign of `b`.
pub fn modulo(a: &Number, b: &Number) -> NumberResult<Number> {
    if let (Repr::Fixnum(x), Repr::Fixnum(y)) = (a.repr(), b.repr()) {
        if *y == 0 {
            return Err(NumberError::DivisionByZero);
        }
        if *y == -1 {
            return Ok(Number::zero());
        }
        return Ok(Number::from_i64(x.mod_floor(y)));
    }
    let q = div(a, b)?;
    Ok(difference(&[a.clone(), product(&[q, b.clone()])]))
}

/// `re^2 + im^2`, exact.
pub(crate) fn norm_squared(value: &Number) -> BigRational {
    let (re, im) = parts(value);
    &re * &re + &im * &im
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        sum(&[self.clone(), rhs.clone()])
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        difference(&[self.clone(), rhs.clone()])
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        product(&[self.clone(), rhs.clone()])
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.negate()
    }
}
