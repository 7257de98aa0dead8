//! Roots, powers and transcendental functions.
//!
//! Exact whenever the result is rational, otherwise rounded to the nearest
//! rational at the current precision. Such results carry no marker, the
//! renderer finds out on its own that the expansion does not terminate.
use std::{
    f64::consts::LN_2,
    sync::atomic::{AtomicU32, Ordering},
};

use log::trace;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    Number, NumberError, NumberResult, Repr,
    arith::{norm_squared, parts, product, reciprocal},
    canonical::{from_complex, from_ratio, from_rational},
    number::rational_to_f64,
};

pub const DEFAULT_PRECISION: u32 = 128;

static PRECISION: AtomicU32 = AtomicU32::new(DEFAULT_PRECISION);

/// Bits after the binary point kept by inexact results.
pub fn precision() -> u32 {
    PRECISION.load(Ordering::Relaxed)
}

pub fn set_precision(bits: u32) {
    let bits = bits.max(1);
    trace!("precision set to {bits} bits");
    PRECISION.store(bits, Ordering::Relaxed);
}

/// Square root of a non-negative rational.
pub(crate) fn sqrt_rational(value: &BigRational) -> Number {
    sqrt_rational_at(value, precision())
}

fn sqrt_rational_at(value: &BigRational, bits: u32) -> Number {
    debug_assert!(!value.is_negative());
    let (numer, denom) = (value.numer(), value.denom());
    let (root_n, root_d) = (numer.sqrt(), denom.sqrt());
    if &root_n * &root_n == *numer && &root_d * &root_d == *denom {
        return from_ratio(root_n, root_d);
    }

    // sqrt(n/d) = sqrt(n*d) / d, scaled by 2^bits
    let scaled: BigInt = (numer * denom) << (2 * bits as usize);
    let mut root = scaled.sqrt();
    // round to nearest: sqrt(s) >= r + 1/2  <=>  s > r^2 + r
    if scaled > &root * &root + &root {
        root += 1u32;
    }
    from_ratio(root, denom << bits as usize)
}

pub fn sqrt(value: &Number) -> Number {
    sqrt_at(value, precision())
}

fn sqrt_at(value: &Number, bits: u32) -> Number {
    match value.repr() {
        Repr::Complex(_, im) => {
            let (re, _) = parts(value);
            let (modulus, _) = parts(&sqrt_rational_at(&norm_squared(value), bits));
            let two = BigRational::from_integer(2.into());
            // the rounded modulus can land a hair below |re| on either side
            let half_sum = ((&modulus + &re) / &two).max(BigRational::zero());
            let real = sqrt_rational_at(&half_sum, bits);
            let rest = ((&modulus - &re) / &two).max(BigRational::zero());
            let imag = sqrt_rational_at(&rest, bits);
            let imag = if im.signum() == Some(-1) {
                imag.negate()
            } else {
                imag
            };
            from_complex(real, imag)
        }
        _ => {
            let (re, _) = parts(value);
            if re.is_negative() {
                from_complex(Number::zero(), sqrt_rational_at(&-re, bits))
            } else {
                sqrt_rational_at(&re, bits)
            }
        }
    }
}

/// `base ^ exponent`.
///
/// Integer exponents are exact, `1/2` and `-1/2` go through `sqrt`, every
/// other exponent is evaluated in floating point.
pub fn pow(base: &Number, exponent: &Number) -> NumberResult<Number> {
    match exponent.repr() {
        Repr::Fixnum(_) | Repr::BigInt(_) => integer_pow(base, &exponent.expect_integer()?),
        Repr::Ratio(r) if is_half(r) => Ok(sqrt(base)),
        Repr::Ratio(r) if is_half(&-r) => reciprocal(&sqrt(base)),
        _ => float_pow(base, exponent),
    }
}

fn is_half(value: &BigRational) -> bool {
    value.numer().is_one() && *value.denom() == BigInt::from(2)
}

fn integer_pow(base: &Number, exponent: &BigInt) -> NumberResult<Number> {
    if exponent.is_negative() {
        let inverse = reciprocal(base)?;
        return integer_pow(&inverse, &-exponent);
    }
    if exponent.is_zero() {
        return Ok(Number::one());
    }
    if base.is_zero() || base.is_one() {
        return Ok(base.clone());
    }
    if base.to_i64() == Some(-1) {
        return Ok(if exponent.bit(0) {
            base.clone()
        } else {
            Number::one()
        });
    }
    let Some(mut remaining) = exponent.to_u64() else {
        return Err(NumberError::out_of_range("exponent too large"));
    };

    let mut result = Number::one();
    let mut square = base.clone();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = product(&[result, square.clone()]);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = product(&[square.clone(), square]);
        }
    }
    Ok(result)
}

fn float_pow(base: &Number, exponent: &Number) -> NumberResult<Number> {
    let (c, d) = float_parts(exponent);
    if base.is_zero() {
        return if c > 0.0 {
            Ok(Number::zero())
        } else {
            Err(NumberError::DivisionByZero)
        };
    }
    let (a, b) = float_parts(base);
    if b == 0.0 && d == 0.0 && a > 0.0 {
        return from_f64(a.powf(c));
    }

    // z^w = exp(w * ln z)
    let ln_r = a.hypot(b).ln();
    let theta = b.atan2(a);
    let x = c * ln_r - d * theta;
    let y = d * ln_r + c * theta;
    let magnitude = x.exp();
    let re = from_f64(magnitude * y.cos())?;
    let im = from_f64(magnitude * y.sin())?;
    Ok(from_complex(re, im))
}

fn float_parts(value: &Number) -> (f64, f64) {
    let (re, im) = parts(value);
    (rational_to_f64(&re), rational_to_f64(&im))
}

/// Exact rational value of a finite float.
pub fn from_f64(value: f64) -> NumberResult<Number> {
    BigRational::from_float(value)
        .map(from_rational)
        .ok_or(NumberError::out_of_range("result is not a finite real"))
}

fn real_function(value: &Number, f: fn(f64) -> f64) -> NumberResult<Number> {
    let x = value.expect_real()?;
    from_f64(f(rational_to_f64(&x)))
}

pub fn sin(value: &Number) -> NumberResult<Number> {
    real_function(value, f64::sin)
}

pub fn cos(value: &Number) -> NumberResult<Number> {
    real_function(value, f64::cos)
}

pub fn asin(value: &Number) -> NumberResult<Number> {
    real_function(value, f64::asin)
}

pub fn acos(value: &Number) -> NumberResult<Number> {
    real_function(value, f64::acos)
}

pub fn atan(value: &Number) -> NumberResult<Number> {
    real_function(value, f64::atan)
}

pub fn tan(_value: &Number) -> NumberResult<Number> {
    Err(NumberError::Unimplemented { message: "tan" })
}

pub fn exp(_value: &Number) -> NumberResult<Number> {
    Err(NumberError::Unimplemented { message: "exp" })
}

pub fn ln(_value: &Number) -> NumberResult<Number> {
    Err(NumberError::Unimplemented { message: "ln" })
}

pub fn mod_pow(_base: &Number, _exponent: &Number, _modulus: &Number) -> NumberResult<Number> {
    Err(NumberError::Unimplemented { message: "modular exponentiation" })
}

/// Logarithm of `value` to `base`, both positive reals.
pub fn log(base: &Number, value: &Number) -> NumberResult<Number> {
    let base = positive_real(base)?;
    let value = positive_real(value)?;
    let denom = ln_rational(&base);
    if denom == 0.0 {
        return Err(NumberError::DivisionByZero);
    }
    from_f64(ln_rational(&value) / denom)
}

fn positive_real(value: &Number) -> NumberResult<BigRational> {
    let real = value.expect_real()?;
    if !real.is_positive() {
        return Err(NumberError::out_of_range("logarithm of a non-positive number"));
    }
    Ok(real)
}

fn ln_rational(value: &BigRational) -> f64 {
    ln_bigint(value.numer()) - ln_bigint(value.denom())
}

fn ln_bigint(value: &BigInt) -> f64 {
    let bits = value.bits();
    if bits <= 1000 {
        return value.to_f64().unwrap_or(f64::NAN).ln();
    }
    let shift = bits - 64;
    let top = (value >> shift as usize).to_f64().unwrap_or(f64::NAN);
    top.ln() + shift as f64 * LN_2
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use num_rational::BigRational;
    use num_traits::Signed;

    use super::{acos, asin, exp, ln, log, mod_pow, pow, sin, sqrt, sqrt_at, tan};
    use crate::{Number, NumberError, arith::product, compare::length};

    fn n(value: i64) -> Number {
        Number::from_i64(value)
    }

    fn q(num: i64, den: i64) -> Number {
        Number::ratio(num.into(), den.into()).unwrap()
    }

    fn c(re: Number, im: Number) -> Number {
        Number::complex(re, im).unwrap()
    }

    #[test]
    fn perfect_squares_are_exact() {
        assert_eq!(sqrt(&n(49)), n(7));
        assert_eq!(sqrt(&q(9, 16)), q(3, 4));
        assert!(sqrt(&n(0)).ptr_eq(&Number::zero()));
        let big = Number::from_bigint(BigInt::from(3) << 200usize);
        let squared = product(&[big.clone(), big.clone()]);
        assert_eq!(sqrt(&squared), big);
    }

    #[test]
    fn negative_roots_are_imaginary() {
        assert_eq!(sqrt(&n(-4)), c(n(0), n(2)));
        assert_eq!(sqrt(&q(-1, 4)), c(n(0), q(1, 2)));
    }

    #[test]
    fn square_of_square_is_length() {
        for value in [-12, -1, 0, 3, 1_000_003] {
            let v = n(value);
            assert_eq!(sqrt(&product(&[v.clone(), v.clone()])), length(&v));
        }
    }

    #[test]
    fn irrational_roots_are_close() {
        let root = sqrt(&n(2));
        assert_eq!(root.type_name(), "ratio");
        let value = root.to_f64().unwrap();
        assert!((value - std::f64::consts::SQRT_2).abs() < 1e-15);
        // squaring lands within 2^-120 of two
        let squared = product(&[root.clone(), root]).to_rational().unwrap();
        let error = (squared - BigRational::from_integer(2.into())).abs();
        assert!(error < BigRational::new(1.into(), BigInt::from(1) << 120usize));
    }

    #[test]
    fn complex_roots() {
        assert_eq!(sqrt(&c(n(3), n(4))), c(n(2), n(1)));
        assert_eq!(sqrt(&c(n(3), n(-4))), c(n(2), n(-1)));
        assert_eq!(sqrt(&c(n(-3), n(4))), c(n(1), n(2)));
    }

    fn assert_principal_root(root: &Number) {
        assert!(root.is_complex(), "{root}");
        assert_ne!(root.real_part().signum(), Some(-1));
        assert_eq!(root.imag_part().signum(), Some(1));
    }

    #[test]
    fn rounded_modulus_below_negative_real_part() {
        // -(1 + 25 * 2^130) / 5 + 7/5 i
        let numer = -(BigInt::from(1) + (BigInt::from(25) << 130usize));
        let re = Number::ratio(numer, 5.into()).unwrap();
        let z = c(re, q(7, 5));
        assert_principal_root(&sqrt(&z));
        assert_principal_root(&pow(&z, &q(1, 2)).unwrap());

        let coarse = c(q(-251, 5), q(7, 5));
        assert_principal_root(&sqrt_at(&coarse, 1));
        assert_principal_root(&sqrt_at(&z, 1));
    }

    #[test]
    fn integer_powers_are_exact() {
        assert_eq!(pow(&n(2), &n(10)).unwrap(), n(1024));
        assert_eq!(pow(&n(2), &n(-2)).unwrap(), q(1, 4));
        assert_eq!(pow(&q(2, 3), &n(3)).unwrap(), q(8, 27));
        assert_eq!(pow(&n(-1), &Number::from_bigint(BigInt::from(1) << 80usize)).unwrap(), n(1));
        assert_eq!(pow(&c(n(0), n(1)), &n(2)).unwrap(), n(-1));
        assert!(pow(&n(7), &n(0)).unwrap().ptr_eq(&Number::one()));
        assert_eq!(pow(&n(0), &n(-1)), Err(NumberError::DivisionByZero));

        let big = pow(&n(2), &n(64)).unwrap();
        assert_eq!(big.to_bigint(), Some(BigInt::from(1) << 64usize));
    }

    #[test]
    fn half_exponents_use_sqrt() {
        assert_eq!(pow(&n(9), &q(1, 2)).unwrap(), n(3));
        assert_eq!(pow(&n(9), &q(-1, 2)).unwrap(), q(1, 3));
        assert_eq!(pow(&n(-9), &q(1, 2)).unwrap(), c(n(0), n(3)));
    }

    #[test]
    fn other_exponents_are_floating() {
        let res = pow(&n(8), &q(1, 3)).unwrap().to_f64().unwrap();
        assert!((res - 2.0).abs() < 1e-12);
        let res = pow(&n(-8), &q(1, 3)).unwrap();
        assert!(res.is_complex());
        assert!(pow(&n(0), &q(1, 3)).unwrap().is_zero());
    }

    #[test]
    fn transcendental_functions() {
        assert!(sin(&n(0)).unwrap().is_zero());
        assert!((sin(&q(1, 2)).unwrap().to_f64().unwrap() - 0.5f64.sin()).abs() < 1e-15);
        assert!(asin(&n(2)).is_err());
        assert!(acos(&c(n(0), n(1))).is_err());
        let res = log(&n(2), &n(1024)).unwrap().to_f64().unwrap();
        assert!((res - 10.0).abs() < 1e-12);
        assert!(log(&n(1), &n(5)).is_err());
        assert!(log(&n(2), &n(-5)).is_err());
    }

    #[test]
    fn stubs_are_unimplemented() {
        assert!(matches!(tan(&n(1)), Err(NumberError::Unimplemented { .. })));
        assert!(matches!(exp(&n(1)), Err(NumberError::Unimplemented { .. })));
        assert!(matches!(ln(&n(1)), Err(NumberError::Unimplemented { .. })));
        assert!(matches!(
            mod_pow(&n(2), &n(3), &n(5)),
            Err(NumberError::Unimplemented { .. })
        ));
    }
}
