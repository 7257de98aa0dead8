//! Number: an immutable, shared numeric value
//!
//! Repr: the four representations, Fixnum < BigInt < Ratio < Complex.
//! Every Number is canonical, see `canonical.rs` for the rules.
//!
//! ZERO, ONE, TEN and the two fixnum boundaries are singletons, anything
//! producing one of those values hands out the shared allocation.
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, LazyLock},
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{NumberError, NumberResult, canonical};

#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Repr {
    Fixnum(i64),
    BigInt(BigInt),
    Ratio(BigRational),
    // parts are never complex and the imaginary part is never zero
    Complex(Number, Number),
}

#[derive(Clone)]
pub struct Number(Arc<Repr>);

static ZERO: LazyLock<Number> = LazyLock::new(|| Number::alloc(Repr::Fixnum(0)));
static ONE: LazyLock<Number> = LazyLock::new(|| Number::alloc(Repr::Fixnum(1)));
static TEN: LazyLock<Number> = LazyLock::new(|| Number::alloc(Repr::Fixnum(10)));
static MAX_FIXNUM: LazyLock<Number> =
    LazyLock::new(|| Number::alloc(Repr::Fixnum(i64::MAX)));
static MIN_FIXNUM: LazyLock<Number> =
    LazyLock::new(|| Number::alloc(Repr::Fixnum(i64::MIN)));

impl Number {
    fn alloc(repr: Repr) -> Self {
        Self(Arc::new(repr))
    }

    /// Only the canonicalizer may build non-fixnum values.
    pub(crate) fn from_repr(repr: Repr) -> Self {
        match repr {
            Repr::Fixnum(value) => Self::from_i64(value),
            other => Self::alloc(other),
        }
    }

    pub fn zero() -> Self {
        ZERO.clone()
    }

    pub fn one() -> Self {
        ONE.clone()
    }

    pub fn ten() -> Self {
        TEN.clone()
    }

    pub fn max_fixnum() -> Self {
        MAX_FIXNUM.clone()
    }

    pub fn min_fixnum() -> Self {
        MIN_FIXNUM.clone()
    }

    pub fn from_i64(value: i64) -> Self {
        match value {
            0 => Self::zero(),
            1 => Self::one(),
            10 => Self::ten(),
            i64::MAX => Self::max_fixnum(),
            i64::MIN => Self::min_fixnum(),
            _ => Self::alloc(Repr::Fixnum(value)),
        }
    }

    pub fn from_bigint(value: BigInt) -> Self {
        canonical::from_bigint(value)
    }

    /// Checked rational constructor, `num / den` in lowest terms.
    pub fn ratio(num: BigInt, den: BigInt) -> NumberResult<Self> {
        if den.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(canonical::from_ratio(num, den))
    }

    pub fn complex(re: Number, im: Number) -> NumberResult<Self> {
        if re.is_complex() || im.is_complex() {
            return Err(NumberError::type_error("real part", "complex"));
        }
        Ok(canonical::from_complex(re, im))
    }

    pub fn repr(&self) -> &Repr {
        &self.0
    }

    /// Identity, not value equality.
    pub fn ptr_eq(&self, other: &Number) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn type_name(&self) -> &'static str {
        match self.repr() {
            Repr::Fixnum(_) => "fixnum",
            Repr::BigInt(_) => "bignum",
            Repr::Ratio(_) => "ratio",
            Repr::Complex(..) => "complex",
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self.repr(), Repr::Fixnum(0))
    }

    pub fn is_one(&self) -> bool {
        matches!(self.repr(), Repr::Fixnum(1))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.repr(), Repr::Fixnum(_) | Repr::BigInt(_))
    }

    pub fn is_real(&self) -> bool {
        !self.is_complex()
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.repr(), Repr::Complex(..))
    }

    pub fn to_i64(&self) -> Option<i64> {
        match self.repr() {
            Repr::Fixnum(value) => Some(*value),
            _ => None,
        }
    }

    pub fn to_bigint(&self) -> Option<BigInt> {
        match self.repr() {
            Repr::Fixnum(value) => Some(BigInt::from(*value)),
            Repr::BigInt(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn to_rational(&self) -> Option<BigRational> {
        match self.repr() {
            Repr::Fixnum(value) => Some(BigRational::from_integer((*value).into())),
            Repr::BigInt(value) => Some(BigRational::from_integer(value.clone())),
            Repr::Ratio(value) => Some(value.clone()),
            Repr::Complex(..) => None,
        }
    }

    pub(crate) fn expect_integer(&self) -> NumberResult<BigInt> {
        self.to_bigint()
            .ok_or_else(|| NumberError::type_error("integer", self.type_name()))
    }

    pub(crate) fn expect_real(&self) -> NumberResult<BigRational> {
        self.to_rational()
            .ok_or_else(|| NumberError::type_error("real", self.type_name()))
    }

    /// Approximation, may be infinite for huge magnitudes.
    pub fn to_f64(&self) -> Option<f64> {
        match self.repr() {
            Repr::Fixnum(value) => Some(*value as f64),
            Repr::BigInt(value) => value.to_f64(),
            Repr::Ratio(value) => Some(rational_to_f64(value)),
            Repr::Complex(..) => None,
        }
    }

    pub fn numerator(&self) -> Option<BigInt> {
        self.to_rational().map(|r| r.numer().clone())
    }

    pub fn denominator(&self) -> Option<BigInt> {
        self.to_rational().map(|r| r.denom().clone())
    }

    pub fn real_part(&self) -> Number {
        match self.repr() {
            Repr::Complex(re, _) => re.clone(),
            _ => self.clone(),
        }
    }

    pub fn imag_part(&self) -> Number {
        match self.repr() {
            Repr::Complex(_, im) => im.clone(),
            _ => Number::zero(),
        }
    }

    pub fn conjugate(&self) -> Number {
        match self.repr() {
            Repr::Complex(re, im) => canonical::from_complex(re.clone(), im.negate()),
            _ => self.clone(),
        }
    }

    pub fn negate(&self) -> Number {
        match self.repr() {
            Repr::Fixnum(value) => match value.checked_neg() {
                Some(neg) => Number::from_i64(neg),
                // only i64::MIN lands here
                None => canonical::from_bigint(-BigInt::from(*value)),
            },
            Repr::BigInt(value) => canonical::from_bigint(-value),
            Repr::Ratio(value) => canonical::from_rational(-value),
            Repr::Complex(re, im) => canonical::from_complex(re.negate(), im.negate()),
        }
    }

    /// Sign of a real number, `None` for complex values.
    pub fn signum(&self) -> Option<i8> {
        let sign = match self.repr() {
            Repr::Fixnum(value) => value.signum() as i8,
            Repr::BigInt(value) => sign_of(value.is_negative(), value.is_zero()),
            Repr::Ratio(value) => sign_of(value.is_negative(), value.is_zero()),
            Repr::Complex(..) => return None,
        };
        Some(sign)
    }
}

fn sign_of(negative: bool, zero: bool) -> i8 {
    if negative {
        -1
    } else if zero {
        0
    } else {
        1
    }
}

/// Rounds `n / d` to a float without overflowing either side first.
pub(crate) fn rational_to_f64(value: &BigRational) -> f64 {
    let (numer, denom) = (value.numer(), value.denom());
    if numer.is_zero() {
        return 0.0;
    }
    // keep ~64 significant bits in the quotient
    let shift = numer.bits() as i64 - denom.bits() as i64 - 64;
    let quotient = if shift >= 0 {
        numer.div_floor(&(denom << shift as usize))
    } else {
        (numer << (-shift) as usize).div_floor(denom)
    };
    let mantissa = quotient.to_f64().unwrap_or(f64::NAN);
    scale_by_power_of_two(mantissa, shift)
}

fn scale_by_power_of_two(mut value: f64, mut exponent: i64) -> f64 {
    while exponent > 1000 {
        value *= 2f64.powi(1000);
        exponent -= 1000;
    }
    while exponent < -1000 {
        value *= 2f64.powi(-1000);
        exponent += 1000;
    }
    value * 2f64.powi(exponent as i32)
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.repr(), f)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::from_i64(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        canonical::from_bigint(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        canonical::from_rational(value)
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}
