//! The only way arithmetic results become Numbers.
//!
//! - integers that fit in an `i64` are fixnums, everything else a bignum
//! - ratios are in lowest terms with a positive denominator greater than one
//! - complex values never carry an exact zero imaginary part
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

use crate::{Number, Repr};

pub fn from_bigint(value: BigInt) -> Number {
    if value.is_zero() {
        return Number::zero();
    }
    match value.to_i64() {
        Some(fixnum) => Number::from_i64(fixnum),
        None => Number::from_repr(Repr::BigInt(value)),
    }
}

/// `den` must be non-zero.
pub fn from_ratio(num: BigInt, den: BigInt) -> Number {
    debug_assert!(!den.is_zero(), "from_ratio: zero denominator");
    from_rational(BigRational::new(num, den))
}

/// `value` must already be reduced, which `BigRational` guarantees unless it
/// was built with `new_raw`.
pub fn from_rational(value: BigRational) -> Number {
    if value.denom().is_one() {
        let (numer, _) = value.into_raw();
        return from_bigint(numer);
    }
    Number::from_repr(Repr::Ratio(value))
}

/// `re` and `im` must both be real.
pub fn from_complex(re: Number, im: Number) -> Number {
    debug_assert!(re.is_real() && im.is_real());
    if im.is_zero() {
        return re;
    }
    Number::from_repr(Repr::Complex(re, im))
}

/// Canonical complex value from a pair of rational accumulators.
pub fn from_rational_parts(re: BigRational, im: BigRational) -> Number {
    from_complex(from_rational(re), from_rational(im))
}
