use std::cmp::Ordering;

use crate::{
    Number, Repr,
    arith::{norm_squared, parts},
    inexact::sqrt_rational,
};

pub fn equals(a: &Number, b: &Number) -> bool {
    a == b
}

/// Exact order of two numbers.
///
/// Reals compare by value. As soon as one side is complex both sides are
/// compared by `re^2 + im^2`, so distinct values of equal modulus are
/// neither less nor greater than each other.
pub fn compare(a: &Number, b: &Number) -> Ordering {
    match (a.repr(), b.repr()) {
        (Repr::Fixnum(x), Repr::Fixnum(y)) => x.cmp(y),
        (Repr::Complex(..), _) | (_, Repr::Complex(..)) => {
            norm_squared(a).cmp(&norm_squared(b))
        }
        _ => parts(a).0.cmp(&parts(b).0),
    }
}

pub fn less(a: &Number, b: &Number) -> bool {
    compare(a, b) == Ordering::Less
}

/// Only real values can be negative.
pub fn is_negative(value: &Number) -> bool {
    value.signum() == Some(-1)
}

/// Absolute value, `sqrt(re^2 + im^2)` for complex numbers.
pub fn length(value: &Number) -> Number {
    match value.repr() {
        Repr::Complex(re, im) => {
            if re.is_zero() {
                return length(im);
            }
            sqrt_rational(&norm_squared(value))
        }
        _ if is_negative(value) => value.negate(),
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use num_bigint::BigInt;

    use super::{compare, equals, is_negative, length, less};
    use crate::Number;

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
    fn reals_order_by_value() {
        assert!(less(&n(-3), &n(2)));
        assert!(less(&q(1, 3), &q(1, 2)));
        assert!(!less(&q(1, 2), &q(1, 3)));
        let big = Number::from_bigint(BigInt::from(i64::MAX) * 4u32);
        assert!(less(&n(5), &big));
        assert!(less(&big.negate(), &Number::min_fixnum()));
    }

    #[test]
    fn complex_values_order_by_magnitude() {
        // |3+4i|^2 = 25 > 4^2
        assert!(less(&n(4), &c(n(3), n(4))));
        assert!(less(&c(n(3), n(4)), &n(-6)));
        // equal modulus, different values
        let a = c(n(3), n(4));
        let b = c(n(4), n(3));
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert!(!equals(&a, &b));
    }

    #[test]
    fn complex_equality_is_pairwise() {
        assert!(equals(&c(q(1, 2), n(1)), &c(q(2, 4), n(1))));
        assert!(!equals(&c(n(1), n(1)), &c(n(1), n(2))));
    }

    #[test]
    fn sign_test() {
        assert!(is_negative(&n(-1)));
        assert!(is_negative(&q(-1, 2)));
        assert!(!is_negative(&n(0)));
        assert!(!is_negative(&c(n(-1), n(-1))));
    }

    #[test]
    fn length_of_reals() {
        assert_eq!(length(&n(-5)), n(5));
        assert_eq!(length(&q(-1, 2)), q(1, 2));
        let positive = n(7);
        assert!(length(&positive).ptr_eq(&positive));

        let min = length(&Number::min_fixnum());
        assert_eq!(min.type_name(), "bignum");
        assert_eq!(min.to_bigint(), Some(BigInt::from(1) << 63));
    }

    #[test]
    fn length_of_complex() {
        assert_eq!(length(&c(n(3), n(-4))), n(5));
        assert_eq!(length(&c(n(0), n(-2))), n(2));
        assert_eq!(length(&c(q(3, 5), q(4, 5))), n(1));
    }
}
