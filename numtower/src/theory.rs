//! Number theory over the integral part of the tower.
//!
//! Every operand must be a fixnum or a bignum. Ratios and complex values are
//! type errors, indices and counts must fit a `u32`.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{Number, NumberError, NumberResult, canonical, engine};

pub const DEFAULT_PRIME_REPS: u32 = 25;
pub const MIN_PRIME_REPS: u32 = 15;
pub const MAX_PRIME_REPS: u32 = 50;

/// Repetitions `is_prime` spends before asking for a certificate.
const CERTIFY_REPS: u32 = 50;

fn bounded(value: &Number, message: &'static str) -> NumberResult<u32> {
    value
        .expect_integer()?
        .to_u32()
        .ok_or_else(|| NumberError::out_of_range(message))
}

pub fn gcd(values: &[Number]) -> NumberResult<Number> {
    let mut acc = BigInt::zero();
    for value in values {
        acc = acc.gcd(&value.expect_integer()?);
    }
    Ok(canonical::from_bigint(acc))
}

pub fn lcm(values: &[Number]) -> NumberResult<Number> {
    let mut acc = BigInt::from(1);
    for value in values {
        acc = acc.lcm(&value.expect_integer()?);
    }
    Ok(canonical::from_bigint(acc))
}

pub fn factorial(n: &Number) -> NumberResult<Number> {
    let n = bounded(n, "factorial of a negative or huge number")?;
    Ok(canonical::from_bigint(engine::factorial(n)))
}

pub fn multifactorial(n: &Number, m: &Number) -> NumberResult<Number> {
    let n = bounded(n, "multifactorial of a negative or huge number")?;
    let m = bounded(m, "multifactorial step out of range")?;
    if m == 0 {
        return Err(NumberError::out_of_range("multifactorial step must be positive"));
    }
    Ok(canonical::from_bigint(engine::multifactorial(n, m)))
}

pub fn primorial(n: &Number) -> NumberResult<Number> {
    let n = bounded(n, "primorial of a negative or huge number")?;
    Ok(canonical::from_bigint(engine::primorial(n)))
}

pub fn binomial(n: &Number, k: &Number) -> NumberResult<Number> {
    let n = n.expect_integer()?;
    let k = bounded(k, "binomial k out of range")?;
    Ok(canonical::from_bigint(engine::binomial(&n, k)))
}

pub fn fibonacci(n: &Number) -> NumberResult<Number> {
    let n = bounded(n, "fibonacci index out of range")?;
    Ok(canonical::from_bigint(engine::fibonacci(n.into())))
}

pub fn lucas(n: &Number) -> NumberResult<Number> {
    let n = bounded(n, "lucas index out of range")?;
    Ok(canonical::from_bigint(engine::lucas(n.into())))
}

/// Miller-Rabin. `reps` defaults to 25 and is clamped to `15..=50`.
pub fn is_probably_prime(n: &Number, reps: Option<&Number>) -> NumberResult<bool> {
    let n = n.expect_integer()?;
    let reps = match reps {
        None => DEFAULT_PRIME_REPS,
        Some(reps) => {
            let reps = reps.expect_integer()?;
            reps.clamp(MIN_PRIME_REPS.into(), MAX_PRIME_REPS.into())
                .to_u32()
                .unwrap_or(DEFAULT_PRIME_REPS)
        }
    };
    Ok(engine::is_probably_prime(&n, reps))
}

/// Probabilistic screen first, certificate only for survivors.
pub fn is_prime(n: &Number) -> NumberResult<bool> {
    let n = n.expect_integer()?;
    if n.is_negative() {
        return Ok(false);
    }
    Ok(engine::is_probably_prime(&n, CERTIFY_REPS) && engine::certify_prime(&n))
}

/// Smallest probable prime above `n`, never certified.
pub fn next_prime(n: &Number) -> NumberResult<Number> {
    let n = n.expect_integer()?;
    Ok(canonical::from_bigint(engine::next_prime(&n, DEFAULT_PRIME_REPS)))
}

pub fn is_perfect_power(n: &Number) -> NumberResult<bool> {
    Ok(engine::is_perfect_power(&n.expect_integer()?))
}

pub fn is_perfect_square(n: &Number) -> NumberResult<bool> {
    Ok(engine::is_perfect_square(&n.expect_integer()?))
}
