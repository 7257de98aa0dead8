use crate::{Number, NumberResult, Value, theory};

use super::{expect_arg, expect_numbers};

fn unary(args: &[Value], f: fn(&Number) -> NumberResult<Number>) -> NumberResult<Value> {
    Ok(f(expect_arg(args, 0)?)?.into())
}

fn predicate(args: &[Value], f: fn(&Number) -> NumberResult<bool>) -> NumberResult<Value> {
    Ok(f(expect_arg(args, 0)?)?.into())
}

pub fn gcd(args: &[Value]) -> NumberResult<Value> {
    Ok(theory::gcd(&expect_numbers(args)?)?.into())
}

pub fn lcm(args: &[Value]) -> NumberResult<Value> {
    Ok(theory::lcm(&expect_numbers(args)?)?.into())
}

pub fn factorial(args: &[Value]) -> NumberResult<Value> {
    unary(args, theory::factorial)
}

pub fn multifactorial(args: &[Value]) -> NumberResult<Value> {
    Ok(theory::multifactorial(expect_arg(args, 0)?, expect_arg(args, 1)?)?.into())
}

pub fn primorial(args: &[Value]) -> NumberResult<Value> {
    unary(args, theory::primorial)
}

pub fn binomial(args: &[Value]) -> NumberResult<Value> {
    Ok(theory::binomial(expect_arg(args, 0)?, expect_arg(args, 1)?)?.into())
}

pub fn fibonacci(args: &[Value]) -> NumberResult<Value> {
    unary(args, theory::fibonacci)
}

pub fn lucas(args: &[Value]) -> NumberResult<Value> {
    unary(args, theory::lucas)
}

/// `(n)` or `(n, reps)`.
pub fn is_probably_prime(args: &[Value]) -> NumberResult<Value> {
    let n = expect_arg(args, 0)?;
    let reps = match args.get(1) {
        Some(reps) => Some(reps.expect_number()?),
        None => None,
    };
    Ok(theory::is_probably_prime(n, reps)?.into())
}

pub fn is_prime(args: &[Value]) -> NumberResult<Value> {
    predicate(args, theory::is_prime)
}

pub fn next_prime(args: &[Value]) -> NumberResult<Value> {
    unary(args, theory::next_prime)
}

pub fn is_perfect_power(args: &[Value]) -> NumberResult<Value> {
    predicate(args, theory::is_perfect_power)
}

pub fn is_perfect_square(args: &[Value]) -> NumberResult<Value> {
    predicate(args, theory::is_perfect_square)
}
