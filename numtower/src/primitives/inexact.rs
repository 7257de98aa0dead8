use crate::{Number, NumberResult, Value, inexact};

use super::expect_arg;

fn unary(args: &[Value], f: fn(&Number) -> NumberResult<Number>) -> NumberResult<Value> {
    Ok(f(expect_arg(args, 0)?)?.into())
}

pub fn sqrt(args: &[Value]) -> NumberResult<Value> {
    Ok(inexact::sqrt(expect_arg(args, 0)?).into())
}

pub fn pow(args: &[Value]) -> NumberResult<Value> {
    Ok(inexact::pow(expect_arg(args, 0)?, expect_arg(args, 1)?)?.into())
}

pub fn sin(args: &[Value]) -> NumberResult<Value> {
    unary(args, inexact::sin)
}

pub fn cos(args: &[Value]) -> NumberResult<Value> {
    unary(args, inexact::cos)
}

pub fn tan(args: &[Value]) -> NumberResult<Value> {
    unary(args, inexact::tan)
}

pub fn asin(args: &[Value]) -> NumberResult<Value> {
    unary(args, inexact::asin)
}

pub fn acos(args: &[Value]) -> NumberResult<Value> {
    unary(args, inexact::acos)
}

pub fn atan(args: &[Value]) -> NumberResult<Value> {
    unary(args, inexact::atan)
}

pub fn exp(args: &[Value]) -> NumberResult<Value> {
    unary(args, inexact::exp)
}

pub fn ln(args: &[Value]) -> NumberResult<Value> {
    unary(args, inexact::ln)
}

pub fn log(args: &[Value]) -> NumberResult<Value> {
    Ok(inexact::log(expect_arg(args, 0)?, expect_arg(args, 1)?)?.into())
}

pub fn mod_pow(args: &[Value]) -> NumberResult<Value> {
    let base = expect_arg(args, 0)?;
    let exponent = expect_arg(args, 1)?;
    let modulus = expect_arg(args, 2)?;
    Ok(inexact::mod_pow(base, exponent, modulus)?.into())
}
