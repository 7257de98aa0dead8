use log::debug;

use crate::{Number, NumberError, NumberResult, Value};

pub mod arith;
pub mod compare;
pub mod inexact;
pub mod state;
pub mod theory;

pub type PrimitiveFn = fn(&[Value]) -> NumberResult<Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(u8),
    Between(u8, u8),
    AtLeast(u8),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n as usize,
            Arity::Between(min, max) => (min as usize..=max as usize).contains(&count),
            Arity::AtLeast(min) => count >= min as usize,
        }
    }
}

#[derive(Clone, Copy)]
pub struct PrimitiveDesc {
    pub name: &'static str,
    pub arity: Arity,
    pub func: PrimitiveFn,
}

impl PrimitiveDesc {
    pub const fn new(name: &'static str, arity: Arity, func: PrimitiveFn) -> Self {
        Self { name, arity, func }
    }

    /// Runs the primitive, any failure comes back as `Value::Nan`.
    pub fn call(&self, args: &[Value]) -> Value {
        if !self.arity.accepts(args.len()) {
            debug!("{}: called with {} operands", self.name, args.len());
            return Value::Nan;
        }
        match (self.func)(args) {
            Ok(value) => value,
            Err(err) => {
                debug!("{}: {err}", self.name);
                Value::Nan
            }
        }
    }
}

pub fn default_primitives() -> Vec<PrimitiveDesc> {
    use Arity::*;
    vec![
        PrimitiveDesc::new("cat", AtLeast(0), arith::cat),
        PrimitiveDesc::new("minus", AtLeast(0), arith::minus),
        PrimitiveDesc::new("times", AtLeast(0), arith::times),
        PrimitiveDesc::new("ratio", AtLeast(0), arith::ratio),
        PrimitiveDesc::new("div", Exactly(2), arith::div),
        PrimitiveDesc::new("mod", Exactly(2), arith::modulo),
        PrimitiveDesc::new("sqrt", Exactly(1), inexact::sqrt),
        PrimitiveDesc::new("pow", Exactly(2), inexact::pow),
        PrimitiveDesc::new("sin", Exactly(1), inexact::sin),
        PrimitiveDesc::new("cos", Exactly(1), inexact::cos),
        PrimitiveDesc::new("tan", Exactly(1), inexact::tan),
        PrimitiveDesc::new("asin", Exactly(1), inexact::asin),
        PrimitiveDesc::new("acos", Exactly(1), inexact::acos),
        PrimitiveDesc::new("atan", Exactly(1), inexact::atan),
        PrimitiveDesc::new("exp", Exactly(1), inexact::exp),
        PrimitiveDesc::new("ln", Exactly(1), inexact::ln),
        PrimitiveDesc::new("log", Exactly(2), inexact::log),
        PrimitiveDesc::new("mod_pow", Exactly(3), inexact::mod_pow),
        PrimitiveDesc::new("equals", Exactly(2), compare::equals),
        PrimitiveDesc::new("less", Exactly(2), compare::less),
        PrimitiveDesc::new("is_negative", Exactly(1), compare::is_negative),
        PrimitiveDesc::new("length", Exactly(1), compare::length),
        PrimitiveDesc::new("gcd", AtLeast(0), theory::gcd),
        PrimitiveDesc::new("lcm", AtLeast(0), theory::lcm),
        PrimitiveDesc::new("factorial", Exactly(1), theory::factorial),
        PrimitiveDesc::new("multifactorial", Exactly(2), theory::multifactorial),
        PrimitiveDesc::new("primorial", Exactly(1), theory::primorial),
        PrimitiveDesc::new("binomial", Exactly(2), theory::binomial),
        PrimitiveDesc::new("fibonacci", Exactly(1), theory::fibonacci),
        PrimitiveDesc::new("lucas", Exactly(1), theory::lucas),
        PrimitiveDesc::new("is_probably_prime", Between(1, 2), theory::is_probably_prime),
        PrimitiveDesc::new("is_prime", Exactly(1), theory::is_prime),
        PrimitiveDesc::new("next_prime", Exactly(1), theory::next_prime),
        PrimitiveDesc::new("is_perfect_power", Exactly(1), theory::is_perfect_power),
        PrimitiveDesc::new("is_perfect_square", Exactly(1), theory::is_perfect_square),
        PrimitiveDesc::new("random_below", Exactly(1), state::random_below),
        PrimitiveDesc::new("get_seed", Exactly(0), state::get_seed),
        PrimitiveDesc::new("set_seed", Exactly(1), state::set_seed),
        PrimitiveDesc::new("precision", Exactly(0), state::precision),
        PrimitiveDesc::new("set_precision", Exactly(1), state::set_precision),
        PrimitiveDesc::new("size", Exactly(1), state::size),
    ]
}

pub fn primitive_index_by_name(prims: &[PrimitiveDesc], name: &str) -> Option<usize> {
    prims.iter().position(|p| p.name == name)
}

/// Looks `name` up in the default table and calls it.
pub fn call(name: &str, args: &[Value]) -> Value {
    let prims = default_primitives();
    match primitive_index_by_name(&prims, name) {
        Some(index) => prims[index].call(args),
        None => {
            debug!("unknown primitive {name}");
            Value::Nan
        }
    }
}

/// Every operand must be a number; `Nan` anywhere fails the whole call.
pub(crate) fn expect_numbers(args: &[Value]) -> NumberResult<Vec<Number>> {
    args.iter()
        .map(|arg| arg.expect_number().cloned())
        .collect()
}

pub(crate) fn expect_arg(args: &[Value], index: usize) -> NumberResult<&Number> {
    args.get(index)
        .ok_or(NumberError::out_of_range("missing operand"))?
        .expect_number()
}

#[cfg(test)]
mod tests {
    use super::{Arity, call, default_primitives, primitive_index_by_name};
    use crate::Value;

    fn int(value: i64) -> Value {
        Value::from(value)
    }

    #[test]
    fn names_are_unique() {
        let prims = default_primitives();
        for (index, prim) in prims.iter().enumerate() {
            assert_eq!(primitive_index_by_name(&prims, prim.name), Some(index));
        }
    }

    #[test]
    fn arity_is_checked() {
        assert!(Arity::Between(1, 2).accepts(2));
        assert!(!Arity::Between(1, 2).accepts(0));
        assert!(Arity::AtLeast(0).accepts(0));
        assert_eq!(call("div", &[int(1)]), Value::Nan);
        assert_eq!(call("sqrt", &[int(1), int(2)]), Value::Nan);
        assert_eq!(call("no_such_thing", &[]), Value::Nan);
    }

    #[test]
    fn errors_become_nan() {
        assert_eq!(call("ratio", &[int(1), int(0)]), Value::Nan);
        assert_eq!(call("exp", &[int(1)]), Value::Nan);
        assert_eq!(call("factorial", &[int(-1)]), Value::Nan);
        assert_eq!(call("cat", &[int(1), Value::from("one")]), Value::Nan);
    }

    #[test]
    fn nan_poisons_long_chains() {
        let mut args: Vec<Value> = (0..100).map(int).collect();
        assert_eq!(call("cat", &args), int(4950));
        args[57] = Value::Nan;
        assert_eq!(call("cat", &args), Value::Nan);
        assert_eq!(call("times", &args), Value::Nan);
        assert_eq!(call("gcd", &args), Value::Nan);
    }
}
