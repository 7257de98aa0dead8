//! Process-wide settings: the shared generator and the working precision.
use log::debug;
use num_traits::ToPrimitive;

use crate::{Number, NumberError, NumberResult, Value, codec, inexact, random};

use super::expect_arg;

pub fn random_below(args: &[Value]) -> NumberResult<Value> {
    Ok(random::random_below(expect_arg(args, 0)?)?.into())
}

pub fn get_seed(_args: &[Value]) -> NumberResult<Value> {
    Ok(random::get_seed().into())
}

/// Reports success as a boolean instead of failing with `Nan`.
pub fn set_seed(args: &[Value]) -> NumberResult<Value> {
    let result = expect_arg(args, 0).and_then(random::set_seed);
    if let Err(err) = &result {
        debug!("set_seed: {err}");
    }
    Ok(result.is_ok().into())
}

pub fn precision(_args: &[Value]) -> NumberResult<Value> {
    Ok(Number::from_i64(inexact::precision().into()).into())
}

/// Returns the precision now in effect, at least one bit.
pub fn set_precision(args: &[Value]) -> NumberResult<Value> {
    let bits = expect_arg(args, 0)?
        .expect_integer()?
        .to_u32()
        .ok_or(NumberError::out_of_range("precision must fit in 32 bits"))?;
    inexact::set_precision(bits);
    precision(&[])
}

/// Encoded size of a number in bytes.
pub fn size(args: &[Value]) -> NumberResult<Value> {
    let bytes = codec::size(expect_arg(args, 0)?);
    Ok(Number::from_bigint(bytes.into()).into())
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value, primitives::call};

    fn int(value: i64) -> Value {
        Value::from(value)
    }

    #[test]
    fn seeding_reports_status() {
        let half = Value::from(Number::ratio(1.into(), 2.into()).unwrap());
        assert_eq!(call("set_seed", &[half]), Value::from(false));
        assert_eq!(call("set_seed", &[Value::Nan]), Value::from(false));
    }

    #[test]
    fn random_below_rejects_non_positive() {
        assert_eq!(call("random_below", &[int(0)]), Value::Nan);
        assert_eq!(call("random_below", &[int(-5)]), Value::Nan);
        let draw = call("random_below", &[int(1)]);
        assert_eq!(draw, int(0));
    }

    #[test]
    fn precision_round_trip() {
        assert_eq!(call("set_precision", &[int(-1)]), Value::Nan);
        let current = call("precision", &[]);
        assert!(current.as_number().is_some_and(Number::is_integer));
    }

    #[test]
    fn encoded_size() {
        assert_eq!(call("size", &[int(7)]), int(9));
        let third = Value::from(Number::ratio(1.into(), 3.into()).unwrap());
        assert_eq!(call("size", &[third]), int(12));
    }
}
