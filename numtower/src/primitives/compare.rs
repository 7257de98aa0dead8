use crate::{NumberResult, Value, compare};

use super::expect_arg;

pub fn equals(args: &[Value]) -> NumberResult<Value> {
    let a = expect_arg(args, 0)?;
    let b = expect_arg(args, 1)?;
    Ok(compare::equals(a, b).into())
}

pub fn less(args: &[Value]) -> NumberResult<Value> {
    let a = expect_arg(args, 0)?;
    let b = expect_arg(args, 1)?;
    Ok(compare::less(a, b).into())
}

/// False for anything that is not a real number.
pub fn is_negative(args: &[Value]) -> NumberResult<Value> {
    let negative = args
        .first()
        .and_then(Value::as_number)
        .is_some_and(compare::is_negative);
    Ok(negative.into())
}

pub fn length(args: &[Value]) -> NumberResult<Value> {
    Ok(compare::length(expect_arg(args, 0)?).into())
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value, primitives::call};

    fn int(value: i64) -> Value {
        Value::from(value)
    }

    #[test]
    fn predicates() {
        assert_eq!(call("less", &[int(1), int(2)]), Value::from(true));
        assert_eq!(call("equals", &[int(2), int(2)]), Value::from(true));
        assert_eq!(call("less", &[int(1), Value::Nan]), Value::Nan);
        assert_eq!(call("is_negative", &[int(-1)]), Value::from(true));
        assert_eq!(call("is_negative", &[Value::from("-1")]), Value::from(false));
        assert_eq!(call("is_negative", &[Value::Nan]), Value::from(false));
    }

    #[test]
    fn length_of_min_fixnum() {
        let len = call("length", &[Value::from(Number::min_fixnum())]);
        assert_eq!(len.type_name(), "bignum");
        assert_eq!(len.to_string(), "9223372036854775808");
    }
}
