use crate::{NumberResult, Value, arith};

use super::{expect_arg, expect_numbers};

pub fn cat(args: &[Value]) -> NumberResult<Value> {
    Ok(arith::sum(&expect_numbers(args)?).into())
}

/// Dates and pixels subtract on their own terms.
pub fn minus(args: &[Value]) -> NumberResult<Value> {
    if let Some(Value::Date(first) | Value::Pixel(first)) = args.first() {
        return Ok(first.difference(&args[1..]));
    }
    Ok(arith::difference(&expect_numbers(args)?).into())
}

pub fn times(args: &[Value]) -> NumberResult<Value> {
    Ok(arith::product(&expect_numbers(args)?).into())
}

pub fn ratio(args: &[Value]) -> NumberResult<Value> {
    Ok(arith::quotient(&expect_numbers(args)?)?.into())
}

pub fn div(args: &[Value]) -> NumberResult<Value> {
    Ok(arith::div(expect_arg(args, 0)?, expect_arg(args, 1)?)?.into())
}

pub fn modulo(args: &[Value]) -> NumberResult<Value> {
    Ok(arith::modulo(expect_arg(args, 0)?, expect_arg(args, 1)?)?.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{Difference, Number, Value, primitives::call};

    fn int(value: i64) -> Value {
        Value::from(value)
    }

    #[derive(Debug)]
    struct Day(i64);

    impl Difference for Day {
        fn difference(&self, rest: &[Value]) -> Value {
            match rest {
                [Value::Date(_)] => Value::from("interval"),
                [other] => match other.as_number().and_then(Number::to_i64) {
                    Some(days) => Value::Date(Arc::new(Day(self.0 - days))),
                    None => Value::Nan,
                },
                _ => Value::Nan,
            }
        }
    }

    #[test]
    fn n_ary_edges() {
        assert_eq!(call("cat", &[]), int(0));
        assert_eq!(call("times", &[]), int(1));
        assert_eq!(call("minus", &[]), int(0));
        assert_eq!(call("minus", &[int(5)]), int(-5));
        assert_eq!(call("minus", &[int(10), int(3), int(2)]), int(5));
        assert_eq!(call("ratio", &[]), Value::Nan);
        assert_eq!(
            call("ratio", &[int(4)]),
            Value::from(Number::ratio(1.into(), 4.into()).unwrap())
        );
        assert_eq!(call("ratio", &[int(12), int(2), int(3)]), int(2));
    }

    #[test]
    fn overflow_promotes() {
        let sum = call("cat", &[Value::from(Number::max_fixnum()), int(1)]);
        assert_eq!(sum.type_name(), "bignum");
        assert_eq!(sum.to_string(), "9223372036854775808");
    }

    #[test]
    fn minus_delegates_to_dates() {
        let day = Value::Date(Arc::new(Day(10)));
        assert_eq!(call("minus", &[day.clone(), day.clone()]), Value::from("interval"));
        let earlier = call("minus", &[day, int(3)]);
        assert_eq!(earlier.type_name(), "date");
        assert_eq!(call("minus", &[int(3), Value::Date(Arc::new(Day(1)))]), Value::Nan);
    }

    #[test]
    fn floor_division() {
        assert_eq!(call("div", &[int(-7), int(2)]), int(-4));
        assert_eq!(call("mod", &[int(-7), int(2)]), int(1));
        assert_eq!(call("mod", &[int(7), int(-2)]), int(-1));
        assert_eq!(call("div", &[int(7), int(0)]), Value::Nan);
        let i = Value::from(Number::complex(Number::zero(), Number::one()).unwrap());
        assert_eq!(call("div", &[i.clone(), int(2)]), Value::Nan);
        assert_eq!(call("mod", &[int(2), i]), Value::Nan);
    }
}
