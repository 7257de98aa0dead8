use std::{fmt, sync::Arc};

use crate::{Number, NumberError, NumberResult};

/// Foreign operands that know how to subtract things from themselves.
///
/// Dates and pixel colors live outside the tower; `minus` hands them the
/// remaining operands untouched.
pub trait Difference: fmt::Debug + Send + Sync {
    fn difference(&self, rest: &[Value]) -> Value;
}

/// An operand as the surrounding system hands it over.
#[derive(Debug, Clone)]
pub enum Value {
    Number(Number),
    /// The shared not-a-number sentinel every domain error collapses into.
    Nan,
    Boolean(bool),
    Text(Arc<str>),
    Date(Arc<dyn Difference>),
    Pixel(Arc<dyn Difference>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(number) => number.type_name(),
            Value::Nan => "nan",
            Value::Boolean(_) => "boolean",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::Pixel(_) => "pixel",
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Nan)
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub(crate) fn expect_number(&self) -> NumberResult<&Number> {
        self.as_number()
            .ok_or_else(|| NumberError::type_error("number", self.type_name()))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Nan, Value::Nan) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Date(a), Value::Date(b)) | (Value::Pixel(a), Value::Pixel(b)) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from_i64(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(Arc::from(value))
    }
}
