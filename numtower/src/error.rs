use std::fmt;

/// Failure of a numeric operation.
///
/// Every variant is a domain error: the `Value` layer turns all of them
/// into the shared not-a-number sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    DivisionByZero,
    TypeError {
        expected: &'static str,
        got: &'static str,
    },
    OutOfRange {
        message: &'static str,
    },
    Unimplemented {
        message: &'static str,
    },
    Syntax {
        message: &'static str,
    },
}

impl NumberError {
    pub(crate) fn type_error(expected: &'static str, got: &'static str) -> Self {
        Self::TypeError { expected, got }
    }

    pub(crate) fn out_of_range(message: &'static str) -> Self {
        Self::OutOfRange { message }
    }
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::TypeError { expected, got } => {
                write!(f, "expected {expected}, got {got}")
            }
            Self::OutOfRange { message } => write!(f, "out of range: {message}"),
            Self::Unimplemented { message } => {
                write!(f, "not implemented: {message}")
            }
            Self::Syntax { message } => write!(f, "invalid number: {message}"),
        }
    }
}

impl std::error::Error for NumberError {}

pub type NumberResult<T> = Result<T, NumberError>;
