mod arith;
mod canonical;
mod codec;
mod compare;
mod engine;
mod error;
mod format;
mod inexact;
mod number;
mod parse;
mod random;
mod theory;
mod value;

pub mod primitives;

pub use arith::{difference, div, modulo, product, quotient, reciprocal, sum};
pub use canonical::{from_bigint, from_complex, from_ratio, from_rational};
pub use codec::{
    TAG_BIGINT, TAG_COMPLEX, TAG_FIXNUM, TAG_RATIO, decode, encode, from_bytes, size, to_bytes,
};
pub use compare::{compare, equals, is_negative, length, less};
pub use engine::certify_prime;
pub use error::{NumberError, NumberResult};
pub use format::{INEXACT_MARKER, RATIO_DIGITS, render};
pub use inexact::{
    DEFAULT_PRECISION, acos, asin, atan, cos, exp, from_f64, ln, log, mod_pow, pow, precision,
    set_precision, sin, sqrt, tan,
};
pub use number::{Number, Repr};
pub use random::{RandomState, get_seed, random_below, set_seed};
pub use theory::{
    binomial, factorial, fibonacci, gcd, is_perfect_power, is_perfect_square, is_prime,
    is_probably_prime, lcm, lucas, multifactorial, next_prime, primorial,
};
pub use value::{Difference, Value};
