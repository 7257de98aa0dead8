//! End-to-end behavior through the primitive table, the way the surrounding
//! system drives the tower.

use num_bigint::BigInt;
use numtower::{
    Number, RandomState, Value, from_bytes, from_ratio, primitives::call, to_bytes,
};

fn int(value: i64) -> Value {
    Value::from(value)
}

#[test]
fn fixnum_overflow_promotes_to_bignum() {
    let result = call("cat", &[int(i64::MAX), int(1)]);
    let number = result.as_number().unwrap();
    assert_eq!(number.type_name(), "bignum");
    assert_eq!(number.to_bigint(), Some(BigInt::from(1u64 << 63)));

    // and back down again
    let back = call("minus", &[result, int(1)]);
    assert!(back.as_number().unwrap().ptr_eq(&Number::max_fixnum()));
}

#[test]
fn unit_denominator_demotes() {
    let two = from_ratio(BigInt::from(4), BigInt::from(2));
    assert_eq!(two.type_name(), "fixnum");
    assert_eq!(two.to_i64(), Some(2));
}

#[test]
fn sqrt_of_negative_four() {
    let root = call("sqrt", &[int(-4)]);
    let root = root.as_number().unwrap();
    assert!(root.is_complex());
    assert!(root.real_part().ptr_eq(&Number::zero()));
    assert_eq!(root.imag_part().to_i64(), Some(2));
    assert_eq!(root.to_string(), "2i");
}

#[test]
fn primality_of_small_values() {
    assert_eq!(call("is_prime", &[int(97)]), Value::from(true));
    assert_eq!(call("is_prime", &[int(1)]), Value::from(false));
}

#[test]
fn complex_with_minus_one_imaginary_round_trips() {
    let third = Number::ratio(1.into(), 3.into()).unwrap();
    let value = Number::complex(third, Number::from_i64(-1)).unwrap();

    let decoded = from_bytes(&to_bytes(&value)).unwrap();
    assert_eq!(decoded, value);

    let text = decoded.to_string();
    assert!(text.starts_with("0.333"));
    assert!(text.ends_with("~-i"), "{text}");
}

#[test]
fn seeded_random_draws_replay() {
    let state = RandomState::new();
    let ten = Number::ten();
    let seed = Number::from_i64(20_240_601);

    state.set_seed(&seed).unwrap();
    let first: Vec<Number> = (0..10_000)
        .map(|_| state.random_below(&ten).unwrap())
        .collect();
    assert!(first.iter().all(|n| (0..10).contains(&n.to_i64().unwrap())));
    // every digit shows up in ten thousand draws
    for digit in 0..10 {
        assert!(first.iter().any(|n| n.to_i64() == Some(digit)));
    }

    state.set_seed(&seed).unwrap();
    let second: Vec<Number> = (0..10_000)
        .map(|_| state.random_below(&ten).unwrap())
        .collect();
    assert_eq!(first, second);
    assert_eq!(state.get_seed(), seed);
}

#[test]
fn shared_generator_through_primitives() {
    assert_eq!(call("set_seed", &[int(99)]), Value::from(true));
    let draw = call("random_below", &[int(1000)]);
    let value = draw.as_number().and_then(Number::to_i64).unwrap();
    assert!((0..1000).contains(&value));
}

#[test]
fn nan_anywhere_poisons_the_chain() {
    let mut args: Vec<Value> = (1..=50).map(int).collect();
    args.push(Value::Nan);
    args.extend((51..=100).map(int));
    for name in ["cat", "minus", "times", "ratio", "gcd", "lcm"] {
        assert_eq!(call(name, &args), Value::Nan, "{name}");
    }
}

#[test]
fn zero_results_share_one_instance() {
    let zero = call("minus", &[int(5), int(5)]);
    assert!(zero.as_number().unwrap().ptr_eq(&Number::zero()));
    let zero = call("times", &[int(0), Value::from(Number::max_fixnum())]);
    assert!(zero.as_number().unwrap().ptr_eq(&Number::zero()));
    let zero = call("mod", &[int(9), int(3)]);
    assert!(zero.as_number().unwrap().ptr_eq(&Number::zero()));
}

#[test]
fn sqrt_of_large_negative_complex_stays_a_number() {
    let re = Number::ratio(-(BigInt::from(1) + (BigInt::from(25) << 130usize)), 5.into()).unwrap();
    let im = Number::ratio(7.into(), 5.into()).unwrap();
    let z = Value::from(Number::complex(re, im).unwrap());
    let root = call("sqrt", &[z]);
    assert!(root.as_number().is_some_and(Number::is_complex), "{root}");
}
