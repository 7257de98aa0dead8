//! Run with:
//!   cargo bench --bench arith_benchmark

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use numtower::{Number, Value, primitives::call};

fn int(value: i64) -> Value {
    Value::from(value)
}

/// Two-operand fixnum sum, the fast path.
fn bench_fixnum_sum(c: &mut Criterion) {
    let args = [int(123_456), int(-654_321)];
    c.bench_function("fixnum_sum", |b| {
        b.iter(|| call("cat", black_box(&args)));
    });
}

/// Long mixed chain through the rational accumulator.
fn bench_mixed_chain(c: &mut Criterion) {
    let args: Vec<Value> = (1..=64)
        .map(|k| match Number::ratio(1.into(), k.into()) {
            Ok(number) => Value::from(number),
            Err(_) => Value::Nan,
        })
        .collect();
    c.bench_function("harmonic_sum_64", |b| {
        b.iter(|| call("cat", black_box(&args)));
    });
}

fn bench_complex_division(c: &mut Criterion) {
    let z = |re: i64, im: i64| {
        Number::complex(Number::from_i64(re), Number::from_i64(im))
            .map(Value::from)
            .unwrap_or(Value::Nan)
    };
    let args = [z(3, 4), z(1, -2), z(-5, 7)];
    c.bench_function("complex_ratio_3", |b| {
        b.iter(|| call("ratio", black_box(&args)));
    });
}

fn bench_is_prime(c: &mut Criterion) {
    // 2^89 - 1
    let m89 = "618970019642690137449562111".parse::<Number>().map(Value::from);
    let args = [m89.unwrap_or(Value::Nan)];
    c.bench_function("is_prime_m89", |b| {
        b.iter(|| call("is_prime", black_box(&args)));
    });
}

fn bench_render_ratio(c: &mut Criterion) {
    let seventh = Number::ratio(1.into(), 7.into()).unwrap_or_default();
    c.bench_function("render_one_seventh", |b| {
        b.iter(|| black_box(&seventh).to_string());
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_fixnum_sum, bench_mixed_chain, bench_complex_division, bench_is_prime,
        bench_render_ratio
}

criterion_main!(benches);
