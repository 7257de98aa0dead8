//! Integer primitives the tower needs on top of `num-bigint`.
//!
//! Combinatorics, Lucas sequences, the Miller-Rabin witness test and the
//! deterministic certificate that backs `is_prime`. Everything here works on
//! plain `BigInt`s, the tower-facing wrappers live in `theory.rs`.
use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97,
];

// deterministic Miller-Rabin with the first 13 primes as bases below this
const DETERMINISTIC_LIMIT: u128 = 3_317_044_064_679_887_385_961_981;

pub fn factorial(n: u32) -> BigInt {
    multifactorial(n, 1)
}

/// `n * (n - m) * (n - 2m) * ...`, `m` must be at least 1.
pub fn multifactorial(n: u32, m: u32) -> BigInt {
    debug_assert!(m >= 1);
    let mut acc = BigInt::one();
    let mut k = n as u64;
    let step = m as u64;
    while k > 1 {
        acc *= k;
        k = k.saturating_sub(step);
    }
    acc
}

/// Product of all primes `<= n`.
pub fn primorial(n: u32) -> BigInt {
    sieve(n)
        .into_iter()
        .fold(BigInt::one(), |acc, p| acc * p)
}

fn sieve(limit: u32) -> Vec<u32> {
    if limit < 2 {
        return Vec::new();
    }
    let limit = limit as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for i in 2..=limit {
        if composite[i] {
            continue;
        }
        primes.push(i as u32);
        let mut j = i * i;
        while j <= limit {
            composite[j] = true;
            j += i;
        }
    }
    primes
}

/// `C(n, k)`, extended to negative `n` by `C(n, k) = (-1)^k C(k - n - 1, k)`.
pub fn binomial(n: &BigInt, k: u32) -> BigInt {
    if n.is_negative() {
        let flipped = binomial(&(BigInt::from(k) - n - 1), k);
        return if k % 2 == 1 { -flipped } else { flipped };
    }
    if BigInt::from(k) > *n {
        return BigInt::zero();
    }
    // C(n, k) == C(n, n - k), take the shorter product
    let k = match (n - BigInt::from(k)).to_u32() {
        Some(rest) if rest < k => rest,
        _ => k,
    };
    let mut acc = BigInt::one();
    for i in 0..k {
        acc *= n - i;
        acc /= i + 1;
    }
    acc
}

pub fn fibonacci(n: u64) -> BigInt {
    fibonacci_pair(n).0
}

/// `L(n) = 2F(n+1) - F(n)`.
pub fn lucas(n: u64) -> BigInt {
    let (f, f_next) = fibonacci_pair(n);
    (f_next << 1usize) - f
}

/// `(F(n), F(n+1))` by fast doubling.
fn fibonacci_pair(n: u64) -> (BigInt, BigInt) {
    if n == 0 {
        return (BigInt::zero(), BigInt::one());
    }
    let (a, b) = fibonacci_pair(n / 2);
    // F(2k) = F(k) (2F(k+1) - F(k)), F(2k+1) = F(k)^2 + F(k+1)^2
    let c = &a * ((&b << 1usize) - &a);
    let d = &a * &a + &b * &b;
    if n % 2 == 0 {
        (c, d)
    } else {
        let next = &c + &d;
        (d, next)
    }
}

/// Miller-Rabin with `reps` random bases.
///
/// Bases come from a generator seeded by `n`, so the answer for a given
/// `n` and `reps` never changes and the shared generator is left alone.
pub fn is_probably_prime(n: &BigInt, reps: u32) -> bool {
    if let Some(answer) = small_prime_check(n) {
        return answer;
    }
    let mut rng = ChaCha8Rng::seed_from_u64(n.iter_u64_digits().fold(0, |acc, d| acc ^ d));
    let low = BigInt::from(2);
    let high = n - 1u32;
    (0..reps).all(|_| {
        let base = rng.gen_bigint_range(&low, &high);
        strong_probable_prime(n, &base)
    })
}

/// `Some` when trial division by the small primes settles the question.
fn small_prime_check(n: &BigInt) -> Option<bool> {
    if *n < BigInt::from(2) {
        return Some(false);
    }
    for &p in SMALL_PRIMES.iter() {
        if *n == BigInt::from(p) {
            return Some(true);
        }
        if (n % p).is_zero() {
            return Some(false);
        }
    }
    // no factor below 100 and n < 100^2 means prime
    if *n < BigInt::from(10_000) {
        return Some(true);
    }
    None
}

/// One Miller-Rabin round: is `n` a strong probable prime to `base`?
fn strong_probable_prime(n: &BigInt, base: &BigInt) -> bool {
    let n_minus_one = n - 1u32;
    let shift = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> shift as usize;

    let mut x = base.modpow(&d, n);
    if x.is_one() || x == n_minus_one {
        return true;
    }
    for _ in 1..shift {
        x = x.modpow(&BigInt::from(2), n);
        if x == n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }
    false
}

/// Deterministic primality certificate.
///
/// Below 3.3e24 the first 13 primes are a proven Miller-Rabin witness set.
/// Above that the answer is Baillie-PSW: a base 2 strong test followed by a
/// strong Lucas test, which has no known counterexample.
pub fn certify_prime(n: &BigInt) -> bool {
    if let Some(answer) = small_prime_check(n) {
        return answer;
    }
    let below_limit = n.to_u128().is_some_and(|v| v < DETERMINISTIC_LIMIT);
    if below_limit {
        return SMALL_PRIMES[..13]
            .iter()
            .all(|&p| strong_probable_prime(n, &BigInt::from(p)));
    }
    strong_probable_prime(n, &BigInt::from(2)) && strong_lucas_probable_prime(n)
}

/// Strong Lucas test with Selfridge's parameters, `n` odd and > 2.
fn strong_lucas_probable_prime(n: &BigInt) -> bool {
    if is_perfect_square(n) {
        return false;
    }
    // first D in 5, -7, 9, -11, ... with (D/n) = -1
    let mut d = BigInt::from(5);
    loop {
        match jacobi(&d, n) {
            -1 => break,
            0 if d.abs() != *n => return false,
            _ => {}
        }
        d = if d.is_positive() { -(d + 2u32) } else { -d + 2u32 };
    }
    let p = BigInt::one();
    let q: BigInt = (BigInt::one() - &d) / 4u32;

    let n_plus_one = n + 1u32;
    let shift = n_plus_one.trailing_zeros().unwrap_or(0);
    let k = &n_plus_one >> shift as usize;

    let half = |value: BigInt| -> BigInt {
        let value = value.mod_floor(n);
        if value.is_odd() {
            (value + n) >> 1usize
        } else {
            value >> 1usize
        }
    };

    // U(1) = 1, V(1) = P, walk the bits of k below the top one
    let mut u = BigInt::one();
    let mut v = p.clone();
    let mut qk = q.mod_floor(n);
    for bit in (0..k.bits().saturating_sub(1)).rev() {
        u = (&u * &v).mod_floor(n);
        v = (&v * &v - (&qk << 1usize)).mod_floor(n);
        qk = (&qk * &qk).mod_floor(n);
        if k.bit(bit) {
            let next_u = half(&p * &u + &v);
            let next_v = half(&d * &u + &p * &v);
            u = next_u;
            v = next_v;
            qk = (&qk * &q).mod_floor(n);
        }
    }

    if u.is_zero() || v.is_zero() {
        return true;
    }
    for _ in 1..shift {
        v = (&v * &v - (&qk << 1usize)).mod_floor(n);
        if v.is_zero() {
            return true;
        }
        qk = (&qk * &qk).mod_floor(n);
    }
    false
}

/// Jacobi symbol `(a/n)` for odd positive `n`.
fn jacobi(a: &BigInt, n: &BigInt) -> i32 {
    let mut a = a.mod_floor(n);
    let mut n = n.clone();
    let mut result = 1;
    let three = BigInt::from(3);
    let five = BigInt::from(5);
    let eight = BigInt::from(8);
    while !a.is_zero() {
        while a.is_even() {
            a >>= 1usize;
            let r = n.mod_floor(&eight);
            if r == three || r == five {
                result = -result;
            }
        }
        std::mem::swap(&mut a, &mut n);
        if a.mod_floor(&BigInt::from(4)) == three && n.mod_floor(&BigInt::from(4)) == three {
            result = -result;
        }
        a = a.mod_floor(&n);
    }
    if n.is_one() { result } else { 0 }
}

/// Smallest probable prime strictly greater than `n`.
pub fn next_prime(n: &BigInt, reps: u32) -> BigInt {
    let two = BigInt::from(2);
    if *n < two {
        return two;
    }
    let mut candidate: BigInt = n + 1u32;
    if candidate.is_even() {
        candidate += 1u32;
    }
    while !is_probably_prime(&candidate, reps) {
        candidate += 2u32;
    }
    candidate
}

pub fn is_perfect_square(n: &BigInt) -> bool {
    if n.is_negative() {
        return false;
    }
    let root = n.sqrt();
    &root * &root == *n
}

/// Is `n = a^k` for some integer `a` and `k > 1`? 0, 1 and -1 are.
pub fn is_perfect_power(n: &BigInt) -> bool {
    let magnitude = n.abs();
    if magnitude <= BigInt::one() {
        return true;
    }
    let bits = magnitude.bits() as u32;
    // prime exponents are enough, a^(pq) = (a^q)^p
    for k in sieve(bits) {
        // an even power is never negative
        if n.is_negative() && k == 2 {
            continue;
        }
        let root = magnitude.nth_root(k);
        if num_traits::pow(root, k as usize) == magnitude {
            return true;
        }
    }
    false
}
