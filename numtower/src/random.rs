//! The process-wide generator behind `random_below`.
//!
//! Starts unseeded. The first draw or `get_seed` seeds it from the wall clock,
//! `set_seed` replaces it. The lock is only held for generator work.
use std::time::{SystemTime, UNIX_EPOCH};

use log::trace;
use num_bigint::{BigInt, RandBigInt};
use num_traits::{Signed, Zero};
use parking_lot::{Mutex, const_mutex};
use rand_chacha::ChaCha8Rng;
use rand_seeder::Seeder;

use crate::{Number, NumberError, NumberResult, canonical};

struct Generator {
    rng: ChaCha8Rng,
    seed: BigInt,
}

impl Generator {
    fn new(seed: BigInt) -> Self {
        let rng = Seeder::from(seed.to_signed_bytes_le()).make_rng();
        Self { rng, seed }
    }
}

pub struct RandomState {
    inner: Mutex<Option<Generator>>,
}

static GLOBAL: RandomState = RandomState::new();

fn clock_seed() -> BigInt {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (BigInt::from(now.subsec_micros()) << 32usize) + now.as_secs()
}

impl RandomState {
    pub const fn new() -> Self {
        Self {
            inner: const_mutex(None),
        }
    }

    fn with_generator<T>(&self, f: impl FnOnce(&mut Generator) -> T) -> T {
        let mut guard = self.inner.lock();
        let generator = guard.get_or_insert_with(|| {
            let seed = clock_seed();
            trace!("seeding generator from clock: {seed}");
            Generator::new(seed)
        });
        f(generator)
    }

    pub fn get_seed(&self) -> Number {
        let seed = self.with_generator(|generator| generator.seed.clone());
        canonical::from_bigint(seed)
    }

    pub fn set_seed(&self, seed: &Number) -> NumberResult<()> {
        let seed = seed.expect_integer()?;
        trace!("reseeding generator: {seed}");
        *self.inner.lock() = Some(Generator::new(seed));
        Ok(())
    }

    /// Uniform integer in `[0, bound)`.
    pub fn random_below(&self, bound: &Number) -> NumberResult<Number> {
        let bound = bound.expect_integer()?;
        if !bound.is_positive() {
            return Err(NumberError::out_of_range("random bound must be positive"));
        }
        let value = self.with_generator(|generator| {
            generator.rng.gen_bigint_range(&BigInt::zero(), &bound)
        });
        Ok(canonical::from_bigint(value))
    }
}

impl Default for RandomState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_seed() -> Number {
    GLOBAL.get_seed()
}

pub fn set_seed(seed: &Number) -> NumberResult<()> {
    GLOBAL.set_seed(seed)
}

pub fn random_below(bound: &Number) -> NumberResult<Number> {
    GLOBAL.random_below(bound)
}
