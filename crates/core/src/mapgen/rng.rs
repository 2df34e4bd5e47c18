//! Seeded random source shared by every stochastic generation step.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

use crate::error::{GenerationError, Result};

/// Deterministic integer source: two instances built from the same seed and
/// driven with the same calls yield the same values.
#[derive(Clone, Debug)]
pub struct WorldRng {
    rng: ChaCha8Rng,
}

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw from `low..=high`.
    ///
    /// Rejects raw values from the biased tail of the `u64` space so every
    /// value in the range is equally likely.
    pub fn uniform(&mut self, low: i32, high: i32) -> Result<i32> {
        if low > high {
            return Err(GenerationError::InvalidRange {
                low: i64::from(low),
                high: i64::from(high),
            });
        }
        let span = (i64::from(high) - i64::from(low) + 1) as u64;
        let limit = u64::MAX - (u64::MAX % span);
        loop {
            let raw = self.rng.next_u64();
            if raw < limit {
                return Ok((i64::from(low) + (raw % span) as i64) as i32);
            }
        }
    }
}
