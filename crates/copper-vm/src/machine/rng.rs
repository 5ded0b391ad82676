//! Pseudo-random number source for INT_RAND.

use std::time::{SystemTime, UNIX_EPOCH};

// Knuth's MMIX LCG constants.
const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// Linear congruential generator, lazily seeded from the clock unless a
/// seed was supplied first.
#[derive(Debug, Default)]
pub(crate) struct Rng {
    state: Option<u64>,
}

impl Rng {
    pub(crate) fn new() -> Rng {
        Rng { state: None }
    }

    /// Pin the generator to a fixed seed, making the sequence
    /// deterministic.
    pub(crate) fn seed(&mut self, seed: u64) {
        self.state = Some(seed);
    }

    /// Next value in `[0, bound)`.
    pub(crate) fn next_below(&mut self, bound: u16) -> u16 {
        let state = self.state.get_or_insert_with(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or(0)
        });
        *state = state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        // The upper bits have the longest period.
        ((*state >> 33) % bound as u64) as u16
    }
}
