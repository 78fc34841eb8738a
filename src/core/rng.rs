//! Seedable random number generation for level building.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical puzzles
//! - **Forkable**: Independent streams (e.g. card ids vs. card values)
//! - **Entropy-seeded play**: `from_entropy` for normal sessions
//!
//! ## Usage
//!
//! ```
//! use card_arith::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut ids = rng.fork();
//!
//! // Forks are deterministic: same parent seed, same fork sequence
//! let mut rng2 = GameRng::new(42);
//! let mut ids2 = rng2.fork();
//! assert_eq!(ids.gen_range_u32(0..=1000), ids2.gen_range_u32(0..=1000));
//! ```

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing level generation.
///
/// Uses ChaCha8 so a seed fully determines every generated puzzle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random u32 in the given inclusive range.
    pub fn gen_range_u32(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Probabilities are clamped into `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
