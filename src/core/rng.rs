//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Explicit**: Threaded into deck generation as a parameter, never a
//!   process-wide global
//!
//! ## Usage
//!
//! ```
//! use pyramid_solitaire::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same order
//! let mut rng2 = GameRng::new(42);
//! let mut deck2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG behind every shuffle.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// A session holds one of these across restarts, so a whole run of games is
/// reproducible from a single seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy, for normal play.
    ///
    /// The drawn seed is recoverable via [`seed`](Self::seed), so even an
    /// unseeded game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
