//! Deterministic random number generation with forking for game sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Each session gets an independent branch, so one session's
//!   draws never perturb another's
//!
//! ## Usage
//!
//! ```
//! use partybot::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a new session
//! let mut session_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! let original: Vec<usize> = (0..16).map(|_| rng.gen_range_usize(0..100)).collect();
//! let forked: Vec<usize> = (0..16).map(|_| session_rng.gen_range_usize(0..100)).collect();
//! assert_ne!(original, forked);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for per-session randomness.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// Game catalog entries hold one `GameRng` and fork it for every session they
/// start, keeping replays reproducible from a single seed.
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
    ///
    /// Used by composition roots that do not care about reproducibility.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to give every session its own randomness stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
