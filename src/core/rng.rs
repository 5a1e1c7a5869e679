//! Deterministic stick throws.
//!
//! Senet's dice are four casting sticks yielding a uniform value 1..=5. The
//! rules engine itself consumes no randomness; `StickRng` belongs to the
//! caller (the session layer, tests, benchmarks), where deterministic
//! replays matter:
//!
//! - **Deterministic**: the same seed produces the identical throw sequence.
//! - **Forkable**: independent branches for speculative playouts.
//! - **Serializable**: O(1) state capture and restore via [`StickRngState`].
//!
//! ```
//! use senet_rules::core::StickRng;
//!
//! let mut rng = StickRng::new(42);
//! let mut replay = StickRng::new(42);
//!
//! for _ in 0..20 {
//!     let value = rng.throw();
//!     assert!((1..=5).contains(&value));
//!     assert_eq!(value, replay.throw());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic generator for stick throws and uniform move picks.
#[derive(Clone, Debug)]
pub struct StickRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl StickRng {
    /// Create a new generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Throw the sticks: a uniform value in 1..=5.
    pub fn throw(&mut self) -> u8 {
        self.inner.gen_range(1..=5)
    }

    /// Pick a uniform element from a slice.
    ///
    /// Used by the random computer opponent to select among legal moves.
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Fork this generator into an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> StickRngState {
        StickRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore a generator from a saved state.
    #[must_use]
    pub fn from_state(state: &StickRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable generator state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) no matter how many
/// throws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
    /// Fork counter for deterministic branching.
    pub fork_counter: u64,
}
