//! Randomness for dice rolls.
//!
//! The engine never owns a generator directly. It consumes an
//! [`IndexSource`], a capability that picks a uniformly distributed index
//! below a bound, and the session is handed one at construction.
//!
//! ## Implementations
//!
//! - [`GameRng`]: seeded ChaCha8, deterministic and checkpointable.
//! - [`ScriptedRng`]: replays a fixed list of indices, for tests and replays.
//!
//! ```
//! use liars_dice::core::{GameRng, IndexSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same rolls
//! for _ in 0..10 {
//!     assert_eq!(rng1.next_index(6), rng2.next_index(6));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Source of uniformly distributed indices.
///
/// `next_index(bound)` returns a value in `0..bound`. `bound` is always
/// positive when called by the engine.
pub trait IndexSource {
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<T: IndexSource + ?Sized> IndexSource for &mut T {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<T: IndexSource + ?Sized> IndexSource for Box<T> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Deterministic RNG for dice rolls.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
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

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl IndexSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a scripted sequence of indices.
///
/// Each call pops the next scripted value, reduced modulo the bound. Once
/// the script runs out every call returns the fallback value (0 unless set
/// with [`ScriptedRng::or_else`]).
///
/// ```
/// use liars_dice::core::{IndexSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([4, 2]).or_else(5);
/// assert_eq!(rng.next_index(6), 4);
/// assert_eq!(rng.next_index(6), 2);
/// assert_eq!(rng.next_index(6), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    queue: VecDeque<usize>,
    fallback: usize,
}

impl ScriptedRng {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            queue: script.into_iter().collect(),
            fallback: 0,
        }
    }

    /// Value returned once the script is exhausted.
    #[must_use]
    pub fn or_else(mut self, fallback: usize) -> Self {
        self.fallback = fallback;
        self
    }
}

impl IndexSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.queue.pop_front().unwrap_or(self.fallback) % bound
    }
}
