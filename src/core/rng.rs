//! Random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Serializable**: O(1) state capture and restore
//! - **Shared**: One process-wide generator backs `Deck::shuffle`, seeded
//!   once on first use
//!
//! ## Usage
//!
//! ```
//! use card_deck::core::DeckRng;
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//!
//! let mut xs = [1, 2, 3, 4, 5, 6, 7, 8];
//! let mut ys = xs;
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```
//!
//! The shared generator is seeded from OS entropy unless `CARD_DECK_SEED`
//! holds a `u64`, in which case every run shuffles the same way.

use std::sync::{Mutex, PoisonError};

use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::SEED_ENV_VAR;

/// Seedable shuffle generator.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness, so a
/// Fisher–Yates pass over it yields a uniform permutation.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replaying shuffles.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

lazy_static! {
    static ref SHARED_RNG: Mutex<DeckRng> = Mutex::new(initial_rng());
}

fn initial_rng() -> DeckRng {
    let Ok(raw) = std::env::var(SEED_ENV_VAR) else {
        return DeckRng::from_entropy();
    };
    match raw.trim().parse::<u64>() {
        Ok(seed) => {
            log::debug!("shared rng seeded from {}={}", SEED_ENV_VAR, seed);
            DeckRng::new(seed)
        }
        Err(e) => {
            log::warn!("ignoring {}={:?}: {}", SEED_ENV_VAR, raw, e);
            DeckRng::from_entropy()
        }
    }
}

/// Run `f` with exclusive access to the process-wide generator.
pub fn with_shared<R>(f: impl FnOnce(&mut DeckRng) -> R) -> R {
    let mut rng = SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut rng)
}

/// Replace the process-wide generator with one seeded from `seed`.
pub fn reseed_shared(seed: u64) {
    with_shared(|rng| *rng = DeckRng::new(seed));
    log::debug!("shared rng reseeded with {}", seed);
}
