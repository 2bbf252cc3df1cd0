//! Randomness for a game: where the mines go, and which cell to guess when
//! the knowledge base has no deduced safe move.
//!
//! A fixed seed replays the same boards and the same guesses, which the
//! tests and the `autoplay` binary rely on.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct GameRng {
    inner: SmallRng,
}

impl GameRng {
    /// Seeded from OS entropy; on wasm32 this goes through `getrandom`.
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in [0, max). `max` must be positive.
    #[inline(always)]
    pub fn gen_range(&mut self, max: usize) -> usize {
        self.inner.random_range(0..max)
    }

    /// Pick a uniformly random element, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.gen_range(items.len()))
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}
