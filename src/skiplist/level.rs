// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Randomized level assignment.
//!
//! Each new node gets level `k` with probability `p^k (1 - p)`, truncated at
//! the effective cap. The cap is the larger of the configured ceiling and the
//! list's current top level, so draws stay bounded without limiting growth.

use rand::Rng;
use rand_core::RngCore;

use crate::config::Config;

/// Draws node heights from a generator owned by one list.
pub(crate) struct LevelPolicy<R> {
    rng: R,
    ceiling: usize,
    p: f64,
}

impl<R: RngCore> LevelPolicy<R> {
    pub fn new(rng: R, config: &Config) -> Self {
        return LevelPolicy {
            rng,
            ceiling: config.max_level,
            p: config.probability,
        };
    }

    /// Draw a level for a new node in a list whose top level is `level`.
    pub fn random_level(&mut self, level: usize) -> usize {
        let cap = self.effective_max_level(level);
        let mut n = 0;
        while n < cap && self.rng.gen_bool(self.p) {
            n += 1;
        }
        return n;
    }
}

impl<R> LevelPolicy<R> {
    pub fn ceiling(&self) -> usize {
        return self.ceiling;
    }

    pub fn effective_max_level(&self, level: usize) -> usize {
        return level.max(self.ceiling);
    }
}
