//! Seedable random source owned by each simulator.
//!
//! Every draw goes through [`SimRng`] so the simulator never touches a
//! process-wide generator.  Two simulators built with the same seed and the
//! same configuration produce identical step logs.
//!
//! The wrapper also counts draws.  Tests use the counter to check that a
//! zero-length run, or a run made entirely of collisions, consumes exactly
//! the draws the step loop promises.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Not `Sync`-shared: a simulator owns its `SimRng` by value and runs take
/// `&mut self`, so interleaved draws from concurrent runs cannot happen.
pub struct SimRng {
    inner: SmallRng,
    draws: u64,
}

impl SimRng {
    /// Seed deterministically.  The same seed always yields the same stream.
    pub fn new(seed: u64) -> Self {
        SimRng {
            inner: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Seed from OS entropy.  Used when no seed is configured.
    pub fn from_entropy() -> Self {
        SimRng {
            inner: SmallRng::from_entropy(),
            draws: 0,
        }
    }

    /// One uniform sample in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.inner.r#gen::<f64>()
    }

    /// One uniform sample in the inclusive range `[low, high]`.
    ///
    /// Callers must pass `low <= high`; `MetricTiming` normalises its bounds
    /// at construction so the step loop never violates this.
    #[inline]
    pub fn uniform_inclusive(&mut self, low: f64, high: f64) -> f64 {
        self.draws += 1;
        self.inner.gen_range(low..=high)
    }

    /// Number of samples drawn since construction.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimRng").field("draws", &self.draws).finish()
    }
}
