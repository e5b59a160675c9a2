//! Run observer trait for progress reporting and data collection.

use crate::{RunStepLog, RunSummary};

/// Callbacks invoked by [`Simulator::run_observed`][crate::Simulator::run_observed].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — collision counter
///
/// ```rust,ignore
/// struct CollisionCounter(u64);
///
/// impl RunObserver for CollisionCounter {
///     fn on_step(&mut self, _index: u64, log: &RunStepLog) {
///         if log.is_collision {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once before the first step.
    fn on_run_start(&mut self, _individuals: u64) {}

    /// Called after each step is recorded.  `index` is zero-based.
    fn on_step(&mut self, _index: u64, _log: &RunStepLog) {}

    /// Called once after the final step.  Not called if the run fails.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
