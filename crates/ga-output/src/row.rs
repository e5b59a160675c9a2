//! Plain data row types written by output backends.

use ga_sim::{RunStepLog, RunSummary};

/// One simulated individual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRow {
    /// Zero-based position within the run.
    pub step:                            u64,
    pub is_collision:                    bool,
    pub metric_computation_time_seconds: f64,
}

impl StepRow {
    pub fn new(step: u64, log: &RunStepLog) -> Self {
        Self {
            step,
            is_collision:                    log.is_collision,
            metric_computation_time_seconds: log.metric_computation_time_seconds,
        }
    }
}

/// Aggregates for one completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub steps:                          u64,
    pub collisions:                     u64,
    pub collision_rate:                 f64,
    pub total_computation_time_seconds: f64,
    /// `None` when every step collided.
    pub mean_computation_time_seconds:  Option<f64>,
}

impl From<&RunSummary> for SummaryRow {
    fn from(s: &RunSummary) -> Self {
        Self {
            steps:                          s.steps,
            collisions:                     s.collisions,
            collision_rate:                 s.collision_rate(),
            total_computation_time_seconds: s.total_computation_time_seconds,
            mean_computation_time_seconds:  s.mean_computation_time_seconds(),
        }
    }
}
