//! Per-step records and run aggregates.

/// Outcome of one simulated individual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStepLog {
    /// `true` when the computation was skipped.
    pub is_collision: bool,
    /// `0.0` on a collision, otherwise the time the computation took.
    pub metric_computation_time_seconds: f64,
}

impl RunStepLog {
    pub fn collision() -> Self {
        RunStepLog {
            is_collision: true,
            metric_computation_time_seconds: 0.0,
        }
    }

    pub fn computed(secs: f64) -> Self {
        RunStepLog {
            is_collision: false,
            metric_computation_time_seconds: secs,
        }
    }
}

/// Aggregate statistics over a run's step logs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub steps:                          u64,
    pub collisions:                     u64,
    pub total_computation_time_seconds: f64,
}

impl RunSummary {
    pub fn from_logs(logs: &[RunStepLog]) -> Self {
        let mut summary = RunSummary::default();
        for log in logs {
            summary.record(log);
        }
        summary
    }

    /// Fold one more step into the summary.
    pub fn record(&mut self, log: &RunStepLog) {
        self.steps += 1;
        if log.is_collision {
            self.collisions += 1;
        }
        self.total_computation_time_seconds += log.metric_computation_time_seconds;
    }

    /// Number of steps that performed a fresh computation.
    pub fn computations(&self) -> u64 {
        self.steps - self.collisions
    }

    /// Fraction of steps that were collisions.  `0.0` for an empty run.
    pub fn collision_rate(&self) -> f64 {
        if self.steps == 0 {
            return 0.0;
        }
        self.collisions as f64 / self.steps as f64
    }

    /// Mean time over non-collision steps, or `None` if every step collided.
    pub fn mean_computation_time_seconds(&self) -> Option<f64> {
        match self.computations() {
            0 => None,
            n => Some(self.total_computation_time_seconds / n as f64),
        }
    }
}
