//! The `Simulator` struct and its step loop.

use ga_core::{
    GaError, GaResult, MetricTiming, SimRng, SimulatorConfig, WaitClock, check_count,
};
use tracing::{debug, info};

use crate::{NoopObserver, RunObserver, RunStepLog, RunSummary, SimulatorBuilder};

/// Upper bound on the log buffer reserved up front for a run.
const PREALLOC_LIMIT: usize = 1 << 16;

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Drives a sequence of individuals through the collision check and, when no
/// collision occurs, a timed metric computation.
///
/// Each step runs:
///
/// ```text
/// CollisionCheck ─┬─ hit  → log 0.0 ──────────────┐
///                 └─ miss → compute_metric → log ─┴→ next
/// ```
///
/// Steps are memoryless: a "collision" is a probabilistic label, not a lookup
/// against earlier results.  Nothing is cached.
///
/// Create via [`Simulator::new`] or [`SimulatorBuilder`].
pub struct Simulator {
    pub(crate) timing:                MetricTiming,
    pub(crate) collision_probability: f64,
    pub(crate) rng:                   SimRng,
    pub(crate) clock:                 Box<dyn WaitClock>,
}

impl Simulator {
    /// Build with entropy seeding and the blocking real-time clock.
    ///
    /// `metric_computation_time` is a single number (deterministic), a
    /// `(low, high)` pair (stochastic) or a [`MetricTiming`].
    pub fn new<T>(metric_computation_time: T, collision_probability: f64) -> GaResult<Self>
    where
        T: TryInto<MetricTiming>,
        GaError: From<T::Error>,
    {
        SimulatorBuilder::new(metric_computation_time, collision_probability).build()
    }

    pub fn from_config(config: &SimulatorConfig) -> GaResult<Self> {
        SimulatorBuilder::from_config(config).build()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn timing(&self) -> MetricTiming {
        self.timing
    }

    pub fn collision_probability(&self) -> f64 {
        self.collision_probability
    }

    pub fn clock(&self) -> &dyn WaitClock {
        self.clock.as_ref()
    }

    /// Random samples drawn so far, across all runs.
    pub fn rng_draws(&self) -> u64 {
        self.rng.draws()
    }

    // ── Step primitives ───────────────────────────────────────────────────

    /// One Bernoulli trial: `true` iff a uniform `[0, 1)` sample is
    /// `<= collision_probability`.  Always consumes exactly one draw.
    pub fn is_collision(&mut self) -> bool {
        self.rng.unit() <= self.collision_probability
    }

    /// Sample a duration from the timing policy, wait it out on the clock and
    /// return it.
    pub fn compute_metric(&mut self) -> GaResult<f64> {
        let secs = self.timing.sample(&mut self.rng);
        self.clock.wait(secs)?;
        debug!(secs, mode = %self.timing.mode(), "metric computed");
        Ok(secs)
    }

    /// Simulate one individual.
    pub fn step(&mut self) -> GaResult<RunStepLog> {
        if self.is_collision() {
            info!("collision detected, using cached result");
            return Ok(RunStepLog::collision());
        }
        let secs = self.compute_metric()?;
        Ok(RunStepLog::computed(secs))
    }

    // ── Runs ──────────────────────────────────────────────────────────────

    /// Lazily simulate `n` individuals.
    ///
    /// Yields one result per step.  After the first error the iterator is
    /// exhausted, so every `Ok` item seen before it is a valid partial result.
    pub fn steps(&mut self, n: u64) -> Steps<'_> {
        Steps {
            sim:       self,
            remaining: n,
            failed:    false,
        }
    }

    /// Simulate `n` individuals and return their logs in order.
    ///
    /// Any error aborts the run and discards the logs collected so far.  Use
    /// [`steps`](Self::steps) to keep partial results.
    pub fn run(&mut self, n: u64) -> GaResult<Vec<RunStepLog>> {
        self.run_observed(n, &mut NoopObserver)
    }

    /// [`run`](Self::run) for a signed count, as read from config files and
    /// command lines.  Negative counts fail with `InvalidArgument`.
    pub fn run_signed(&mut self, n: i64) -> GaResult<Vec<RunStepLog>> {
        let n = check_count(n)?;
        self.run(n)
    }

    /// [`run`](Self::run) with observer callbacks at every step.
    pub fn run_observed<O: RunObserver>(
        &mut self,
        n:        u64,
        observer: &mut O,
    ) -> GaResult<Vec<RunStepLog>> {
        debug!(individuals = n, timing = %self.timing, p = self.collision_probability, "run started");
        observer.on_run_start(n);

        let reserve = usize::try_from(n).unwrap_or(usize::MAX).min(PREALLOC_LIMIT);
        let mut logs = Vec::with_capacity(reserve);
        let mut summary = RunSummary::default();
        for (index, result) in (0u64..).zip(self.steps(n)) {
            let log = result?;
            summary.record(&log);
            observer.on_step(index, &log);
            logs.push(log);
        }

        observer.on_run_end(&summary);
        debug!(
            steps = summary.steps,
            collisions = summary.collisions,
            total_secs = summary.total_computation_time_seconds,
            "run finished"
        );
        Ok(logs)
    }
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("timing", &self.timing)
            .field("collision_probability", &self.collision_probability)
            .field("rng", &self.rng)
            .field("wait_mode", &self.clock.mode())
            .finish()
    }
}

// ── Steps ─────────────────────────────────────────────────────────────────────

/// Iterator returned by [`Simulator::steps`].
pub struct Steps<'a> {
    sim:       &'a mut Simulator,
    remaining: u64,
    failed:    bool,
}

impl Iterator for Steps<'_> {
    type Item = GaResult<RunStepLog>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.sim.step();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        match usize::try_from(self.remaining) {
            Ok(n)  => (0, Some(n)),
            Err(_) => (0, None),
        }
    }
}

impl std::iter::FusedIterator for Steps<'_> {}
