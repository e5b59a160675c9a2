//! Fluent builder for constructing a [`Simulator`].

use ga_core::{
    GaError, GaResult, MetricTiming, SimRng, SimulatorConfig, WaitClock, WaitMode,
    check_probability,
};

use crate::Simulator;

/// Fluent builder for [`Simulator`].
///
/// # Required inputs
///
/// - metric computation time: a single number, a `(low, high)` pair, or a
///   ready [`MetricTiming`]
/// - collision probability in `[0, 1]`
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                               |
/// |-------------------|---------------------------------------|
/// | `.seed(s)`        | Seeded from OS entropy                |
/// | `.rng(r)`         | Built from `.seed` or entropy         |
/// | `.wait_mode(m)`   | `WaitMode::Real`                      |
/// | `.clock(c)`       | `wait_mode.make_clock()`              |
///
/// An explicit `.rng` wins over `.seed`; an explicit `.clock` wins over
/// `.wait_mode`.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulatorBuilder::new((0.5, 1.5), 0.2)
///     .seed(42)
///     .wait_mode(WaitMode::Virtual)
///     .build()?;
/// let logs = sim.run(100)?;
/// ```
pub struct SimulatorBuilder {
    timing:                GaResult<MetricTiming>,
    collision_probability: f64,
    seed:                  Option<u64>,
    rng:                   Option<SimRng>,
    wait_mode:             WaitMode,
    clock:                 Option<Box<dyn WaitClock>>,
}

impl SimulatorBuilder {
    /// Create a builder from the two required policies.
    ///
    /// A malformed timing value is not reported here; it surfaces from
    /// [`build`](Self::build).
    pub fn new<T>(metric_computation_time: T, collision_probability: f64) -> Self
    where
        T: TryInto<MetricTiming>,
        GaError: From<T::Error>,
    {
        Self {
            timing: metric_computation_time.try_into().map_err(GaError::from),
            collision_probability,
            seed: None,
            rng: None,
            wait_mode: WaitMode::default(),
            clock: None,
        }
    }

    /// Seed every policy from a loaded config file.
    pub fn from_config(config: &SimulatorConfig) -> Self {
        Self {
            timing:                config.timing(),
            collision_probability: config.collision_probability,
            seed:                  config.seed,
            rng:                   None,
            wait_mode:             config.wait_mode,
            clock:                 None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inject an already-constructed random source.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn wait_mode(mut self, mode: WaitMode) -> Self {
        self.wait_mode = mode;
        self
    }

    /// Inject a custom wait clock.
    pub fn clock(mut self, clock: Box<dyn WaitClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Validate inputs and return a ready-to-run [`Simulator`].
    pub fn build(self) -> GaResult<Simulator> {
        let timing = self.timing?;
        let collision_probability = check_probability(self.collision_probability)?;

        let rng = match (self.rng, self.seed) {
            (Some(rng), _)     => rng,
            (None, Some(seed)) => SimRng::new(seed),
            (None, None)       => SimRng::from_entropy(),
        };
        let clock = self.clock.unwrap_or_else(|| self.wait_mode.make_clock());

        Ok(Simulator {
            timing,
            collision_probability,
            rng,
            clock,
        })
    }
}
