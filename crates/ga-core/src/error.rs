//! Simulator error type.
//!
//! `ga-sim` reuses this enum directly; `ga-output` keeps its own
//! `OutputError` because its failures (CSV, file handles) never reach the
//! step loop.

use thiserror::Error;

/// The top-level error type shared by the `ga-*` crates.
#[derive(Debug, Error)]
pub enum GaError {
    /// Probability outside `[0, 1]`, negative or non-finite timing, or a
    /// timing value with the wrong shape.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The metric computation mode is neither deterministic nor stochastic.
    #[error("unsupported metric computation mode: {0}")]
    UnsupportedMode(String),

    /// A caller-supplied argument is out of range (e.g. a negative step count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lets `Simulator::new` accept a ready `MetricTiming` through the identity `TryInto`.
impl From<std::convert::Infallible> for GaError {
    fn from(e: std::convert::Infallible) -> Self {
        match e {}
    }
}

/// Shorthand result type for all `ga-*` crates.
pub type GaResult<T> = Result<T, GaError>;
