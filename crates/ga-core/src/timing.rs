//! Metric computation timing policy.
//!
//! # Mode selection
//!
//! The configured timing value decides the mode by its shape:
//!
//! | Value          | Mode            | Per-step duration                        |
//! |----------------|-----------------|------------------------------------------|
//! | `t`            | deterministic   | always `t`                               |
//! | `[low, high]`  | stochastic      | uniform in `[min, max]`, both inclusive  |
//!
//! The shape is inspected exactly once, when a [`MetricTiming`] is built.
//! After that the step loop matches on the stored tag and never re-inspects
//! the raw value.  Durations must fit in a `std::time::Duration` (about
//! 1.8e19 s), so every accepted policy can actually be waited out.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{GaError, GaResult, SimRng};

// ── MetricMode ────────────────────────────────────────────────────────────────

/// The two computation modes, without their parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricMode {
    Deterministic,
    Stochastic,
}

impl fmt::Display for MetricMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricMode::Deterministic => f.write_str("deterministic"),
            MetricMode::Stochastic => f.write_str("stochastic"),
        }
    }
}

impl FromStr for MetricMode {
    type Err = GaError;

    fn from_str(s: &str) -> GaResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deterministic" => Ok(MetricMode::Deterministic),
            "stochastic" => Ok(MetricMode::Stochastic),
            other => Err(GaError::UnsupportedMode(other.to_owned())),
        }
    }
}

// ── TimingValue ───────────────────────────────────────────────────────────────

/// Raw, unvalidated timing value as it appears in a config file.
///
/// Accepts either a bare number or an array.  Arrays of any length
/// deserialize; [`MetricTiming::from_value`] rejects everything but two
/// elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimingValue {
    Single(f64),
    Range(Vec<f64>),
}

impl Default for TimingValue {
    fn default() -> Self {
        TimingValue::Single(0.0)
    }
}

// ── MetricTiming ──────────────────────────────────────────────────────────────

/// Validated timing policy.
///
/// Only the checked constructors produce one, so every instance holds finite,
/// non-negative durations representable as a `std::time::Duration`, with
/// stochastic bounds stored sorted (`low <= high`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MetricTiming(Repr);

#[derive(Copy, Clone, Debug, PartialEq)]
enum Repr {
    Deterministic(f64),
    Stochastic { low: f64, high: f64 },
}

impl MetricTiming {
    /// A fixed duration of `secs` seconds.
    pub fn deterministic(secs: f64) -> GaResult<Self> {
        check_duration(secs)?;
        Ok(MetricTiming(Repr::Deterministic(secs)))
    }

    /// A duration drawn uniformly from `[min(a, b), max(a, b)]`.
    pub fn stochastic(a: f64, b: f64) -> GaResult<Self> {
        check_duration(a)?;
        check_duration(b)?;
        let (low, high) = (a.min(b), a.max(b));
        // Inclusive float sampling scales the width by 1 / (1 - ε).
        if !((high - low) / (1.0 - f64::EPSILON)).is_finite() {
            return Err(GaError::InvalidConfiguration(format!(
                "metric computation time range [{low}, {high}] is too wide to sample"
            )));
        }
        Ok(MetricTiming(Repr::Stochastic { low, high }))
    }

    /// Resolve the mode from the shape of a raw config value.
    pub fn from_value(value: &TimingValue) -> GaResult<Self> {
        match value {
            TimingValue::Single(secs) => Self::deterministic(*secs),
            TimingValue::Range(bounds) => match bounds.as_slice() {
                [a, b] => Self::stochastic(*a, *b),
                other => Err(GaError::InvalidConfiguration(format!(
                    "timing range must have exactly 2 elements, got {}",
                    other.len()
                ))),
            },
        }
    }

    pub fn mode(&self) -> MetricMode {
        match self.0 {
            Repr::Deterministic(_) => MetricMode::Deterministic,
            Repr::Stochastic { .. } => MetricMode::Stochastic,
        }
    }

    /// Duration for one fresh computation.
    ///
    /// Deterministic mode never touches `rng`.  Stochastic mode draws once,
    /// except for a degenerate range where the single possible value is
    /// returned directly.
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        match self.0 {
            Repr::Deterministic(secs) => secs,
            Repr::Stochastic { low, high } if low == high => low,
            Repr::Stochastic { low, high } => rng.uniform_inclusive(low, high),
        }
    }

    /// Inclusive `(min, max)` of the durations this policy can produce.
    pub fn bounds(&self) -> (f64, f64) {
        match self.0 {
            Repr::Deterministic(secs) => (secs, secs),
            Repr::Stochastic { low, high } => (low, high),
        }
    }
}

impl TryFrom<f64> for MetricTiming {
    type Error = GaError;

    fn try_from(secs: f64) -> GaResult<Self> {
        Self::deterministic(secs)
    }
}

impl TryFrom<(f64, f64)> for MetricTiming {
    type Error = GaError;

    fn try_from((a, b): (f64, f64)) -> GaResult<Self> {
        Self::stochastic(a, b)
    }
}

impl TryFrom<&TimingValue> for MetricTiming {
    type Error = GaError;

    fn try_from(value: &TimingValue) -> GaResult<Self> {
        Self::from_value(value)
    }
}

impl fmt::Display for MetricTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Deterministic(secs) => write!(f, "deterministic {secs}s"),
            Repr::Stochastic { low, high } => write!(f, "stochastic [{low}s, {high}s]"),
        }
    }
}

/// `secs` must be finite, non-negative and fit in a `Duration`.
fn check_duration(secs: f64) -> GaResult<()> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(GaError::InvalidConfiguration(format!(
            "metric computation time must be a finite non-negative number, got {secs}"
        )));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| {
        GaError::InvalidConfiguration(format!("metric computation time {secs}s is too large: {e}"))
    })?;
    Ok(())
}
