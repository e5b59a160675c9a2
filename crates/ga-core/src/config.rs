//! Simulator configuration, loadable from TOML or JSON.
//!
//! ## Example `simulator.toml`
//!
//! ```toml
//! metric_computation_time = [0.5, 1.5]   # or a single number
//! mode = "stochastic"                    # optional; must match the shape
//! collision_probability = 0.25
//! wait_mode = "virtual"                  # "real" (default) or "virtual"
//! seed = 42                              # optional; entropy when absent
//! individuals = 100
//! ```
//!
//! Missing keys fall back to [`SimulatorConfig::default`].  Nothing is
//! validated during deserialization; call [`SimulatorConfig::validate`] (the
//! simulator builder does) to surface bad values as
//! `GaError::InvalidConfiguration`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{GaError, GaResult, MetricMode, MetricTiming, TimingValue, WaitMode};

/// Top-level simulator configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Single number → deterministic; two-element array → stochastic.
    pub metric_computation_time: TimingValue,

    /// Optional explicit mode tag.  When given it must agree with the shape
    /// of `metric_computation_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Per-step probability that the computation is skipped.
    pub collision_probability: f64,

    pub wait_mode: WaitMode,

    /// Master RNG seed.  The same seed always produces identical logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of individuals to simulate.  Signed so that a negative count
    /// in a config file is reported rather than rejected by the parser.
    pub individuals: i64,
}

impl SimulatorConfig {
    pub fn from_toml_str(s: &str) -> GaResult<Self> {
        toml::from_str(s).map_err(|e| GaError::Parse(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> GaResult<Self> {
        serde_json::from_str(s).map_err(|e| GaError::Parse(e.to_string()))
    }

    /// Load from a `.toml` or `.json` file, chosen by extension.
    pub fn from_path(path: &Path) -> GaResult<Self> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(GaError::Parse(format!(
                "unrecognised config extension for {} (expected .toml or .json)",
                path.display()
            ))),
        }
    }

    /// Resolve the timing policy, checking the optional mode tag.
    pub fn timing(&self) -> GaResult<MetricTiming> {
        let timing = MetricTiming::from_value(&self.metric_computation_time)?;
        if let Some(tag) = &self.mode {
            let declared: MetricMode = tag.parse()?;
            if declared != timing.mode() {
                return Err(GaError::InvalidConfiguration(format!(
                    "mode \"{declared}\" does not match the shape of metric_computation_time ({})",
                    timing.mode()
                )));
            }
        }
        Ok(timing)
    }

    /// Validated collision probability.
    pub fn probability(&self) -> GaResult<f64> {
        check_probability(self.collision_probability)
    }

    /// Validated individual count.
    pub fn individuals(&self) -> GaResult<u64> {
        check_count(self.individuals)
    }

    /// Check every field at once.
    pub fn validate(&self) -> GaResult<()> {
        self.timing()?;
        self.probability()?;
        self.individuals()?;
        Ok(())
    }
}

/// `p` must be finite and within `[0, 1]`.
pub fn check_probability(p: f64) -> GaResult<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GaError::InvalidConfiguration(format!(
            "collision probability must be within [0, 1], got {p}"
        )));
    }
    Ok(p)
}

/// A step count must be non-negative.
pub fn check_count(n: i64) -> GaResult<u64> {
    u64::try_from(n).map_err(|_| {
        GaError::InvalidArgument(format!("number of individuals must be non-negative, got {n}"))
    })
}
