//! Wait clocks: how a metric computation "spends" its duration.
//!
//! # Design
//!
//! A fresh computation costs real time by default.  [`RealClock`] blocks the
//! calling thread for the sampled duration, so a run is literally slow in
//! proportion to its configured timing.
//!
//! [`VirtualClock`] keeps a logical clock instead: waits return immediately
//! and only advance the accumulated elapsed time.  Tests and batch sweeps use
//! it to run thousands of steps without sleeping.
//!
//! Both clocks report the same accounting (`elapsed_secs`, `waits`), so code
//! that reads them is agnostic to the mode.

use std::fmt;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{GaError, GaResult};

// ── WaitMode ──────────────────────────────────────────────────────────────────

/// Selects the [`WaitClock`] a simulator is built with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitMode {
    /// Block the thread for the sampled duration.
    #[default]
    Real,
    /// Advance a logical clock only.
    Virtual,
}

impl WaitMode {
    /// Construct a fresh clock for this mode.
    pub fn make_clock(self) -> Box<dyn WaitClock> {
        match self {
            WaitMode::Real => Box::new(RealClock::new()),
            WaitMode::Virtual => Box::new(VirtualClock::new()),
        }
    }
}

impl fmt::Display for WaitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitMode::Real => f.write_str("real"),
            WaitMode::Virtual => f.write_str("virtual"),
        }
    }
}

// ── WaitClock ─────────────────────────────────────────────────────────────────

/// Spends the duration of one metric computation.
pub trait WaitClock {
    /// Wait `secs` seconds.  `secs` is finite and non-negative.
    fn wait(&mut self, secs: f64) -> GaResult<()>;

    /// Sum of all durations passed to [`wait`](Self::wait).
    fn elapsed_secs(&self) -> f64;

    /// Number of completed waits.
    fn waits(&self) -> u64;

    fn mode(&self) -> WaitMode;
}

// ── RealClock ─────────────────────────────────────────────────────────────────

/// Blocking wait via `std::thread::sleep`.
#[derive(Debug, Default)]
pub struct RealClock {
    elapsed_secs: f64,
    waits:        u64,
}

impl RealClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WaitClock for RealClock {
    fn wait(&mut self, secs: f64) -> GaResult<()> {
        let duration = Duration::try_from_secs_f64(secs).map_err(|e| {
            GaError::InvalidConfiguration(format!("cannot wait {secs}s: {e}"))
        })?;
        if !duration.is_zero() {
            thread::sleep(duration);
        }
        self.elapsed_secs += secs;
        self.waits += 1;
        Ok(())
    }

    fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    fn waits(&self) -> u64 {
        self.waits
    }

    fn mode(&self) -> WaitMode {
        WaitMode::Real
    }
}

// ── VirtualClock ──────────────────────────────────────────────────────────────

/// Logical clock.  Never sleeps.
#[derive(Debug, Default)]
pub struct VirtualClock {
    elapsed_secs: f64,
    waits:        u64,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WaitClock for VirtualClock {
    fn wait(&mut self, secs: f64) -> GaResult<()> {
        self.elapsed_secs += secs;
        self.waits += 1;
        Ok(())
    }

    fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    fn waits(&self) -> u64 {
        self.waits
    }

    fn mode(&self) -> WaitMode {
        WaitMode::Virtual
    }
}
