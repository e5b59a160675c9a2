//! `ga-core` — foundational types for the collision simulator.
//!
//! This crate is a dependency of every other `ga-*` crate and has no `ga-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`error`]   | `GaError`, `GaResult`                                     |
//! | [`rng`]     | `SimRng` (seedable, draw-counting)                        |
//! | [`timing`]  | `MetricTiming`, `MetricMode`, `TimingValue`               |
//! | [`clock`]   | `WaitClock`, `RealClock`, `VirtualClock`, `WaitMode`      |
//! | [`config`]  | `SimulatorConfig` (TOML / JSON), validation helpers       |

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;
pub mod timing;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{RealClock, VirtualClock, WaitClock, WaitMode};
pub use config::{SimulatorConfig, check_count, check_probability};
pub use error::{GaError, GaResult};
pub use rng::SimRng;
pub use timing::{MetricMode, MetricTiming, TimingValue};
