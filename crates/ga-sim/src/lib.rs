//! `ga-sim` — step loop for the collision simulator.
//!
//! # Step loop
//!
//! ```text
//! for individual in 0..n:
//!   ① Collision check — one uniform draw; hit iff draw <= p.
//!   ② Hit            — log 0.0, skip the computation.
//!   ③ Miss           — sample a duration from the timing policy, wait it
//!                      out on the clock (real sleep or virtual), log it.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ga_core::WaitMode;
//! use ga_sim::SimulatorBuilder;
//!
//! let mut sim = SimulatorBuilder::new((1.0, 2.0), 0.3)
//!     .seed(42)
//!     .wait_mode(WaitMode::Virtual)
//!     .build()?;
//! let logs = sim.run(1_000)?;
//! ```

pub mod builder;
pub mod observer;
pub mod simulator;
pub mod step;


pub use builder::SimulatorBuilder;
pub use observer::{NoopObserver, RunObserver};
pub use simulator::{Simulator, Steps};
pub use step::{RunStepLog, RunSummary};
