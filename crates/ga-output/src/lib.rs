//! `ga-output` — CSV output for simulator runs.
//!
//! [`RunOutputObserver`] implements `ga_sim::RunObserver` and forwards rows
//! to an [`OutputWriter`].  [`CsvWriter`] is the one backend:
//!
//! | File              | Columns                                                    |
//! |-------------------|------------------------------------------------------------|
//! | `step_logs.csv`   | `step, is_collision, metric_computation_time_seconds`      |
//! | `run_summary.csv` | `steps, collisions, collision_rate, total_…, mean_…`       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ga_output::{CsvWriter, RunOutputObserver};
//!
//! let mut obs = RunOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! sim.run_observed(100, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::{StepRow, SummaryRow};
pub use writer::OutputWriter;
