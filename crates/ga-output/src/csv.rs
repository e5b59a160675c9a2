//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_logs.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepRow, SummaryRow};

pub const STEP_LOGS_FILE: &str = "step_logs.csv";
pub const RUN_SUMMARY_FILE: &str = "run_summary.csv";

/// Writes run output to two CSV files.
pub struct CsvWriter {
    steps:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (creating `dir` if needed) and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut steps = Writer::from_path(dir.join(STEP_LOGS_FILE))?;
        steps.write_record(["step", "is_collision", "metric_computation_time_seconds"])?;

        let mut summaries = Writer::from_path(dir.join(RUN_SUMMARY_FILE))?;
        summaries.write_record([
            "steps",
            "collisions",
            "collision_rate",
            "total_computation_time_seconds",
            "mean_computation_time_seconds",
        ])?;

        Ok(Self {
            steps,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.step.to_string(),
            (row.is_collision as u8).to_string(),
            row.metric_computation_time_seconds.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.steps.to_string(),
            row.collisions.to_string(),
            row.collision_rate.to_string(),
            row.total_computation_time_seconds.to_string(),
            row.mean_computation_time_seconds
                .map(|m| m.to_string())
                .unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
