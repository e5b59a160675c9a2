//! `RunOutputObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use ga_sim::{RunObserver, RunStepLog, RunSummary};

use crate::row::{StepRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that streams every step and the final summary to any
/// [`OutputWriter`] backend.
///
/// Rows are written as the run progresses, so a run aborted by an error
/// still leaves the steps completed before it on disk.  Writer errors are
/// stored internally because `RunObserver` methods have no return value;
/// check [`take_error`][Self::take_error] after the run returns.
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows:       0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Step rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush the writer.  Needed after a failed run, where `on_run_end` is
    /// never called.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for RunOutputObserver<W> {
    fn on_step(&mut self, index: u64, log: &RunStepLog) {
        let result = self.writer.write_step(&StepRow::new(index, log));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = self.writer.write_summary(&SummaryRow::from(summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
