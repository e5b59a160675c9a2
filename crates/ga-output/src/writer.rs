//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, StepRow, SummaryRow};

/// Sink for per-step rows and run summaries.
///
/// Errors are stored by [`RunOutputObserver`][crate::RunOutputObserver] and
/// retrieved with `take_error`, since observer hooks cannot fail.
pub trait OutputWriter {
    /// Write one step row.
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()>;

    /// Write one run summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
