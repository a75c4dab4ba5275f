//! `StatsOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use evac_sim::{Report, SimObserver, Statistics, TickSummary};
use tracing::warn;

use crate::row::{RunSummaryRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick and run summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `Runner::run` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct StatsOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> StatsOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for StatsOutputObserver<W> {
    fn on_tick_end(&mut self, run: u32, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::new(run, summary));
        self.store_err(result);
    }

    fn on_run_end(&mut self, run: u32, stats: &Statistics) {
        let result = self.writer.write_run_summary(&RunSummaryRow::new(run, stats));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _report: &Report) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
