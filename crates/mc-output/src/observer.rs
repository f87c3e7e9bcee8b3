//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mc_core::Tick;
use mc_protocol::Completion;
use mc_sim::{SimObserver, TickSummary};

use crate::row::{CompletionRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes completion events and tick summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:          W,
    write_summaries: bool,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, write_summaries: true, last_error: None }
    }

    /// Skip the per-tick summary rows and only record completions.
    pub fn completions_only(mut self) -> Self {
        self.write_summaries = false;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
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

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_message_completed(&mut self, completion: &Completion) {
        let result = self.writer.write_completion(&CompletionRow::from(completion));
        self.store_err(result);
    }

    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        if !self.write_summaries {
            return;
        }
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
