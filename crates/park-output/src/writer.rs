//! The `OutputWriter` trait implemented by all backend writers.

use park_core::Tick;
use park_sim::{DailyRecap, StatusSnapshot};

use crate::OutputResult;

/// Trait implemented by the console and CSV writers.
///
/// Errors are stored by [`ReportObserver`][crate::ReportObserver] and
/// retrieved with `take_error`.
pub trait OutputWriter {
    /// Write one status snapshot.
    fn write_status(&mut self, status: &StatusSnapshot) -> OutputResult<()>;

    /// Write a one-off announcement ("Park is open!", a departure, …).
    ///
    /// Default: announcements are dropped.
    fn write_event(&mut self, _tick: Tick, _message: &str) -> OutputResult<()> {
        Ok(())
    }

    /// Write the end-of-day recap.
    fn write_recap(&mut self, recap: &DailyRecap) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
