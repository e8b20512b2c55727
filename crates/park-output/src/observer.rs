//! `ReportObserver<W>`: bridges `ParkObserver` to an `OutputWriter`.

use park_core::Tick;
use park_ride::Rider;
use park_sim::{DailyRecap, ParkObserver, StatusSnapshot};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ParkObserver`] that forwards status snapshots, announcements, and
/// the recap to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ParkObserver`
/// methods have no return value.  After `park.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ReportObserver<W: OutputWriter> {
    writer:         W,
    log_departures: bool,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            log_departures: false,
            last_error:     None,
        }
    }

    /// Also announce every rider as they leave the park.
    pub fn with_departures(mut self, on: bool) -> Self {
        self.log_departures = on;
        self
    }

    /// Take the stored write error (if any) after `park.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
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

impl<W: OutputWriter> ParkObserver for ReportObserver<W> {
    fn on_open(&mut self, tick: Tick) {
        let result = self.writer.write_event(tick, "Park is open!");
        self.store_err(result);
    }

    fn on_status(&mut self, status: &StatusSnapshot) {
        let result = self.writer.write_status(status);
        self.store_err(result);
    }

    fn on_rider_departed(&mut self, tick: Tick, rider: &Rider) {
        if self.log_departures {
            let result = self.writer.write_event(tick, &format!("Departing {rider}"));
            self.store_err(result);
        }
    }

    fn on_closing(&mut self, tick: Tick) {
        let result = self.writer.write_event(tick, "The park is closing...");
        self.store_err(result);
    }

    fn on_closed(&mut self, recap: &DailyRecap) {
        let result = self
            .writer
            .write_event(recap.closed_at, "The park is closed!")
            .and_then(|()| self.writer.write_recap(recap))
            .and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
