//! Human-readable console output.
//!
//! A status line reads
//!
//! ```text
//! 01:15:00[Coaster 3 mins (40)][Chairlift 1 mins (9)][Carousel 6 mins (52)][Walking 4 mins (31)][Park 132)
//! ```
//!
//! and the recap prints one sentence for the park and one per ride.

use std::fmt::Write as _;
use std::io::Write;

use park_core::Tick;
use park_sim::{DailyRecap, StageStatus, StatusSnapshot};

use crate::OutputResult;
use crate::writer::OutputWriter;

/// `[<name> <wait> mins (<queued>)]`
pub fn format_stage(stage: &StageStatus) -> String {
    format!("[{} {} mins ({})]", stage.name, stage.wait_minutes, stage.queue_length)
}

/// Clock, every ride in order, the walking stage, then the park head count.
pub fn format_status_line(status: &StatusSnapshot) -> String {
    let mut line = status.tick.to_string();
    for stage in status.rides.iter().chain(std::iter::once(&status.walking)) {
        line.push_str(&format_stage(stage));
    }
    // The unbalanced bracket is part of the established format.
    let _ = write!(line, "[Park {})", status.visitors_in_park);
    line
}

fn average(value: Option<u64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| v.to_string())
}

/// The end-of-day recap, one line per entry.
pub fn format_recap(recap: &DailyRecap) -> Vec<String> {
    let mut lines = Vec::with_capacity(recap.rides.len() + 2);
    lines.push("Here's how the day at the park went:".to_owned());
    lines.push(format!(
        "The park had {} visitors who rode {} rides averaging about {} rides each",
        recap.total_visitors,
        recap.total_rides,
        average(recap.average_rides_per_visitor),
    ));
    for ride in &recap.rides {
        lines.push(format!(
            "The {} had {} riders in {} loads averaging {} riders each",
            ride.name,
            ride.riders_served,
            ride.loads_completed,
            average(ride.average_riders_per_load),
        ));
    }
    lines
}

// ── ConsoleWriter ─────────────────────────────────────────────────────────────

/// Writes formatted text to any `io::Write` (stdout in the demo binary).
pub struct ConsoleWriter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the inner sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn write_status(&mut self, status: &StatusSnapshot) -> OutputResult<()> {
        writeln!(self.out, "{}", format_status_line(status))?;
        Ok(())
    }

    fn write_event(&mut self, tick: Tick, message: &str) -> OutputResult<()> {
        writeln!(self.out, "{tick} {message}")?;
        Ok(())
    }

    fn write_recap(&mut self, recap: &DailyRecap) -> OutputResult<()> {
        for line in format_recap(recap) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
