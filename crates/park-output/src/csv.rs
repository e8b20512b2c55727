//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `status_snapshots.csv`: one row per stage per status tick
//! - `ride_recap.csv`
//! - `day_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use park_sim::{DailyRecap, StatusSnapshot};

use crate::writer::OutputWriter;
use crate::{DaySummaryRow, OutputResult, RideRecapRow, StatusRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    statuses: Writer<File>,
    rides:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut statuses = Writer::from_path(dir.join("status_snapshots.csv"))?;
        statuses.write_record(["tick", "clock", "stage", "wait_minutes", "queue_length", "visitors_in_park"])?;

        let mut rides = Writer::from_path(dir.join("ride_recap.csv"))?;
        rides.write_record(["ride", "riders_served", "loads_completed", "average_riders_per_load"])?;

        let mut summary = Writer::from_path(dir.join("day_summary.csv"))?;
        summary.write_record(["closed_at", "total_visitors", "total_rides", "average_rides_per_visitor"])?;

        Ok(Self {
            statuses,
            rides,
            summary,
            finished: false,
        })
    }
}

/// Flatten a snapshot into one row per ride plus one for walking.
pub fn status_rows(status: &StatusSnapshot) -> Vec<StatusRow> {
    status
        .rides
        .iter()
        .chain(std::iter::once(&status.walking))
        .map(|stage| StatusRow {
            tick:             status.tick.0,
            clock:            status.tick.to_string(),
            stage:            stage.name.clone(),
            wait_minutes:     stage.wait_minutes,
            queue_length:     stage.queue_length,
            visitors_in_park: status.visitors_in_park,
        })
        .collect()
}

fn opt(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_status(&mut self, status: &StatusSnapshot) -> OutputResult<()> {
        for row in status_rows(status) {
            self.statuses.write_record(&[
                row.tick.to_string(),
                row.clock,
                row.stage,
                row.wait_minutes.to_string(),
                row.queue_length.to_string(),
                row.visitors_in_park.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_recap(&mut self, recap: &DailyRecap) -> OutputResult<()> {
        for ride in &recap.rides {
            let row = RideRecapRow {
                ride:                    ride.name.clone(),
                riders_served:           ride.riders_served,
                loads_completed:         ride.loads_completed,
                average_riders_per_load: ride.average_riders_per_load,
            };
            self.rides.write_record(&[
                row.ride,
                row.riders_served.to_string(),
                row.loads_completed.to_string(),
                opt(row.average_riders_per_load),
            ])?;
        }

        let row = DaySummaryRow {
            closed_at:                 recap.closed_at.0,
            total_visitors:            recap.total_visitors,
            total_rides:               recap.total_rides,
            average_rides_per_visitor: recap.average_rides_per_visitor,
        };
        self.summary.write_record(&[
            row.closed_at.to_string(),
            row.total_visitors.to_string(),
            row.total_rides.to_string(),
            opt(row.average_rides_per_visitor),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.statuses.flush()?;
        self.rides.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
