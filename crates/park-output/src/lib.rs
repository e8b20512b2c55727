//! `park-output`: presentation layer for the park simulation.
//!
//! Two backends are provided:
//!
//! | Backend         | Output                                                      |
//! |-----------------|-------------------------------------------------------------|
//! | `ConsoleWriter` | Status lines, park announcements, and the daily recap text  |
//! | `CsvWriter`     | `status_snapshots.csv`, `ride_recap.csv`, `day_summary.csv` |
//!
//! Both implement [`OutputWriter`] and are driven by [`ReportObserver`],
//! which implements `park_sim::ParkObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use park_output::{ConsoleWriter, ReportObserver};
//!
//! let mut obs = ReportObserver::new(ConsoleWriter::new(std::io::stdout()));
//! park.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use console::{ConsoleWriter, format_recap, format_stage, format_status_line};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use row::{DaySummaryRow, RideRecapRow, StatusRow};
pub use writer::OutputWriter;
