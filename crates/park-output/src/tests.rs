//! Tests for park-output.

use park_core::Tick;
use park_sim::{DailyRecap, RideRecap, StageStatus, StatusSnapshot};

fn stage(name: &str, wait_minutes: u64, queue_length: usize) -> StageStatus {
    StageStatus { name: name.to_owned(), wait_minutes, queue_length }
}

fn snapshot() -> StatusSnapshot {
    StatusSnapshot {
        tick:             Tick(4_500),
        rides:            vec![stage("Coaster", 3, 40), stage("Chairlift", 1, 9)],
        walking:          stage("Walking", 4, 31),
        visitors_in_park: 80,
    }
}

fn recap() -> DailyRecap {
    DailyRecap {
        closed_at:                 Tick(28_800),
        total_visitors:            10,
        total_rides:               45,
        average_rides_per_visitor: Some(4),
        rides: vec![
            RideRecap {
                name:                    "Coaster".into(),
                riders_served:           30,
                loads_completed:         10,
                average_riders_per_load: Some(3),
            },
            RideRecap {
                name:                    "Carousel".into(),
                riders_served:           0,
                loads_completed:         0,
                average_riders_per_load: None,
            },
        ],
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::{ConsoleWriter, OutputWriter, format_recap, format_stage, format_status_line};

    #[test]
    fn stage_format() {
        assert_eq!(format_stage(&stage("Coaster", 3, 40)), "[Coaster 3 mins (40)]");
    }

    #[test]
    fn status_line_format() {
        assert_eq!(
            format_status_line(&snapshot()),
            "01:15:00[Coaster 3 mins (40)][Chairlift 1 mins (9)][Walking 4 mins (31)][Park 80)"
        );
    }

    #[test]
    fn recap_lines() {
        let lines = format_recap(&recap());
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            "The park had 10 visitors who rode 45 rides averaging about 4 rides each"
        );
        assert_eq!(lines[2], "The Coaster had 30 riders in 10 loads averaging 3 riders each");
        assert_eq!(lines[3], "The Carousel had 0 riders in 0 loads averaging n/a riders each");
    }

    #[test]
    fn recap_with_no_visitors_prints_na() {
        let empty = DailyRecap {
            total_visitors:            0,
            total_rides:               0,
            average_rides_per_visitor: None,
            rides:                     vec![],
            ..recap()
        };
        assert!(format_recap(&empty)[1].contains("averaging about n/a rides"));
    }

    #[test]
    fn console_writer_writes_lines() {
        let mut w = ConsoleWriter::new(Vec::new());
        w.write_event(Tick(0), "Park is open!").unwrap();
        w.write_status(&snapshot()).unwrap();
        w.finish().unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "00:00:00 Park is open!");
        assert!(lines[1].starts_with("01:15:00[Coaster"));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, status_rows};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("status_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "clock", "stage", "wait_minutes", "queue_length", "visitors_in_park"]);

        assert!(dir.path().join("ride_recap.csv").exists());
        assert!(dir.path().join("day_summary.csv").exists());
    }

    #[test]
    fn status_rows_include_walking_last() {
        let rows = status_rows(&snapshot());
        let stages: Vec<&str> = rows.iter().map(|r| r.stage.as_str()).collect();
        assert_eq!(stages, ["Coaster", "Chairlift", "Walking"]);
        assert!(rows.iter().all(|r| r.tick == 4_500 && r.visitors_in_park == 80));
    }

    #[test]
    fn status_written_one_row_per_stage() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_status(&snapshot()).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("status_snapshots.csv"));
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "01:15:00");
        assert_eq!(&rows[0][2], "Coaster");
        assert_eq!(&rows[2][4], "31");
    }

    #[test]
    fn recap_written_with_blank_average() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_recap(&recap()).unwrap();
        w.finish().unwrap();

        let rides = read_rows(&dir.path().join("ride_recap.csv"));
        assert_eq!(rides.len(), 2);
        assert_eq!(&rides[0][3], "3");
        assert_eq!(&rides[1][3], "");

        let summary = read_rows(&dir.path().join("day_summary.csv"));
        assert_eq!(summary.len(), 1);
        assert_eq!(&summary[0][0], "28800");
        assert_eq!(&summary[0][2], "45");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use park_core::{ParkConfig, RideConfig};
    use park_sim::{FixedArrivals, ParkBuilder};

    use crate::{ConsoleWriter, ReportObserver};

    fn tiny_park() -> ParkConfig {
        ParkConfig {
            closing_time_secs:     3_600,
            start_leaving_secs:    600,
            status_interval_secs:  1_800,
            arrival_interval_secs: 3_600,
            rides:                 vec![RideConfig::bounded("Chairlift", 2, 15)],
            ..ParkConfig::default()
        }
    }

    #[test]
    fn full_day_transcript() {
        let mut park = ParkBuilder::new(tiny_park())
            .arrivals(FixedArrivals(2))
            .build()
            .unwrap();
        let mut obs = ReportObserver::new(ConsoleWriter::new(Vec::new())).with_departures(true);
        park.run(&mut obs);
        assert!(obs.take_error().is_none());

        let text = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "00:00:00 Park is open!");
        assert_eq!(lines[1], "00:00:00[Chairlift 0 mins (0)][Walking 0 mins (0)][Park 0)");
        assert!(lines[2].starts_with("00:30:00[Chairlift"));
        assert_eq!(lines[3], "00:52:00 Departing Visitor-1(12 rides)");
        assert_eq!(lines[4], "00:52:00 Departing Visitor-2(12 rides)");
        assert_eq!(lines[5], "01:00:00 The park is closing...");
        assert_eq!(lines[6], "01:00:00 The park is closed!");
        assert_eq!(lines[7], "Here's how the day at the park went:");
        assert_eq!(
            lines[8],
            "The park had 2 visitors who rode 24 rides averaging about 12 rides each"
        );
        assert_eq!(lines[9], "The Chairlift had 24 riders in 239 loads averaging 0 riders each");
    }

    #[test]
    fn departures_silent_by_default() {
        let mut park = ParkBuilder::new(tiny_park())
            .arrivals(FixedArrivals(2))
            .build()
            .unwrap();
        let mut obs = ReportObserver::new(ConsoleWriter::new(Vec::new()));
        park.run(&mut obs);
        let text = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        assert!(!text.contains("Departing"));
    }
}
