//! Unit tests for park-core primitives.

#[cfg(test)]
mod ids {
    use crate::RiderId;

    #[test]
    fn display_is_visitor_label() {
        assert_eq!(RiderId(7).to_string(), "Visitor-7");
    }

    #[test]
    fn next_is_sequential() {
        assert_eq!(RiderId(1).next(), RiderId(2));
        assert!(RiderId(1) < RiderId(2));
    }
}

#[cfg(test)]
mod time {
    use crate::{ParkClock, Tick};

    #[test]
    fn multiple_of_is_phase_locked_to_zero() {
        assert!(Tick(0).is_multiple_of(15));
        assert!(Tick(45).is_multiple_of(15));
        assert!(!Tick(46).is_multiple_of(15));
    }

    #[test]
    fn zero_period_never_matches() {
        assert!(!Tick(0).is_multiple_of(0));
        assert!(!Tick(10).is_multiple_of(0));
    }

    #[test]
    fn hms_breakdown() {
        assert_eq!(Tick(0).hms(), (0, 0, 0));
        assert_eq!(Tick(3_725).hms(), (1, 2, 5));
    }

    #[test]
    fn display_zero_padded() {
        assert_eq!(Tick(0).to_string(), "00:00:00");
        assert_eq!(Tick(3_725).to_string(), "01:02:05");
        assert_eq!(Tick(36_000 + 59 * 60 + 59).to_string(), "10:59:59");
    }

    #[test]
    fn clock_advances_one_second() {
        let mut clock = ParkClock::new();
        assert_eq!(clock.now(), Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now(), Tick(2));
        assert_eq!(clock.to_string(), "00:00:02");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(1..=10);
            let b: u32 = r2.gen_range(1..=10);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(1..=10);
            assert!((1..=10).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use std::io::Cursor;

    use crate::{ParkConfig, ParkError, RideConfig, Tick};

    #[test]
    fn default_is_valid() {
        let cfg = ParkConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.rides.len(), 3);
        assert_eq!(cfg.walking.capacity, None);
        assert_eq!(cfg.walking.cycle_secs, 240);
    }

    #[test]
    fn derived_ticks() {
        let cfg = ParkConfig {
            closing_time_secs:  3_600,
            start_leaving_secs: 600,
            ..ParkConfig::default()
        };
        assert_eq!(cfg.stop_arrival_tick(), Tick(1_800));
        assert_eq!(cfg.start_leaving_tick(), Tick(3_000));
        assert_eq!(cfg.closing_tick(), Tick(3_600));
    }

    #[test]
    fn start_leaving_saturates() {
        let cfg = ParkConfig {
            closing_time_secs:  100,
            start_leaving_secs: 500,
            ..ParkConfig::default()
        };
        assert_eq!(cfg.start_leaving_tick(), Tick(0));
    }

    #[test]
    fn zero_closing_time_rejected() {
        let cfg = ParkConfig { closing_time_secs: 0, ..ParkConfig::default() };
        assert!(matches!(cfg.validate(), Err(ParkError::Config(_))));
    }

    #[test]
    fn zero_status_interval_rejected() {
        let cfg = ParkConfig { status_interval_secs: 0, ..ParkConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_cycle_rejected() {
        let cfg = ParkConfig {
            rides: vec![RideConfig::bounded("Coaster", 12, 0)],
            ..ParkConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = ParkConfig {
            rides: vec![RideConfig::bounded("Coaster", 0, 45)],
            ..ParkConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_ride_list_rejected() {
        let cfg = ParkConfig { rides: vec![], ..ParkConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let cfg = ParkConfig {
            rides: vec![
                RideConfig::bounded("Coaster", 12, 45),
                RideConfig::bounded("Coaster", 2, 15),
            ],
            ..ParkConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn walking_name_may_not_shadow_a_ride() {
        let cfg = ParkConfig {
            walking: RideConfig::unbounded("Coaster", 240),
            ..ParkConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_group_size_is_legal() {
        let cfg = ParkConfig { max_group_size: 0, ..ParkConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn json_partial_override() {
        let json = r#"{
            "closing_time_secs": 3600,
            "rides": [ { "name": "Chairlift", "capacity": 2, "cycle_secs": 15 } ]
        }"#;
        let cfg = ParkConfig::from_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(cfg.closing_time_secs, 3_600);
        assert_eq!(cfg.rides, vec![RideConfig::bounded("Chairlift", 2, 15)]);
        // untouched fields keep their defaults
        assert_eq!(cfg.arrival_interval_secs, 60);
        assert_eq!(cfg.walking.name, "Walking");
    }

    #[test]
    fn json_garbage_is_parse_error() {
        let err = ParkConfig::from_json_reader(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, ParkError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ParkConfig::from_json_path(std::path::Path::new("/nonexistent/park.json"))
            .unwrap_err();
        assert!(matches!(err, ParkError::Io(_)));
    }
}
