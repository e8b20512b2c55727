//! Park configuration.
//!
//! Typically loaded from a JSON file by the application and passed to
//! `ParkBuilder`.  Every field has a default, so a config file only needs
//! to name what it overrides.
//!
//! ```json
//! {
//!   "closing_time_secs": 28800,
//!   "start_leaving_secs": 1800,
//!   "status_interval_secs": 900,
//!   "rides": [
//!     { "name": "Coaster", "capacity": 12, "cycle_secs": 45 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ParkError, ParkResult, Tick};

// ── RideConfig ────────────────────────────────────────────────────────────────

/// Static parameters of one ride (or of the walking stage).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideConfig {
    pub name: String,
    /// Riders per load.  `None` means every queued rider boards at once.
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Seconds between loads.
    pub cycle_secs: u64,
}

impl RideConfig {
    pub fn bounded(name: impl Into<String>, capacity: u32, cycle_secs: u64) -> Self {
        Self { name: name.into(), capacity: Some(capacity), cycle_secs }
    }

    pub fn unbounded(name: impl Into<String>, cycle_secs: u64) -> Self {
        Self { name: name.into(), capacity: None, cycle_secs }
    }

    fn validate(&self) -> ParkResult<()> {
        if self.name.trim().is_empty() {
            return Err(ParkError::Config("ride name must not be empty".into()));
        }
        if self.cycle_secs == 0 {
            return Err(ParkError::Config(format!(
                "ride {:?}: cycle_secs must be positive",
                self.name
            )));
        }
        if self.capacity == Some(0) {
            return Err(ParkError::Config(format!(
                "ride {:?}: capacity must be positive",
                self.name
            )));
        }
        Ok(())
    }
}

// ── ParkConfig ────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkConfig {
    /// Length of the opening day in seconds.
    pub closing_time_secs: u64,

    /// Seconds before closing time at which visitors stop heading to rides
    /// and walk out instead.
    pub start_leaving_secs: u64,

    /// Emit a status snapshot every N seconds.
    pub status_interval_secs: u64,

    /// Seconds between arriving groups.
    pub arrival_interval_secs: u64,

    /// Largest arriving group.  0 disables arrivals.
    pub max_group_size: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Real rides, in routing and reporting order.
    pub rides: Vec<RideConfig>,

    /// The walking stage visitors pass through between rides.
    pub walking: RideConfig,
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            closing_time_secs:     8 * 3_600,
            start_leaving_secs:    30 * 60,
            status_interval_secs:  15 * 60,
            arrival_interval_secs: 60,
            max_group_size:        10,
            seed:                  42,
            rides: vec![
                RideConfig::bounded("Coaster", 12, 45),
                RideConfig::bounded("Chairlift", 2, 15),
                RideConfig::bounded("Carousel", 40, 360),
            ],
            walking: RideConfig::unbounded("Walking", 240),
        }
    }
}

impl ParkConfig {
    /// Arrivals stop halfway through the day.
    #[inline]
    pub fn stop_arrival_tick(&self) -> Tick {
        Tick(self.closing_time_secs / 2)
    }

    /// From this tick on, riders finishing a walk leave instead of queueing.
    #[inline]
    pub fn start_leaving_tick(&self) -> Tick {
        Tick(self.closing_time_secs.saturating_sub(self.start_leaving_secs))
    }

    #[inline]
    pub fn closing_tick(&self) -> Tick {
        Tick(self.closing_time_secs)
    }

    /// Reject configurations the tick loop cannot run.
    pub fn validate(&self) -> ParkResult<()> {
        if self.closing_time_secs == 0 {
            return Err(ParkError::Config("closing_time_secs must be positive".into()));
        }
        if self.status_interval_secs == 0 {
            return Err(ParkError::Config("status_interval_secs must be positive".into()));
        }
        if self.arrival_interval_secs == 0 {
            return Err(ParkError::Config("arrival_interval_secs must be positive".into()));
        }
        if self.rides.is_empty() {
            return Err(ParkError::Config("at least one ride must be configured".into()));
        }

        let mut names = HashSet::with_capacity(self.rides.len() + 1);
        for ride in self.rides.iter().chain(std::iter::once(&self.walking)) {
            ride.validate()?;
            if !names.insert(ride.name.as_str()) {
                return Err(ParkError::Config(format!("duplicate ride name {:?}", ride.name)));
            }
        }
        Ok(())
    }

    /// Load a config from a JSON file.
    pub fn from_json_path(path: &Path) -> ParkResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(file)
    }

    /// Like [`from_json_path`](Self::from_json_path) but accepts any `Read`
    /// source.
    pub fn from_json_reader<R: Read>(reader: R) -> ParkResult<Self> {
        serde_json::from_reader(reader).map_err(|e| ParkError::Parse(e.to_string()))
    }
}
