//! Structured status and recap data handed to presentation layers.

use serde::Serialize;

use park_core::Tick;
use park_ride::Ride;

/// Queue state of one stage at a status tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageStatus {
    pub name:         String,
    /// Estimated wait in whole minutes (rounded down).
    pub wait_minutes: u64,
    /// Riders held by the stage, aboard or waiting.
    pub queue_length: usize,
}

impl StageStatus {
    pub fn of(ride: &Ride) -> Self {
        Self {
            name:         ride.name().to_owned(),
            wait_minutes: ride.wait_time_secs() / 60,
            queue_length: ride.queue_len(),
        }
    }
}

/// Everything a status line shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub tick:             Tick,
    /// Real rides in configuration order.
    pub rides:            Vec<StageStatus>,
    pub walking:          StageStatus,
    pub visitors_in_park: usize,
}

/// Day totals for one ride.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RideRecap {
    pub name:                    String,
    pub riders_served:           u64,
    pub loads_completed:         u64,
    /// `None` if the ride never loaded.
    pub average_riders_per_load: Option<u64>,
}

impl RideRecap {
    pub fn of(ride: &Ride) -> Self {
        Self {
            name:                    ride.name().to_owned(),
            riders_served:           ride.total_riders(),
            loads_completed:         ride.total_loads(),
            average_riders_per_load: ride.total_riders().checked_div(ride.total_loads()),
        }
    }
}

/// Day totals for the whole park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecap {
    /// Tick at which the last rider left (or closing time, if later).
    pub closed_at:                 Tick,
    pub total_visitors:            u64,
    /// Rides taken by all departed visitors.
    pub total_rides:               u64,
    /// `None` if nobody came.
    pub average_rides_per_visitor: Option<u64>,
    pub rides:                     Vec<RideRecap>,
}
