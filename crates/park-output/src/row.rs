//! Plain data row types written by the CSV backend.

/// One stage's line in a status snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub tick:             u64,
    pub clock:            String,
    pub stage:            String,
    pub wait_minutes:     u64,
    pub queue_length:     usize,
    pub visitors_in_park: usize,
}

/// Day totals for one ride.  `average_riders_per_load` is empty when the
/// ride never loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideRecapRow {
    pub ride:                    String,
    pub riders_served:           u64,
    pub loads_completed:         u64,
    pub average_riders_per_load: Option<u64>,
}

/// Day totals for the park.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummaryRow {
    pub closed_at:                 u64,
    pub total_visitors:            u64,
    pub total_rides:               u64,
    pub average_rides_per_visitor: Option<u64>,
}
