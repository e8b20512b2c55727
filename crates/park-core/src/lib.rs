//! `park-core`: foundational types for the amusement-park simulation.
//!
//! This crate is a dependency of every other `park-*` crate and has no
//! `park-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`ids`]      | `RiderId`                                          |
//! | [`time`]     | `Tick`, `ParkClock`                                |
//! | [`rng`]      | `SimRng` (seedable, injected into the simulation)  |
//! | [`config`]   | `ParkConfig`, `RideConfig`                         |
//! | [`error`]    | `ParkError`, `ParkResult`                          |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ParkConfig, RideConfig};
pub use error::{ParkError, ParkResult};
pub use ids::RiderId;
pub use rng::SimRng;
pub use time::{ParkClock, Tick};
