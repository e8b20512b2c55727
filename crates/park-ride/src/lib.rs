//! `park-ride`: riders and the timed batch stage they queue for.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`rider`]   | `Rider`: identity plus ordered ride history          |
//! | [`ride`]    | `Ride`, `LoadCapacity`: FIFO queue with load/unload  |
//! | [`error`]   | `RideError`, `RideResult<T>`                          |
//!
//! # Load/unload contract
//!
//! A `Ride` is driven by the simulation once per tick:
//!
//! ```text
//! if ride.available(now) {
//!     let out = ride.exit_ride();   // riders loaded last cycle leave
//!     ...hand `out` to the next stage...
//!     ride.load_ride(now);          // next batch boards immediately
//! }
//! ```
//!
//! `exit_ride` must never run without a prior `load_ride`, and `load_ride`
//! must follow every `exit_ride` in the same tick.  The same type models
//! both real rides and the unbounded walking stage.

pub mod error;
pub mod ride;
pub mod rider;


pub use error::{RideError, RideResult};
pub use ride::{LoadCapacity, Ride};
pub use rider::Rider;
