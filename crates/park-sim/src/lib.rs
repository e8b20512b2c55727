//! `park-sim`: the park's tick loop.
//!
//! # Tick loop
//!
//! ```text
//! while clock < closing || anyone is still in the park:
//!   ① Status   : every status interval, hand a StatusSnapshot to the observer.
//!   ② Arrivals : before the stop-arrival tick, on each arrival interval,
//!                a group of new riders joins the walking line.
//!   ③ Walking  : when the walking stage finishes a cycle, each walker
//!                queues for the ride with the shortest wait, or leaves
//!                the park once the leave threshold has passed.
//!   ④ Rides    : every ride finishing a cycle unloads into the walking
//!                line, stamping its name into each rider's history, then
//!                boards its next batch.
//!   ⑤ Boarding : the walking stage loads everyone in its line.
//!   ⑥ Advance  : clock += 1 s.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use park_core::ParkConfig;
//! use park_sim::{NoopObserver, ParkBuilder};
//!
//! let mut park = ParkBuilder::new(ParkConfig::default()).build()?;
//! let recap = park.run(&mut NoopObserver);
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use arrivals::{ArrivalModel, FixedArrivals, UniformArrivals};
pub use builder::ParkBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, ParkObserver};
pub use sim::Park;
pub use snapshot::{DailyRecap, RideRecap, StageStatus, StatusSnapshot};
