//! Observer trait for status reporting and day-level events.

use park_core::Tick;
use park_ride::Rider;

use crate::{DailyRecap, StatusSnapshot};

/// Callbacks invoked by [`Park::run`][crate::Park::run] and
/// [`Park::tick`][crate::Park::tick].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: status printer
///
/// ```rust,ignore
/// struct StatusPrinter;
///
/// impl ParkObserver for StatusPrinter {
///     fn on_status(&mut self, status: &StatusSnapshot) {
///         println!("{}: {} in park", status.tick, status.visitors_in_park);
///     }
/// }
/// ```
pub trait ParkObserver {
    /// Called once before the first tick.
    fn on_open(&mut self, _tick: Tick) {}

    /// Called on every status interval, before arrivals for that tick.
    fn on_status(&mut self, _status: &StatusSnapshot) {}

    /// Called as a rider walks out of the park.  The rider is dropped right
    /// after this returns.
    fn on_rider_departed(&mut self, _tick: Tick, _rider: &Rider) {}

    /// Called once, when the clock first reaches closing time.  Riders may
    /// still be draining out.
    fn on_closing(&mut self, _tick: Tick) {}

    /// Called once after the last rider has left.
    fn on_closed(&mut self, _recap: &DailyRecap) {}
}

/// A [`ParkObserver`] that does nothing.
pub struct NoopObserver;

impl ParkObserver for NoopObserver {}
