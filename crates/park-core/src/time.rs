//! Simulation time model.
//!
//! # Design
//!
//! One `Tick` is one simulated second.  Time starts at 0 when the park opens
//! and only ever moves forward by one tick at a time.  All cycle arithmetic
//! (ride phases, arrival intervals, status intervals) is done on the raw
//! second count, so readiness checks are exact integer modulo tests.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation time in seconds since the park opened.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` when this tick falls on a boundary of a `period`-second cycle.
    ///
    /// Cycles are phase-locked to tick 0.  A zero period never matches.
    #[inline]
    pub fn is_multiple_of(self, period: u64) -> bool {
        period != 0 && self.0.is_multiple_of(period)
    }

    /// Break the tick into (hours, minutes, seconds) since opening.
    pub fn hms(self) -> (u64, u32, u32) {
        let hours = self.0 / 3_600;
        let minutes = ((self.0 % 3_600) / 60) as u32;
        let seconds = (self.0 % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    /// `HH:MM:SS`, zero-padded.  Hours keep growing past 99 rather than wrap.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── ParkClock ─────────────────────────────────────────────────────────────────

/// The park's clock.  Owned exclusively by the simulation.
#[derive(Clone, Debug, Default)]
pub struct ParkClock {
    current_tick: Tick,
}

impl ParkClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Advance the clock by one second.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }
}

impl fmt::Display for ParkClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.current_tick.fmt(f)
    }
}
