//! The `Park` struct and its tick loop.

use std::sync::Arc;

use tracing::{debug, info, trace};

use park_core::{ParkClock, ParkConfig, RiderId, SimRng, Tick};
use park_ride::{Ride, Rider};

use crate::{ArrivalModel, DailyRecap, ParkObserver, RideRecap, StageStatus, StatusSnapshot};

/// The park simulation.
///
/// Owns the clock, every ride, the walking stage, and every rider inside
/// them.  Create via [`ParkBuilder`][crate::ParkBuilder].
pub struct Park<A: ArrivalModel> {
    pub(crate) config:   ParkConfig,
    pub(crate) clock:    ParkClock,
    pub(crate) rng:      SimRng,
    pub(crate) arrivals: A,

    /// Real rides in configuration order.  Routing ties go to the earliest.
    pub(crate) rides:   Vec<Ride>,
    /// Transit between rides, and the holding area for new arrivals.
    pub(crate) walking: Ride,

    /// Most recently issued rider id; the first visitor is `RiderId(1)`.
    pub(crate) last_rider:        RiderId,
    pub(crate) total_visitors:    u64,
    /// Rides taken by visitors who have already left.
    pub(crate) total_rides:       u64,
    pub(crate) closing_announced: bool,
}

impl<A: ArrivalModel> Park<A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the day: tick until closing time has passed and the park has
    /// drained, then return the recap.
    pub fn run<O: ParkObserver>(&mut self, observer: &mut O) -> DailyRecap {
        let opened = self.clock.now();
        info!(tick = %opened, rides = self.rides.len(), "park is open");
        observer.on_open(opened);

        while !self.is_finished() {
            self.tick(observer);
        }

        let recap = self.daily_recap();
        info!(
            tick = %recap.closed_at,
            visitors = recap.total_visitors,
            rides = recap.total_rides,
            "park is closed"
        );
        observer.on_closed(&recap);
        recap
    }

    /// Process exactly one second.  Ignores closing time, so tests can step
    /// past the end of the day.
    pub fn tick<O: ParkObserver>(&mut self, observer: &mut O) {
        let now = self.clock.now();

        if now.is_multiple_of(self.config.status_interval_secs) {
            observer.on_status(&self.status_snapshot());
        }

        if now < self.config.stop_arrival_tick()
            && now.is_multiple_of(self.config.arrival_interval_secs)
        {
            self.admit_group(now);
        }

        if self.walking.available(now) {
            self.finish_walk(now, observer);
        }

        self.cycle_rides(now);

        // Everyone now in the walking line starts walking together.
        self.walking.load_ride(now);

        self.clock.advance();

        let now = self.clock.now();
        if !self.closing_announced && now >= self.config.closing_tick() {
            self.closing_announced = true;
            info!(tick = %now, in_park = self.visitors_in_park(), "park is closing");
            observer.on_closing(now);
        }
    }

    /// `true` once closing time has been reached and nobody is left inside.
    pub fn is_finished(&self) -> bool {
        self.clock.now() >= self.config.closing_tick() && self.visitors_in_park() == 0
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn clock(&self) -> Tick {
        self.clock.now()
    }

    pub fn config(&self) -> &ParkConfig {
        &self.config
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    pub fn walking(&self) -> &Ride {
        &self.walking
    }

    /// Riders on or queued for any ride, plus everyone walking.
    pub fn visitors_in_park(&self) -> usize {
        self.rides.iter().map(Ride::queue_len).sum::<usize>() + self.walking.queue_len()
    }

    pub fn total_visitors(&self) -> u64 {
        self.total_visitors
    }

    pub fn total_rides(&self) -> u64 {
        self.total_rides
    }

    /// The ride a rider routed right now would queue for.
    pub fn ride_with_shortest_wait(&self) -> &Ride {
        &self.rides[self.shortest_wait_index()]
    }

    pub fn status_snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            tick:             self.clock.now(),
            rides:            self.rides.iter().map(StageStatus::of).collect(),
            walking:          StageStatus::of(&self.walking),
            visitors_in_park: self.visitors_in_park(),
        }
    }

    pub fn daily_recap(&self) -> DailyRecap {
        DailyRecap {
            closed_at:                 self.clock.now(),
            total_visitors:            self.total_visitors,
            total_rides:               self.total_rides,
            average_rides_per_visitor: self.total_rides.checked_div(self.total_visitors),
            rides:                     self.rides.iter().map(RideRecap::of).collect(),
        }
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn admit_group(&mut self, now: Tick) {
        let size = self.arrivals.group_size(now, &mut self.rng);
        if size == 0 {
            return;
        }
        for _ in 0..size {
            self.last_rider = self.last_rider.next();
            self.walking.enter_line(Rider::new(self.last_rider));
        }
        self.total_visitors += u64::from(size);
        debug!(tick = %now, size, total = self.total_visitors, "group arrived");
    }

    /// Walkers reach their next stop: a ride line, or the exit.
    fn finish_walk<O: ParkObserver>(&mut self, now: Tick, observer: &mut O) {
        let leaving = now >= self.config.start_leaving_tick();
        for rider in self.walking.exit_ride() {
            if leaving {
                self.total_rides += rider.ride_count() as u64;
                debug!(tick = %now, rider = %rider, "departing");
                observer.on_rider_departed(now, &rider);
            } else {
                // Re-evaluated per rider: each one lengthens the line it joins.
                let idx = self.shortest_wait_index();
                self.rides[idx].enter_line(rider);
            }
        }
    }

    fn cycle_rides(&mut self, now: Tick) {
        for ride in self.rides.iter_mut().filter(|r| r.available(now)) {
            let name = ride.name_arc();
            let finished = ride.exit_ride();
            let unloaded = finished.len();
            for mut rider in finished {
                rider.remember_ride(Arc::clone(&name));
                self.walking.enter_line(rider);
            }
            ride.load_ride(now);
            trace!(tick = %now, ride = %name, unloaded, boarded = ride.current_load(), "cycle");
        }
    }

    /// First ride with the minimum estimated wait.
    fn shortest_wait_index(&self) -> usize {
        self.rides
            .iter()
            .enumerate()
            .min_by_key(|(_, ride)| ride.wait_time_secs())
            .map_or(0, |(i, _)| i)
    }
}
