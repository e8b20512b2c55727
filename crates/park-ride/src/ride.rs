//! `Ride`: a timed, capacity-limited, FIFO batch-service stage.
//!
//! # Timing
//!
//! A ride finishes a cycle whenever the clock is an exact multiple of
//! `cycle_secs`.  Cycles are phase-locked to tick 0, not to the tick the
//! current batch boarded, so a ride with a 45 s cycle unloads at 45, 90, 135…
//! no matter when riders joined.  `last_load_tick` only guards against
//! unloading in the same tick a batch boarded.
//!
//! # Queue
//!
//! Riders currently on the ride stay at the head of `queue`; `current_load`
//! says how many of them.  Unloading pops exactly that many from the head,
//! so boarding order is queue order and nobody overtakes.

use std::collections::VecDeque;
use std::sync::Arc;

use park_core::{RideConfig, Tick};

use crate::{RideError, RideResult, Rider};

// ── LoadCapacity ──────────────────────────────────────────────────────────────

/// How many riders one cycle can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadCapacity {
    /// At most this many riders per load (always > 0).
    Bounded(u32),
    /// Everyone in line boards.  Used for the walking stage.
    Unbounded,
}

impl LoadCapacity {
    /// Riders that board when `queued` are waiting.
    #[inline]
    pub fn load_size(self, queued: usize) -> usize {
        match self {
            LoadCapacity::Bounded(n) => queued.min(n as usize),
            LoadCapacity::Unbounded  => queued,
        }
    }

    /// Loads needed to clear a line of `queued` riders.
    #[inline]
    pub fn loads_for(self, queued: usize) -> usize {
        match self {
            LoadCapacity::Bounded(n) => queued.div_ceil(n as usize),
            LoadCapacity::Unbounded  => usize::from(queued > 0),
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, LoadCapacity::Unbounded)
    }
}

impl From<Option<u32>> for LoadCapacity {
    fn from(capacity: Option<u32>) -> Self {
        capacity.map_or(LoadCapacity::Unbounded, LoadCapacity::Bounded)
    }
}

// ── Ride ──────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Ride {
    name:           Arc<str>,
    capacity:       LoadCapacity,
    cycle_secs:     u64,
    last_load_tick: Tick,
    /// Riders at the head of `queue` who are on the ride right now.
    current_load:   usize,
    queue:          VecDeque<Rider>,
    total_loads:    u64,
    total_riders:   u64,
}

impl Ride {
    /// Create an idle ride with an empty line.
    pub fn new(name: &str, capacity: LoadCapacity, cycle_secs: u64) -> RideResult<Self> {
        if cycle_secs == 0 {
            return Err(RideError::InvalidRide {
                name:   name.to_owned(),
                reason: "cycle length must be positive",
            });
        }
        if capacity == LoadCapacity::Bounded(0) {
            return Err(RideError::InvalidRide {
                name:   name.to_owned(),
                reason: "capacity must be positive",
            });
        }
        Ok(Self {
            name: Arc::from(name),
            capacity,
            cycle_secs,
            last_load_tick: Tick::ZERO,
            current_load:   0,
            queue:          VecDeque::new(),
            total_loads:    0,
            total_riders:   0,
        })
    }

    pub fn from_config(config: &RideConfig) -> RideResult<Self> {
        Self::new(&config.name, config.capacity.into(), config.cycle_secs)
    }

    // ── Service cycle ─────────────────────────────────────────────────────

    /// `true` when a cycle ends at `now` and the current batch may unload.
    pub fn available(&self, now: Tick) -> bool {
        self.last_load_tick != now && now.is_multiple_of(self.cycle_secs)
    }

    /// Estimated seconds a rider joining the line now would wait.
    ///
    /// Assumes nobody else joins, so it is a comparison heuristic and
    /// underestimates under load.
    pub fn wait_time_secs(&self) -> u64 {
        self.capacity.loads_for(self.queue.len()) as u64 * self.cycle_secs
    }

    /// Join the back of the line.
    pub fn enter_line(&mut self, rider: Rider) {
        self.queue.push_back(rider);
    }

    /// Unload the current batch from the head of the line.
    ///
    /// # Panics
    ///
    /// Panics if fewer riders are queued than were loaded, which means the
    /// load/unload contract was broken.
    pub fn exit_ride(&mut self) -> Vec<Rider> {
        assert!(
            self.queue.len() >= self.current_load,
            "ride {}: {} riders aboard but only {} queued",
            self.name,
            self.current_load,
            self.queue.len(),
        );
        let out: Vec<Rider> = self.queue.drain(..self.current_load).collect();
        self.total_riders += out.len() as u64;
        self.current_load = 0;
        out
    }

    /// Board the next batch at `now`.  Riders who do not fit keep their place.
    pub fn load_ride(&mut self, now: Tick) {
        self.last_load_tick = now;
        self.current_load = self.capacity.load_size(self.queue.len());
        self.total_loads += 1;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the name, cheap to stamp into rider histories.
    pub fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    pub fn capacity(&self) -> LoadCapacity {
        self.capacity
    }

    pub fn cycle_secs(&self) -> u64 {
        self.cycle_secs
    }

    pub fn last_load_tick(&self) -> Tick {
        self.last_load_tick
    }

    /// Riders aboard right now.
    pub fn current_load(&self) -> usize {
        self.current_load
    }

    /// Everyone held by this ride: riders aboard plus riders waiting.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Riders in line order, those aboard first.
    pub fn riders(&self) -> impl Iterator<Item = &Rider> {
        self.queue.iter()
    }

    pub fn total_loads(&self) -> u64 {
        self.total_loads
    }

    pub fn total_riders(&self) -> u64 {
        self.total_riders
    }
}
