//! The `ArrivalModel` trait: how many visitors walk through the gate.

use park_core::{SimRng, Tick};

/// Pluggable arrival process.
///
/// The simulation decides *when* a group may arrive (every arrival interval
/// before the stop-arrival tick); the model decides *how many* are in it.
/// All randomness must come from the supplied `rng` so runs stay
/// reproducible from the seed.
pub trait ArrivalModel {
    /// Size of the group arriving at `tick`.  0 means nobody comes.
    fn group_size(&mut self, tick: Tick, rng: &mut SimRng) -> u32;
}

/// Groups of uniformly random size in `1..=max_group_size`.
#[derive(Copy, Clone, Debug)]
pub struct UniformArrivals {
    pub max_group_size: u32,
}

impl ArrivalModel for UniformArrivals {
    fn group_size(&mut self, _tick: Tick, rng: &mut SimRng) -> u32 {
        if self.max_group_size == 0 {
            return 0;
        }
        rng.gen_range(1..=self.max_group_size)
    }
}

/// Every group has exactly this many riders.  Handy for scripted runs.
#[derive(Copy, Clone, Debug)]
pub struct FixedArrivals(pub u32);

impl ArrivalModel for FixedArrivals {
    fn group_size(&mut self, _tick: Tick, _rng: &mut SimRng) -> u32 {
        self.0
    }
}
