//! Fluent builder for constructing a [`Park`].

use park_core::{ParkClock, ParkConfig, RiderId, SimRng};
use park_ride::Ride;

use crate::{ArrivalModel, Park, SimResult, UniformArrivals};

/// Fluent builder for [`Park<A>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                        |
/// |-----------------|------------------------------------------------|
/// | `.arrivals(m)`  | `UniformArrivals { config.max_group_size }`    |
/// | `.rng(r)`       | `SimRng::new(config.seed)`                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut park = ParkBuilder::new(config)
///     .arrivals(FixedArrivals(2))
///     .build()?;
/// park.run(&mut NoopObserver);
/// ```
pub struct ParkBuilder<A: ArrivalModel> {
    config:   ParkConfig,
    arrivals: A,
    rng:      Option<SimRng>,
}

impl ParkBuilder<UniformArrivals> {
    pub fn new(config: ParkConfig) -> Self {
        let arrivals = UniformArrivals { max_group_size: config.max_group_size };
        Self { config, arrivals, rng: None }
    }
}

impl<A: ArrivalModel> ParkBuilder<A> {
    /// Replace the arrival process.
    pub fn arrivals<B: ArrivalModel>(self, arrivals: B) -> ParkBuilder<B> {
        ParkBuilder { config: self.config, arrivals, rng: self.rng }
    }

    /// Supply the RNG instead of seeding one from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration, build every ride, and return a park at
    /// tick 0 with nobody inside.
    pub fn build(self) -> SimResult<Park<A>> {
        self.config.validate()?;

        let rides = self
            .config
            .rides
            .iter()
            .map(Ride::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        let walking = Ride::from_config(&self.config.walking)?;
        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));

        Ok(Park {
            clock:             ParkClock::new(),
            config:            self.config,
            rng,
            arrivals:          self.arrivals,
            rides,
            walking,
            last_rider:        RiderId(0),
            total_visitors:    0,
            total_rides:       0,
            closing_announced: false,
        })
    }
}
