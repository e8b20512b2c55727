//! A park visitor.

use std::fmt;
use std::sync::Arc;

use park_core::RiderId;

/// A visitor and the rides they have finished, in order.
///
/// A `Rider` is owned by exactly one queue at a time and moves between
/// queues by value.  It is dropped when the visitor leaves the park.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rider {
    id:      RiderId,
    history: Vec<Arc<str>>,
}

impl Rider {
    pub fn new(id: RiderId) -> Self {
        Self { id, history: Vec::new() }
    }

    #[inline]
    pub fn id(&self) -> RiderId {
        self.id
    }

    /// Record that this rider just got off `ride`.
    pub fn remember_ride(&mut self, ride: Arc<str>) {
        self.history.push(ride);
    }

    /// Ride names in the order they were ridden.
    pub fn history(&self) -> &[Arc<str>] {
        &self.history
    }

    #[inline]
    pub fn ride_count(&self) -> usize {
        self.history.len()
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.history.len();
        write!(f, "{}({} ride{})", self.id, n, if n == 1 { "" } else { "s" })
    }
}
