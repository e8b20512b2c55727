//! Rider identity.
//!
//! Riders are numbered sequentially from 1 in arrival order.  The number is
//! the identity; the `Visitor-N` label is only a display form.

use std::fmt;

/// Sequential identity of a park visitor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RiderId(pub u32);

impl RiderId {
    /// The id handed out after `self`.
    #[inline]
    pub fn next(self) -> RiderId {
        RiderId(self.0 + 1)
    }
}

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Visitor-{}", self.0)
    }
}
