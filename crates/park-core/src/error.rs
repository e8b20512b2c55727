//! Park-wide error type.
//!
//! Sub-crates define their own error enums and wrap `ParkError` as one
//! variant where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `park-core`.
#[derive(Debug, Error)]
pub enum ParkError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `park-*` crates.
pub type ParkResult<T> = Result<T, ParkError>;
