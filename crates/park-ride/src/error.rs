use thiserror::Error;

#[derive(Debug, Error)]
pub enum RideError {
    #[error("invalid ride {name:?}: {reason}")]
    InvalidRide { name: String, reason: &'static str },
}

pub type RideResult<T> = Result<T, RideError>;
