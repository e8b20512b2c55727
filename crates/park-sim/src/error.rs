use park_core::ParkError;
use park_ride::RideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ParkError),

    #[error(transparent)]
    Ride(#[from] RideError),
}

pub type SimResult<T> = Result<T, SimError>;
