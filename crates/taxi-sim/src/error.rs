use taxi_core::{CoreError, PassengerId, StationId, TaxiId};
use taxi_world::WorldError;
use thiserror::Error;

/// Why a simulation command was refused.
///
/// Every variant is a recoverable, local outcome: the command had no effect
/// on simulation state.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("taxi {0} not found")]
    TaxiNotFound(TaxiId),

    #[error("passenger {0} not found")]
    PassengerNotFound(PassengerId),

    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("pickup and drop-off are both station {0}")]
    SameStation(StationId),

    #[error("taxi {0} is busy")]
    TaxiBusy(TaxiId),

    #[error("taxi {0} has no fuel")]
    OutOfFuel(TaxiId),

    #[error("passenger {0} is not waiting")]
    PassengerNotWaiting(PassengerId),

    #[error("insufficient funds: need ${required:.2}, have ${available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("invalid amount {0}")]
    InvalidAmount(f64),
}

impl SimError {
    /// `true` for failures caused by money rather than by a bad reference.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, SimError::InsufficientFunds { .. })
    }
}

pub type SimResult<T> = Result<T, SimError>;
