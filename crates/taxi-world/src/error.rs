//! World error type.

use thiserror::Error;

use taxi_core::StationId;

/// Errors produced when building a `World`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("a world needs at least 2 stations, got {0}")]
    NotEnoughStations(usize),

    #[error("station id {0} is used more than once")]
    DuplicateStation(StationId),

    #[error("station {0} lies outside the {1}x{2} map")]
    StationOffMap(StationId, f64, f64),
}

pub type WorldResult<T> = Result<T, WorldError>;
