//! Read-only status snapshot.

use taxi_world::{DayNight, Weather};

use crate::Statistics;

/// Everything a host needs to draw a status bar, detached from live state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStatus {
    pub money:              f64,
    pub score:              u64,
    pub level:              u32,
    /// Game time formatted as `MM:SS`.
    pub game_time:          String,
    pub game_time_secs:     f64,
    pub time_scale:         f64,
    pub taxis:              usize,
    pub passengers:         usize,
    pub waiting_passengers: usize,
    pub is_paused:          bool,
    pub stats:              Statistics,
    pub weather:            Weather,
    pub day_night:          DayNight,
    /// Traffic level rounded to one decimal.
    pub traffic_level:      f64,
}
