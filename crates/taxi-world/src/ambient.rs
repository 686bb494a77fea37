//! Ambient conditions: weather, day/night and traffic.
//!
//! These are recorded and reported but have no effect on movement or the
//! economy.

use taxi_core::{CoreError, SimRng};

/// Lowest sampled traffic level.
pub const MIN_TRAFFIC: f64 = 1.0;
/// Highest sampled traffic level.
pub const MAX_TRAFFIC: f64 = 5.0;

/// Length of one day/night cycle, in game seconds.
const CYCLE_SECS: f64 = 1440.0;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weather {
    #[default]
    Clear,
    Rainy,
    Foggy,
}

impl Weather {
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rainy => "rainy",
            Weather::Foggy => "foggy",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Weather {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clear" => Ok(Weather::Clear),
            "rainy" => Ok(Weather::Rainy),
            "foggy" => Ok(Weather::Foggy),
            other   => Err(CoreError::Parse(format!("unknown weather {other:?}"))),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayNight {
    #[default]
    Day,
    Night,
}

impl DayNight {
    /// Day or night at `game_time`.
    ///
    /// The cycle is 1440 game seconds long and read as 24 "hours" of 60
    /// seconds each; hours `[6, 18)` are day.
    pub fn at(game_time: f64) -> Self {
        let hour = (game_time.rem_euclid(CYCLE_SECS)) / 60.0;
        if (6.0..18.0).contains(&hour) {
            DayNight::Day
        } else {
            DayNight::Night
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayNight::Day   => "day",
            DayNight::Night => "night",
        }
    }
}

impl std::fmt::Display for DayNight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw a fresh traffic level, uniform in `[1, 5]`.
pub fn sample_traffic(rng: &mut SimRng) -> f64 {
    rng.gen_range(MIN_TRAFFIC..=MAX_TRAFFIC)
}
