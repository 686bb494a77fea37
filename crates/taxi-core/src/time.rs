//! Simulated game time.
//!
//! # Design
//!
//! Game time is a continuous number of simulated seconds, advanced by the
//! host-supplied frame delta multiplied by the current time scale:
//!
//!   game_time += delta_secs * time_scale
//!
//! Only the clock is scaled.  Entity updates (movement, waiting, wear) are
//! driven by the raw delta, so changing the time scale speeds up the clock
//! and everything keyed on it (spawning, day/night) without changing how far
//! a taxi travels per frame.

use std::fmt;

/// Lower bound for [`GameClock::set_time_scale`].
pub const MIN_TIME_SCALE: f64 = 0.1;
/// Upper bound for [`GameClock::set_time_scale`].
pub const MAX_TIME_SCALE: f64 = 5.0;

/// Elapsed game time, time scale and pause flag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameClock {
    /// Simulated seconds since the game started.  Never decreases.
    pub game_time: f64,
    /// Multiplier applied to frame deltas, in `[0.1, 5.0]`.
    pub time_scale: f64,
    /// While `true`, the tick loop is a no-op.
    pub paused: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            game_time:  0.0,
            time_scale: 1.0,
            paused:     false,
        }
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `delta_secs` scaled by `time_scale`.
    ///
    /// Negative or non-finite deltas are ignored so game time stays
    /// monotonic.  Returns the scaled amount actually added.
    pub fn advance(&mut self, delta_secs: f64) -> f64 {
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            return 0.0;
        }
        let scaled = delta_secs * self.time_scale;
        self.game_time += scaled;
        scaled
    }

    /// Set the time scale, clamped to `[0.1, 5.0]`.  Returns the applied value.
    pub fn set_time_scale(&mut self, scale: f64) -> f64 {
        self.time_scale = if scale.is_nan() {
            1.0
        } else {
            scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
        };
        self.time_scale
    }

    /// Flip the pause flag.  Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// `true` when a periodic event with period `interval` falls inside the
    /// frame that just advanced by `delta_secs`.
    ///
    /// This is the approximation `game_time mod interval < delta`: it can
    /// fire twice or not at all when deltas and time scale don't line up
    /// with the interval.
    #[inline]
    pub fn crossed_interval(&self, interval: f64, delta_secs: f64) -> bool {
        interval > 0.0 && self.game_time % interval < delta_secs
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.game_time))
    }
}

/// Format seconds as `MM:SS` (minutes keep growing past 99).
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let minutes = (total / 60.0).floor() as u64;
    let secs = (total % 60.0).floor() as u64;
    format!("{minutes:02}:{secs:02}")
}
