//! Plain data rows written by output backends.

/// Headline numbers after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    /// Ticks observed so far, starting at 0.
    pub tick:               u64,
    pub game_time_secs:     f64,
    pub money:              f64,
    pub score:              u64,
    pub level:              u32,
    pub taxis:              u32,
    pub waiting_passengers: u32,
    pub current_trips:      u32,
    pub total_trips:        u64,
    pub total_earnings:     f64,
}

/// One taxi's state on a sampled tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxiSnapshotRow {
    pub tick:              u64,
    pub taxi_id:           u32,
    pub x:                 f64,
    pub y:                 f64,
    pub fuel:              f64,
    pub maintenance_level: f64,
    pub condition:         &'static str,
    pub is_moving:         bool,
    /// Assigned passenger, if any.
    pub passenger_id:      Option<u32>,
}

/// One event-log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub seq:            u64,
    pub game_time_secs: f64,
    pub message:        String,
}
