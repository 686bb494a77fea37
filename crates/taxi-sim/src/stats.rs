//! Aggregate trip statistics.

/// Rating reported before any trip has been rated.
const DEFAULT_RATING: f64 = 5.0;

/// Counters derived from trip history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Trips that paid out.
    pub total_trips:        u64,
    pub total_earnings:     f64,
    /// Trips dispatched but not yet completed.
    pub current_trips:      u32,
    pub avg_trip_earning:   f64,
    /// Distance driven by the whole fleet.
    pub total_distance:     f64,
    /// Mean drop-off satisfaction on a 0–5 scale.
    pub average_rating:     f64,
    pub passengers_spawned: u64,
    /// Passengers that gave up waiting.
    pub passengers_lost:    u64,

    #[cfg_attr(feature = "serde", serde(skip))]
    rating_total: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    rated_trips:  u64,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            total_trips:        0,
            total_earnings:     0.0,
            current_trips:      0,
            avg_trip_earning:   0.0,
            total_distance:     0.0,
            average_rating:     DEFAULT_RATING,
            passengers_spawned: 0,
            passengers_lost:    0,
            rating_total:       0.0,
            rated_trips:        0,
        }
    }
}

impl Statistics {
    /// Count one paid trip.
    pub fn record_trip(&mut self, payout: f64) {
        self.total_trips += 1;
        self.total_earnings += payout;
    }

    /// Fold a drop-off satisfaction (0–100) into the average rating.
    pub fn record_rating(&mut self, satisfaction: f64) {
        self.rating_total += satisfaction.clamp(0.0, 100.0) / 20.0;
        self.rated_trips += 1;
    }

    pub fn trip_started(&mut self) {
        self.current_trips += 1;
    }

    pub fn trip_ended(&mut self) {
        self.current_trips = self.current_trips.saturating_sub(1);
    }

    /// Recompute the derived averages.
    pub fn refresh(&mut self) {
        if self.total_trips > 0 {
            self.avg_trip_earning = self.total_earnings / self.total_trips as f64;
        }
        if self.rated_trips > 0 {
            self.average_rating = self.rating_total / self.rated_trips as f64;
        }
    }
}
