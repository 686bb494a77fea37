//! Fare and tip pricing.

use taxi_core::{Point, round_cents};

/// Flat charge for every ride.
pub const BASE_FARE: f64 = 5.0;
/// Charge per straight-line distance unit.
pub const PER_UNIT_COST: f64 = 0.5;
/// Tip as a fraction of the fare.
pub const TIP_RATE: f64 = 0.15;

/// Fare for a ride from `pickup` to `dropoff`, rounded to cents.
pub fn calculate_fare(pickup: Point, dropoff: Point) -> f64 {
    round_cents(BASE_FARE + pickup.distance(dropoff) * PER_UNIT_COST)
}

/// Tip owed on `fare`, rounded to cents.
pub fn calculate_tip(fare: f64) -> f64 {
    round_cents(fare * TIP_RATE)
}
