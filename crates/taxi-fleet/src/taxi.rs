//! The `Taxi` entity.

use taxi_core::{PassengerId, Point, TaxiId};

use crate::{Condition, Route};

/// Within this distance of a waypoint a taxi snaps onto it.
pub const SNAP_DISTANCE: f64 = 5.0;

/// Default cruising speed, distance units per second of frame delta.
pub const DEFAULT_SPEED: f64 = 3.0;
/// Default tank size.
pub const DEFAULT_MAX_FUEL: f64 = 100.0;
/// Fuel burned per distance unit travelled.
pub const DEFAULT_FUEL_CONSUMPTION: f64 = 0.1;
/// Maintenance level of a freshly serviced taxi.
pub const DEFAULT_MAX_HEALTH: f64 = 100.0;
/// Price of one service.
pub const DEFAULT_MAINTENANCE_COST: f64 = 50.0;

/// One vehicle of the fleet.
///
/// Fuel, maintenance and trip state are private so their invariants hold:
/// fuel stays in `[0, max_fuel]`, maintenance in `[0, max_health]`, and a
/// pending payment exists only while a passenger is assigned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Taxi {
    pub id:               TaxiId,
    pub position:         Point,
    pub speed:            f64,
    pub max_fuel:         f64,
    pub fuel_consumption: f64,
    pub max_health:       f64,
    pub maintenance_cost: f64,

    fuel:               f64,
    maintenance_level:  f64,
    condition:          Condition,
    is_moving:          bool,
    passenger:          Option<PassengerId>,
    passenger_money:    f64,
    route:              Route,
    destination:        Option<Point>,
    earnings:           f64,
    trips_completed:    u32,
    distance_travelled: f64,
}

impl Taxi {
    /// A fully fuelled, freshly serviced, idle taxi at `position`.
    pub fn new(id: TaxiId, position: Point) -> Self {
        Self {
            id,
            position,
            speed:              DEFAULT_SPEED,
            max_fuel:           DEFAULT_MAX_FUEL,
            fuel_consumption:   DEFAULT_FUEL_CONSUMPTION,
            max_health:         DEFAULT_MAX_HEALTH,
            maintenance_cost:   DEFAULT_MAINTENANCE_COST,
            fuel:               DEFAULT_MAX_FUEL,
            maintenance_level:  DEFAULT_MAX_HEALTH,
            condition:          Condition::Excellent,
            is_moving:          false,
            passenger:          None,
            passenger_money:    0.0,
            route:              Route::default(),
            destination:        None,
            earnings:           0.0,
            trips_completed:    0,
            distance_travelled: 0.0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    #[inline]
    pub fn maintenance_level(&self) -> f64 {
        self.maintenance_level
    }

    #[inline]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    #[inline]
    pub fn has_passenger(&self) -> bool {
        self.passenger.is_some()
    }

    /// The passenger currently assigned to this taxi.
    #[inline]
    pub fn passenger(&self) -> Option<PassengerId> {
        self.passenger
    }

    /// Payout owed when the current trip completes.
    #[inline]
    pub fn passenger_money(&self) -> f64 {
        self.passenger_money
    }

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[inline]
    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    #[inline]
    pub fn earnings(&self) -> f64 {
        self.earnings
    }

    #[inline]
    pub fn trips_completed(&self) -> u32 {
        self.trips_completed
    }

    /// Odometer: total distance driven under power.
    #[inline]
    pub fn distance_travelled(&self) -> f64 {
        self.distance_travelled
    }

    /// Neither moving nor assigned.  Only idle taxis may be sold.
    #[inline]
    pub fn is_idle(&self) -> bool {
        !self.is_moving && self.passenger.is_none()
    }

    // ── Fuel ──────────────────────────────────────────────────────────────

    /// Add fuel, capped at the tank size.  Negative amounts are ignored.
    pub fn refuel(&mut self, amount: f64) {
        if amount > 0.0 {
            self.fuel = (self.fuel + amount).min(self.max_fuel);
        }
    }

    /// Burn fuel for `distance` units.  The tank never goes below zero;
    /// returns the fuel actually taken from it.
    pub fn consume_fuel(&mut self, distance: f64) -> f64 {
        let wanted = (distance * self.fuel_consumption).max(0.0);
        let used = wanted.min(self.fuel);
        self.fuel -= used;
        used
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Replace the route, rewound to its first waypoint, and aim at its last
    /// waypoint.
    pub fn set_route(&mut self, mut route: Route) {
        route.rewind();
        self.destination = route.destination();
        self.route = route;
    }

    /// Advance along the route by up to `speed * delta_secs`.
    ///
    /// Returns `true` on the step that passes the final waypoint; the taxi is
    /// then no longer moving.  The snap onto a waypoint burns no fuel.  With
    /// an empty tank the taxi stays put.
    pub fn move_towards_destination(&mut self, delta_secs: f64) -> bool {
        let Some(target) = self.route.current() else {
            self.is_moving = false;
            return false;
        };
        if self.fuel <= 0.0 {
            return false;
        }

        let distance = self.position.distance(target);
        if distance < SNAP_DISTANCE {
            self.position = target;
            if self.route.advance() {
                self.is_moving = false;
                return true;
            }
            return false;
        }

        let step = (self.speed * delta_secs).clamp(0.0, distance);
        let t = step / distance;
        self.position = self.position.lerp(target, t);
        self.distance_travelled += step;
        self.consume_fuel(step);
        false
    }

    /// Force a stop (empty tank).  The route is kept so the taxi can resume.
    pub fn stop(&mut self) {
        self.is_moving = false;
    }

    /// Restart a stopped taxi that still has route left and fuel in the tank.
    /// Returns `true` if it is moving afterwards.
    pub fn resume(&mut self) -> bool {
        if !self.is_moving && !self.route.is_finished() && self.fuel > 0.0 {
            self.is_moving = true;
        }
        self.is_moving
    }

    // ── Wear ──────────────────────────────────────────────────────────────

    /// Re-derive [`Condition`] from the maintenance level.
    pub fn calculate_condition(&mut self) {
        let percent = self.maintenance_level / self.max_health * 100.0;
        self.condition = Condition::from_percent(percent);
    }

    /// Lower the maintenance level by `amount` (floored at 0) and refresh the
    /// condition.
    pub fn wear(&mut self, amount: f64) {
        if amount > 0.0 {
            self.maintenance_level = (self.maintenance_level - amount).max(0.0);
        }
        self.calculate_condition();
    }

    /// Restore maintenance to full.
    pub fn perform_maintenance(&mut self) {
        self.maintenance_level = self.max_health;
        self.calculate_condition();
    }

    /// Set the maintenance level directly, clamped to `[0, max_health]`.
    pub fn set_maintenance_level(&mut self, level: f64) {
        self.maintenance_level = level.clamp(0.0, self.max_health);
        self.calculate_condition();
    }

    // ── Trips ─────────────────────────────────────────────────────────────

    /// Take on `passenger`: follow `route` and hold `payment` until drop-off.
    pub fn begin_trip(&mut self, passenger: PassengerId, payment: f64, route: Route) {
        self.set_route(route);
        self.passenger = Some(passenger);
        self.passenger_money = payment.max(0.0);
        self.is_moving = true;
    }

    /// Replace the pending payment (e.g. once a tip is known).  Ignored when
    /// no passenger is assigned.
    pub fn set_pending_payment(&mut self, payment: f64) {
        if self.passenger.is_some() {
            self.passenger_money = payment.max(0.0);
        }
    }

    /// Credit a completed trip's payout to this taxi.
    pub fn record_trip(&mut self, payout: f64) {
        self.earnings += payout;
        self.trips_completed += 1;
    }

    /// Drop all trip state.  Returns the passenger that was assigned.
    pub fn clear_trip(&mut self) -> Option<PassengerId> {
        self.passenger_money = 0.0;
        self.is_moving = false;
        self.passenger.take()
    }
}
