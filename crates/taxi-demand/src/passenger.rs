//! The `Passenger` entity.

use taxi_core::{PassengerId, Point, StationId};

use crate::{calculate_fare, calculate_tip};

/// Simulated seconds a passenger waits before giving up.
pub const MAX_WAIT_SECS: f64 = 300.0;
/// Satisfaction above which a delivered passenger tips.
pub const TIP_THRESHOLD: f64 = 80.0;

/// Where a passenger is in its lifecycle.
///
/// Exactly one state at a time, so "waiting" and "traveling" can never both
/// be true.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RideState {
    #[default]
    Waiting,
    Traveling,
    Delivered,
    Left,
}

/// Outcome of [`Passenger::update_wait_time`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WaitStatus {
    /// Still around (waiting, or already in a taxi).
    Staying,
    /// Waited too long and walked off; the caller must remove the passenger.
    Left,
}

/// One ride request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:              PassengerId,
    pub pickup:          Point,
    pub dropoff:         Point,
    /// Station the ride starts at, when spawned at one.
    pub pickup_station:  Option<StationId>,
    /// Station the ride ends at, when spawned at one.
    pub dropoff_station: Option<StationId>,

    max_wait_time: f64,
    fare:          f64,
    wait_time:     f64,
    satisfaction:  f64,
    state:         RideState,
    tip_amount:    Option<f64>,
}

impl Passenger {
    /// A new, fully satisfied passenger waiting at `pickup`.  The fare is
    /// fixed here and never changes.
    pub fn new(id: PassengerId, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
            pickup_station:  None,
            dropoff_station: None,
            max_wait_time:   MAX_WAIT_SECS,
            fare:            calculate_fare(pickup, dropoff),
            wait_time:       0.0,
            satisfaction:    100.0,
            state:           RideState::Waiting,
            tip_amount:      None,
        }
    }

    /// Tag the ride with the stations it runs between.
    pub fn between_stations(mut self, pickup: StationId, dropoff: StationId) -> Self {
        self.pickup_station = Some(pickup);
        self.dropoff_station = Some(dropoff);
        self
    }

    /// Override the patience, floored at zero.
    pub fn with_max_wait_time(mut self, secs: f64) -> Self {
        self.max_wait_time = secs.max(0.0);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn fare(&self) -> f64 {
        self.fare
    }

    /// Seconds of waiting tolerated before giving up.
    #[inline]
    pub fn max_wait_time(&self) -> f64 {
        self.max_wait_time
    }

    #[inline]
    pub fn wait_time(&self) -> f64 {
        self.wait_time
    }

    /// Satisfaction in `[0, 100]`.
    #[inline]
    pub fn satisfaction(&self) -> f64 {
        self.satisfaction
    }

    #[inline]
    pub fn state(&self) -> RideState {
        self.state
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.state == RideState::Waiting
    }

    #[inline]
    pub fn is_traveling(&self) -> bool {
        self.state == RideState::Traveling
    }

    #[inline]
    pub fn tipped(&self) -> bool {
        self.tip_amount.is_some()
    }

    /// Tip left at drop-off, zero if none.
    #[inline]
    pub fn tip_amount(&self) -> f64 {
        self.tip_amount.unwrap_or(0.0)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Let `delta_secs` of waiting pass.
    ///
    /// Satisfaction drains linearly to zero at `max_wait_time`.  Waiting
    /// exactly `max_wait_time` is still tolerated; any longer and the
    /// passenger leaves.  Passengers not waiting are unaffected.
    pub fn update_wait_time(&mut self, delta_secs: f64) -> WaitStatus {
        if self.state != RideState::Waiting {
            return WaitStatus::Staying;
        }
        self.wait_time += delta_secs.max(0.0);
        self.satisfaction = if self.max_wait_time > 0.0 {
            (100.0 - (self.wait_time / self.max_wait_time) * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        if self.wait_time > self.max_wait_time {
            self.state = RideState::Left;
            return WaitStatus::Left;
        }
        WaitStatus::Staying
    }

    /// Board a taxi.  Only a waiting passenger can be picked up.
    pub fn pick_up(&mut self) -> bool {
        if self.state != RideState::Waiting {
            return false;
        }
        self.state = RideState::Traveling;
        true
    }

    /// Leave the taxi at the destination, tipping if satisfaction is above
    /// [`TIP_THRESHOLD`].  Only a traveling passenger can be dropped off.
    pub fn drop_off(&mut self) -> bool {
        if self.state != RideState::Traveling {
            return false;
        }
        self.state = RideState::Delivered;
        if self.satisfaction > TIP_THRESHOLD {
            self.tip_amount = Some(calculate_tip(self.fare));
        }
        true
    }

    /// What the passenger pays: fare, plus tip once tipped.
    pub fn total_payment(&self) -> f64 {
        self.fare + self.tip_amount()
    }

    /// Force a satisfaction level, clamped to `[0, 100]`.  Intended for
    /// scenario setup.
    pub fn set_satisfaction(&mut self, level: f64) {
        self.satisfaction = level.clamp(0.0, 100.0);
    }
}
