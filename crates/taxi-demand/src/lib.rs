//! `taxi-demand` — passenger ride requests.
//!
//! A [`Passenger`] is created waiting at a pickup point with a fare fixed
//! from the straight-line trip distance.  While waiting, satisfaction drains
//! linearly until the passenger gives up after [`MAX_WAIT_SECS`].  Once
//! picked up, satisfaction is frozen; a passenger dropped off while still
//! more than [`TIP_THRESHOLD`] satisfied leaves a tip.
//!
//! ```text
//!   Waiting ──pick_up──▶ Traveling ──drop_off──▶ Delivered
//!      │
//!      └──wait > max──▶ Left
//! ```

pub mod fare;
pub mod passenger;


pub use fare::{BASE_FARE, PER_UNIT_COST, TIP_RATE, calculate_fare, calculate_tip};
pub use passenger::{MAX_WAIT_SECS, Passenger, RideState, TIP_THRESHOLD, WaitStatus};
