//! `taxi-fleet` — the taxi entity.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`route`]     | `Route` — ordered waypoints plus a cursor                  |
//! | [`condition`] | `Condition` — qualitative health tier                      |
//! | [`taxi`]      | `Taxi` — position, fuel, wear, assigned trip               |
//!
//! # Movement model (waypoint chase)
//!
//! A dispatched taxi holds a [`Route`] and chases its current waypoint at
//! `speed * delta` distance units per step:
//!
//! 1. Farther than [`SNAP_DISTANCE`] from the waypoint: move toward it and
//!    burn fuel for the distance covered.
//! 2. Within [`SNAP_DISTANCE`]: snap exactly onto it (no fuel) and advance
//!    the cursor.
//! 3. Cursor past the last waypoint: stop and report arrival.
//!
//! World-time effects (wear, forced stops on an empty tank) are applied by
//! the simulation, not by the taxi itself.

pub mod condition;
pub mod route;
pub mod taxi;


pub use condition::Condition;
pub use route::Route;
pub use taxi::{SNAP_DISTANCE, Taxi};
