//! `taxi-core` — foundational types for the taxi fleet simulation.
//!
//! This crate is a dependency of every other `taxi-*` crate.  It has no
//! `taxi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TaxiId`, `PassengerId`, `StationId`                  |
//! | [`geo`]         | `Point`, euclidean distance, interpolation            |
//! | [`money`]       | cent rounding shared by fares, tips and payouts       |
//! | [`time`]        | `GameClock`, `format_time`                            |
//! | [`rng`]         | `SimRng` (injectable, seeded)                         |
//! | [`config`]      | `GameConfig`                                          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod money;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GameConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{PassengerId, StationId, TaxiId};
pub use money::round_cents;
pub use rng::SimRng;
pub use time::{GameClock, format_time};
