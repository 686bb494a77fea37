//! `taxi-world` — the map and everything on it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`station`] | `Station`, the default six-station registry                 |
//! | [`router`]  | `RouteGenerator` trait, `InterpolatedRouter`                |
//! | [`ambient`] | `Weather`, `DayNight`, traffic sampling                     |
//! | [`world`]   | `World` — stations plus live taxis and passengers           |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod ambient;
pub mod error;
pub mod router;
pub mod station;
pub mod world;


pub use ambient::{DayNight, Weather};
pub use error::{WorldError, WorldResult};
pub use router::{InterpolatedRouter, RouteGenerator};
pub use station::{Station, default_stations};
pub use world::World;
