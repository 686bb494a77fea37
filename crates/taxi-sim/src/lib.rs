//! `taxi-sim` — the game loop.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`sim`]       | `Sim` — tick loop, spawning, dispatch, trip settlement   |
//! | [`commands`]  | Buy, sell, maintain, refuel; pause and time scale        |
//! | [`builder`]   | `SimBuilder` — validated construction                    |
//! | [`economy`]   | `Economy` — money, score, level                          |
//! | [`stats`]     | `Statistics` — trip aggregates                           |
//! | [`event_log`] | `EventLog` — bounded, timestamped FIFO                   |
//! | [`status`]    | `GameStatus` — detached snapshot for hosts               |
//! | [`observer`]  | `SimObserver` — per-tick callbacks                       |
//! | [`error`]     | `SimError`, `SimResult<T>`                               |
//!
//! # Logging
//!
//! Every event-log entry is mirrored to `tracing`: ordinary events at
//! `INFO`, fuel exhaustion and unaffordable commands at `WARN`, per-tick
//! summaries at `DEBUG`.  The library never installs a subscriber.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on status and log types.   |

pub mod builder;
pub mod commands;
pub mod economy;
pub mod error;
pub mod event_log;
pub mod observer;
pub mod sim;
pub mod stats;
pub mod status;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use economy::Economy;
pub use error::{SimError, SimResult};
pub use event_log::{EventLog, EventLogEntry};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{MAINTENANCE_DECAY_PER_SEC, Sim};
pub use stats::Statistics;
pub use status::GameStatus;
