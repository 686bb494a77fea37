//! Observer trait for rendering and data collection.

use taxi_demand::Passenger;
use taxi_fleet::Taxi;

use crate::{EventLogEntry, GameStatus};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] after each tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers only ever see snapshots and
/// shared references; they cannot mutate the simulation.
///
/// # Example: console renderer
///
/// ```rust,ignore
/// struct StatusLine;
///
/// impl SimObserver for StatusLine {
///     fn on_tick_end(&mut self, status: &GameStatus, _: &[Taxi], _: &[Passenger]) {
///         println!("{} ${:.2} lvl {}", status.game_time, status.money, status.level);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Entries appended to the event log during the tick, oldest first.
    /// Includes entries the bounded log evicted within the same tick.  Not
    /// called when nothing was logged.
    fn on_events(&mut self, _entries: &[EventLogEntry]) {}

    /// Called once per stepped tick (paused ones included) after all state
    /// updates.
    fn on_tick_end(&mut self, _status: &GameStatus, _taxis: &[Taxi], _passengers: &[Passenger]) {}

    /// Called once when [`Sim::run_ticks`][crate::Sim::run_ticks] returns.
    /// Hosts stepping manually never trigger it.
    fn on_run_end(&mut self, _status: &GameStatus) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
