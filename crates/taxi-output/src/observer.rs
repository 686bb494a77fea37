//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use taxi_demand::Passenger;
use taxi_fleet::Taxi;
use taxi_sim::{EventLogEntry, GameStatus, SimObserver};

use crate::row::{EventRow, TaxiSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, periodic fleet snapshots
/// and every event-log entry to an [`OutputWriter`].
///
/// Observer callbacks cannot fail, so write errors are stored.  After the
/// run, check with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    tick:           u64,
    snapshot_every: u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Snapshot the fleet every `snapshot_every` ticks (0 disables
    /// snapshots).
    pub fn new(writer: W, snapshot_every: u64) -> Self {
        Self {
            writer,
            tick: 0,
            snapshot_every,
            last_error: None,
        }
    }

    /// The first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Needed when stepping manually, since only
    /// `run_ticks` reports the end of a run.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_events(&mut self, entries: &[EventLogEntry]) {
        let rows: Vec<EventRow> = entries
            .iter()
            .map(|e| EventRow {
                seq:            e.seq,
                game_time_secs: e.timestamp,
                message:        e.message.clone(),
            })
            .collect();
        let result = self.writer.write_events(&rows);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, status: &GameStatus, taxis: &[Taxi], _passengers: &[Passenger]) {
        let tick = self.tick;
        self.tick += 1;

        let row = TickSummaryRow {
            tick,
            game_time_secs:     status.game_time_secs,
            money:              status.money,
            score:              status.score,
            level:              status.level,
            taxis:              status.taxis as u32,
            waiting_passengers: status.waiting_passengers as u32,
            current_trips:      status.stats.current_trips,
            total_trips:        status.stats.total_trips,
            total_earnings:     status.stats.total_earnings,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);

        if self.snapshot_every == 0 || tick % self.snapshot_every != 0 || taxis.is_empty() {
            return;
        }
        let rows: Vec<TaxiSnapshotRow> = taxis
            .iter()
            .map(|t| TaxiSnapshotRow {
                tick,
                taxi_id:           t.id.0,
                x:                 t.position.x,
                y:                 t.position.y,
                fuel:              t.fuel(),
                maintenance_level: t.maintenance_level(),
                condition:         t.condition().as_str(),
                is_moving:         t.is_moving(),
                passenger_id:      t.passenger().map(|p| p.0),
            })
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _status: &GameStatus) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
