//! CSV output backend.
//!
//! Creates three files in the output directory:
//! - `tick_summaries.csv`
//! - `taxi_snapshots.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, TaxiSnapshotRow, TickSummaryRow};

pub const TICK_SUMMARIES_FILE: &str = "tick_summaries.csv";
pub const TAXI_SNAPSHOTS_FILE: &str = "taxi_snapshots.csv";
pub const EVENTS_FILE: &str = "events.csv";

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join(TICK_SUMMARIES_FILE))?;
        summaries.write_record([
            "tick",
            "game_time_secs",
            "money",
            "score",
            "level",
            "taxis",
            "waiting_passengers",
            "current_trips",
            "total_trips",
            "total_earnings",
        ])?;

        let mut snapshots = Writer::from_path(dir.join(TAXI_SNAPSHOTS_FILE))?;
        snapshots.write_record([
            "tick",
            "taxi_id",
            "x",
            "y",
            "fuel",
            "maintenance_level",
            "condition",
            "is_moving",
            "passenger_id",
        ])?;

        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["seq", "game_time_secs", "message"])?;

        Ok(Self {
            summaries,
            snapshots,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.game_time_secs),
            format!("{:.2}", row.money),
            row.score.to_string(),
            row.level.to_string(),
            row.taxis.to_string(),
            row.waiting_passengers.to_string(),
            row.current_trips.to_string(),
            row.total_trips.to_string(),
            format!("{:.2}", row.total_earnings),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[TaxiSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.taxi_id.to_string(),
                format!("{:.2}", row.x),
                format!("{:.2}", row.y),
                format!("{:.2}", row.fuel),
                format!("{:.2}", row.maintenance_level),
                row.condition.to_owned(),
                (row.is_moving as u8).to_string(),
                row.passenger_id.map(|p| p.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.seq.to_string(),
                format!("{:.3}", row.game_time_secs),
                row.message.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
