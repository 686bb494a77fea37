//! `taxi-output` — CSV recording of a taxi simulation run.
//!
//! | File                 | One row per                         |
//! |----------------------|-------------------------------------|
//! | `tick_summaries.csv` | stepped tick                        |
//! | `taxi_snapshots.csv` | taxi, every `snapshot_every` ticks  |
//! | `events.csv`         | event-log entry                     |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `taxi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use taxi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, 60);
//! sim.run_ticks(3600, 1.0 / 60.0, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, TaxiSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
