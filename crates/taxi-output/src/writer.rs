//! The `OutputWriter` trait.

use crate::{EventRow, OutputResult, TaxiSnapshotRow, TickSummaryRow};

/// A sink for simulation output.
///
/// Errors surface from each call; [`SimOutputObserver`][crate::SimOutputObserver]
/// keeps the first one for the host to collect.
pub trait OutputWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of per-taxi rows taken on the same tick.
    fn write_snapshots(&mut self, rows: &[TaxiSnapshotRow]) -> OutputResult<()>;

    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Flush all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
