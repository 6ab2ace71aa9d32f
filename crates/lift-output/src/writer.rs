//! The `OutputWriter` trait implemented by backend writers.

use crate::{CarSnapshotRow, OutputResult, TripRow};

/// Trait implemented by output backends (currently CSV; the seam is where a
/// database or columnar backend would slot in).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`FleetOutputObserver::take_error`][crate::FleetOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of car snapshots (one round's worth).
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()>;

    /// Write one completed-trip row.
    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
