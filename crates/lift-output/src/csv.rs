//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `car_snapshots.csv`
//! - `completed_trips.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CarSnapshotRow, OutputResult, TripRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    trips: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("car_snapshots.csv"))?;
        snapshots.write_record([
            "car_id", "round", "floor", "direction", "motion", "load", "pending_stops",
        ])?;

        let mut trips = Writer::from_path(dir.join("completed_trips.csv"))?;
        trips.write_record([
            "request_id", "car_id", "origin", "destination", "created_at_ms", "completed_at_ms",
        ])?;

        Ok(Self {
            snapshots,
            trips,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.car_id.to_string(),
                row.round.to_string(),
                row.floor.to_string(),
                row.direction.to_string(),
                row.motion.to_string(),
                row.load.to_string(),
                row.pending_stops.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_trip(&mut self, row: &TripRow) -> OutputResult<()> {
        self.trips.write_record(&[
            row.request_id.to_string(),
            row.car_id.to_string(),
            row.origin.to_string(),
            row.destination.to_string(),
            row.created_at_ms.to_string(),
            row.completed_at_ms.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.trips.flush()?;
        Ok(())
    }
}
