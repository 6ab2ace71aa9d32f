//! `FleetOutputObserver<W>` — bridges `FleetObserver` to an `OutputWriter`.

use lift_fleet::{CarStore, Request, RequestStore};
use lift_system::FleetObserver;

use crate::OutputError;
use crate::row::{CarSnapshotRow, TripRow};
use crate::writer::OutputWriter;

/// A [`FleetObserver`] that writes car snapshots and completed trips to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `FleetObserver`
/// methods have no return value.  After the round driver returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FleetOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FleetOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<W> {
    fn on_trip_completed(&mut self, request: &Request) {
        let row = TripRow {
            request_id: request.id.0,
            car_id: request.car.0,
            origin: request.origin.0,
            destination: request.destination.0,
            created_at_ms: request.created_at.0,
            // Stamped before this callback fires; fall back to created_at
            // rather than panicking inside an observer.
            completed_at_ms: request.completed_at.unwrap_or(request.created_at).0,
        };
        let result = self.writer.write_trip(&row);
        self.store_err(result);
    }

    fn on_round_end(&mut self, round: u64, cars: &CarStore, _requests: &RequestStore) {
        let rows: Vec<CarSnapshotRow> = cars
            .iter()
            .map(|car| CarSnapshotRow {
                car_id: car.id.0,
                round,
                floor: car.floor.0,
                direction: car.direction,
                motion: car.motion,
                load: car.load,
                pending_stops: car.stops.len() as u64,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _rounds: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
