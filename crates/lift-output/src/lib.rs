//! `lift-output` — file output for simulation runs.
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`row`]      | `CarSnapshotRow`, `TripRow`                     |
//! | [`writer`]   | the `OutputWriter` backend trait                |
//! | [`csv`]      | `CsvWriter`                                     |
//! | [`observer`] | `FleetOutputObserver<W>` — the observer bridge  |
//! | [`error`]    | `OutputError`, `OutputResult`                   |
//!
//! Plug a [`FleetOutputObserver`] into any of the system's round drivers and
//! it records a per-car snapshot at every round boundary plus one row per
//! completed trip.  Write errors are stashed rather than panicking the run;
//! check [`FleetOutputObserver::take_error`] afterwards.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FleetOutputObserver;
pub use row::{CarSnapshotRow, TripRow};
pub use writer::OutputWriter;
