//! CSV request-script loader.
//!
//! # CSV format
//!
//! One row per request, keyed by the round it should be issued in:
//!
//! ```csv
//! round,origin,destination
//! 0,1,10
//! 0,2,3
//! 1,5,8
//! 3,7,1
//! ```
//!
//! Rounds may appear in any order and may have gaps; rounds with no rows
//! simply issue nothing.  Same-floor rows (`origin == destination`) are
//! legal, as everywhere else in the system.
//!
//! Floor-range validation happens at replay time (each row goes through
//! `create_request`), not at load time, so one script can be replayed
//! against differently configured buildings.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use lift_core::Floor;

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    round: u64,
    origin: i32,
    destination: i32,
}

// ── Script types ──────────────────────────────────────────────────────────────

/// One scripted request: issue `origin → destination` at `round`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptedRequest {
    pub round: u64,
    pub origin: Floor,
    pub destination: Floor,
}

/// A replayable traffic pattern, sorted by round (stable, so same-round rows
/// keep their file order).
#[derive(Clone, Debug, Default)]
pub struct RequestScript {
    entries: Vec<ScriptedRequest>,
}

impl RequestScript {
    pub fn new(mut entries: Vec<ScriptedRequest>) -> Self {
        entries.sort_by_key(|e| e.round);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScriptedRequest] {
        &self.entries
    }

    /// The requests to issue in `round`.
    pub fn due(&self, round: u64) -> impl Iterator<Item = &ScriptedRequest> {
        // Sorted by round: binary-search the window instead of filtering all.
        let start = self.entries.partition_point(|e| e.round < round);
        let end = self.entries.partition_point(|e| e.round <= round);
        self.entries[start..end].iter()
    }

    /// The last round that issues anything, or `None` for an empty script.
    pub fn last_round(&self) -> Option<u64> {
        self.entries.last().map(|e| e.round)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RequestScript`] from a CSV file.
pub fn load_script_csv(path: &Path) -> Result<RequestScript, ScriptError> {
    let file = std::fs::File::open(path).map_err(ScriptError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scripts.
pub fn load_script_reader<R: Read>(reader: R) -> Result<RequestScript, ScriptError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for result in csv_reader.deserialize::<ScriptRecord>() {
        let row = result.map_err(|e| ScriptError::Parse(e.to_string()))?;
        entries.push(ScriptedRequest {
            round: row.round,
            origin: Floor(row.origin),
            destination: Floor(row.destination),
        });
    }

    Ok(RequestScript::new(entries))
}
