//! Plain data row types written by output backends.

use lift_core::{Direction, MotionState};

/// A snapshot of one car's state at a round boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSnapshotRow {
    pub car_id: u32,
    pub round: u64,
    pub floor: i32,
    pub direction: Direction,
    pub motion: MotionState,
    pub load: u32,
    /// Stops still scheduled at the end of the round.
    pub pending_stops: u64,
}

/// One completed trip: stamped when the passenger is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub request_id: u32,
    pub car_id: u32,
    pub origin: i32,
    pub destination: i32,
    pub created_at_ms: u64,
    pub completed_at_ms: u64,
}
