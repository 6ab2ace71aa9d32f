//! The LOOK scan: which floor should the car visit next?

use lift_core::{Direction, Floor};
use lift_fleet::StopSet;

/// Next floor to visit given the car's position, heading, and stop set.
///
/// - `Idle`: nearest stop first (ties resolve to the lower floor).
/// - `Up`: lowest stop at or above the car; if none remain, the LOOK
///   reversal — highest stop at or below, without overshooting past the last
///   pending stop.
/// - `Down`: symmetric.
///
/// `None` only for an empty stop set.  A non-empty set always yields a stop:
/// every floor in it is at-or-above or at-or-below the car.
pub fn next_stop(current: Floor, direction: Direction, stops: &StopSet) -> Option<Floor> {
    if stops.is_empty() {
        return None;
    }

    match direction {
        Direction::Idle => stops.nearest(current),
        Direction::Up => stops
            .lowest_at_or_above(current)
            .or_else(|| stops.highest_at_or_below(current)),
        Direction::Down => stops
            .highest_at_or_below(current)
            .or_else(|| stops.lowest_at_or_above(current)),
    }
}
