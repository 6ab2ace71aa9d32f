//! The per-tick state machine.

use lift_core::{Direction, Floor, MotionState, Timestamp};
use lift_fleet::{Car, RequestStore};

use crate::{EngineError, EngineResult, Service, handle_arrival, scan};

// ── Outcome types ─────────────────────────────────────────────────────────────

/// One floor change: the car travelled from `from` to `to` (possibly several
/// floors in one hop — a tick moves a car to its next *stop*, not its next
/// floor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    pub from: Floor,
    pub to: Floor,
    pub direction: Direction,
}

/// What one external tick accomplished, for observers and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing owed: the car is (now) parked `Idle`/`Idle`.
    Idle,

    /// The car served a floor, moved toward one, or both — in that order,
    /// within this single call.
    Advanced {
        served: Option<Service>,
        moved: Option<Movement>,
    },
}

impl TickOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, TickOutcome::Idle)
    }

    pub fn served(&self) -> Option<&Service> {
        match self {
            TickOutcome::Advanced { served, .. } => served.as_ref(),
            TickOutcome::Idle => None,
        }
    }

    pub fn moved(&self) -> Option<&Movement> {
        match self {
            TickOutcome::Advanced { moved, .. } => moved.as_ref(),
            TickOutcome::Idle => None,
        }
    }
}

// ── The tick ──────────────────────────────────────────────────────────────────

/// Advance `car` by one external tick.
///
/// Exactly one caller thread may drive a given car; the `&mut` borrows make
/// that the compiler's problem rather than a protocol note.  `now` stamps any
/// completions that happen during arrival handling.
///
/// The continuation loop below is bounded: the cap is the stop-set size plus
/// one at entry.  Each pass either returns or removes the current floor from
/// the stop set, so a conforming store can never exhaust the cap; if it is
/// exhausted the store was corrupted and
/// [`EngineError::ScanBoundExceeded`] is returned instead of spinning.
pub fn advance(
    car: &mut Car,
    requests: &mut RequestStore,
    now: Timestamp,
) -> EngineResult<TickOutcome> {
    if requests.pending_count_for_car(car.id) == 0 {
        car.direction = Direction::Idle;
        car.motion = MotionState::Idle;
        return Ok(TickOutcome::Idle);
    }

    let bound = car.stops.len() + 1;
    let mut served: Option<Service> = None;

    for _ in 0..bound {
        let Some(target) = scan::next_stop(car.floor, car.direction, &car.stops) else {
            car.direction = Direction::Idle;
            car.motion = MotionState::Idle;
            return Ok(TickOutcome::Idle);
        };

        // A parked car commits to a heading as soon as it has a target.
        if car.direction == Direction::Idle && target != car.floor {
            car.direction = Direction::between(car.floor, target);
        }

        if target == car.floor {
            // Arrival. `Stopped` is never observable across a tick boundary;
            // the doors open within the same call.
            car.motion = MotionState::Stopped;
            car.motion = MotionState::DoorOpen;

            debug_assert!(served.is_none(), "at most one service per tick");
            let service = handle_arrival(car, target, requests, now);
            served = Some(service);

            if car.stops.is_empty() {
                // Tick ends with the doors open; the next tick parks the car
                // if nothing new arrives in the meantime.
                return Ok(TickOutcome::Advanced { served, moved: None });
            }
            // Stops remain: keep going — the next pass decides the move.
            continue;
        }

        // A real floor change consumes the tick.
        car.motion = MotionState::Moving;
        car.direction = Direction::between(car.floor, target);
        let moved = Movement { from: car.floor, to: target, direction: car.direction };
        car.floor = target;
        return Ok(TickOutcome::Advanced { served, moved: Some(moved) });
    }

    Err(EngineError::ScanBoundExceeded { car: car.id, iterations: bound })
}
