//! The cost model: how suitable is a car for a pending request?
//!
//! Three cases, cheapest first:
//!
//! 1. Idle car, or a car already sweeping toward the origin in the request's
//!    direction: cost is the plain floor distance.
//! 2. Anything else — wrong direction, or right direction but the origin is
//!    behind the car: cost approximates "finish the current sweep to the end
//!    of the range, reverse, then reach the origin".
//! 3. A full car scores [`Cost::INFINITE`] regardless of floors.  Fullness
//!    deprioritizes, it does not exclude: when every car is full the request
//!    still binds to the minimum (see `select_car`).

use std::fmt;

use lift_core::{Direction, Floor, FloorRange};
use lift_fleet::Car;

// ── Cost ──────────────────────────────────────────────────────────────────────

/// Suitability score for one (car, request) pair.  Lower is better.
///
/// The value is a floor count, except for the [`INFINITE`][Cost::INFINITE]
/// sentinel, which is not a distance at all.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Cost(pub u64);

impl Cost {
    /// Sentinel for "car is full" — compares above every real distance.
    pub const INFINITE: Cost = Cost(u64::MAX);

    #[inline]
    pub fn is_infinite(self) -> bool {
        self == Cost::INFINITE
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            f.write_str("∞")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Score `car` for a request boarding at `origin` travelling `requested`.
///
/// Pure: reads car state, mutates nothing, so it is safe to call from any
/// number of threads holding a consistent snapshot of the store.
pub fn cost(car: &Car, origin: Floor, requested: Direction, range: FloorRange) -> Cost {
    if car.is_full() {
        return Cost::INFINITE;
    }

    let here = car.floor;

    match car.direction {
        Direction::Idle => Cost(here.distance_to(origin)),

        // Same sweep, origin ahead: the car passes the origin anyway.
        Direction::Up if requested == Direction::Up && origin >= here => {
            Cost(here.distance_to(origin))
        }
        Direction::Down if requested == Direction::Down && origin <= here => {
            Cost(here.distance_to(origin))
        }

        // Detour: run out the sweep to the boundary, reverse, come back.
        Direction::Up => Cost(here.distance_to(range.max) + origin.distance_to(range.max)),
        Direction::Down => Cost(here.distance_to(range.min) + origin.distance_to(range.min)),
    }
}
