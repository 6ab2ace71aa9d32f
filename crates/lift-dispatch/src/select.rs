//! Minimum-cost car selection.

use lift_core::{CarId, Direction, Floor, FloorRange};
use lift_fleet::CarStore;

use crate::{Cost, DispatchError, DispatchResult, cost};

/// Pick the car that should serve a request boarding at `origin` travelling
/// `requested`.
///
/// Scores every car and returns the first minimum in ascending [`CarId`]
/// order (strict `<`, so earlier cars win ties).  The tie rule is documented
/// but not load-bearing — callers may only rely on "lowest cost wins,
/// deterministic for a fixed store".
///
/// Errors with [`DispatchError::NoCarsAvailable`] on an empty store.  A bank
/// where every car is full still selects one (at [`Cost::INFINITE`]):
/// fullness deprioritizes, it never excludes.  Whether such requests should
/// instead queue unassigned is an open question recorded in DESIGN.md.
pub fn select_car(
    cars: &CarStore,
    origin: Floor,
    requested: Direction,
    range: FloorRange,
) -> DispatchResult<CarId> {
    let mut best: Option<(CarId, Cost)> = None;

    for car in cars.iter() {
        let score = cost(car, origin, requested, range);
        match best {
            Some((_, lowest)) if score >= lowest => {}
            _ => best = Some((car.id, score)),
        }
    }

    best.map(|(id, _)| id).ok_or(DispatchError::NoCarsAvailable)
}
