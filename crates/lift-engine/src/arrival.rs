//! Arrival handling: what happens when the doors open at a floor.

use lift_core::{Floor, RequestId, Timestamp};
use lift_fleet::{Car, RequestStore};

/// What one door-open at a floor accomplished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    pub floor: Floor,

    /// Requests whose passenger boarded here.
    pub picked_up: Vec<RequestId>,

    /// Requests completed here (passenger delivered, `completed_at` stamped).
    pub completed: Vec<RequestId>,
}

/// Serve `floor` for `car`: board waiting passengers, deliver arriving ones,
/// then clear the floor from the car's stop set.
///
/// Two passes over the car's pending requests, pickups first:
///
/// 1. `origin == floor`, not yet picked up → board, `load += 1`, schedule the
///    destination as a stop.
/// 2. `destination == floor`, picked up, not completed → deliver,
///    `load -= 1` (saturating), stamp `completed_at = now`.
///
/// A same-floor request boards in pass 1 and is delivered in pass 2 of the
/// same call, for a net load change of zero.
///
/// The floor is removed from the stop set unconditionally — a stop with no
/// remaining obligation is cleared rather than revisited.  Pickups do not
/// re-check capacity: the cost model is the only capacity gate (see
/// DESIGN.md on the all-cars-full open question).
pub fn handle_arrival(
    car: &mut Car,
    floor: Floor,
    requests: &mut RequestStore,
    now: Timestamp,
) -> Service {
    let pending = requests.pending_for_car(car.id);
    let mut picked_up = Vec::new();
    let mut completed = Vec::new();

    for &id in &pending {
        let request = &mut requests[id];
        if request.origin == floor && !request.picked_up {
            request.pick_up();
            car.board();
            car.stops.insert(request.destination);
            picked_up.push(id);
        }
    }

    for &id in &pending {
        let request = &mut requests[id];
        if request.destination == floor && request.picked_up && !request.completed {
            request.complete(now);
            car.alight();
            completed.push(id);
        }
    }

    car.stops.remove(floor);

    Service { floor, picked_up, completed }
}
