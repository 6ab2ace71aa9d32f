//! The `Car` entity.

use lift_core::{CarId, Direction, Floor, MotionState, RequestId};

use crate::StopSet;

/// One elevator car.
///
/// A car is either parked (`direction == Idle`) or mid-sweep; `motion`
/// records what it is physically doing at the end of the last tick.  The car
/// owns its [`StopSet`] exclusively and keeps the ids of every request ever
/// bound to it; the requests themselves live in the `RequestStore` and point
/// back by id only.
///
/// Invariants (upheld by the stores and the tick engine, not re-checked
/// here): `floor` stays inside the configured range, and `load` never drops
/// below zero.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    /// Store-assigned, immutable after creation.
    pub id: CarId,

    /// The floor the car is at (or has just reached this tick).
    pub floor: Floor,

    /// Sweep direction.  `Idle` means the next scan picks the nearest stop.
    pub direction: Direction,

    /// Physical state at the end of the last tick.
    pub motion: MotionState,

    /// Passenger capacity.
    pub capacity: u32,

    /// Passengers currently aboard.
    pub load: u32,

    /// Floors still to visit.
    pub stops: StopSet,

    /// Ids of all requests ever bound to this car, in binding order.
    pub requests: Vec<RequestId>,
}

impl Car {
    pub(crate) fn new(id: CarId, floor: Floor, capacity: u32) -> Self {
        Self {
            id,
            floor,
            direction: Direction::Idle,
            motion: MotionState::Idle,
            capacity,
            load: 0,
            stops: StopSet::new(),
            requests: Vec::new(),
        }
    }

    /// `true` when the car cannot take another passenger.
    ///
    /// The cost model treats a full car as infinitely expensive; it is never
    /// a hard error (see the dispatcher docs for the all-cars-full case).
    #[inline]
    pub fn is_full(&self) -> bool {
        self.load >= self.capacity
    }

    /// One passenger steps in.
    #[inline]
    pub fn board(&mut self) {
        self.load += 1;
    }

    /// One passenger steps out.  Saturates at zero.
    #[inline]
    pub fn alight(&mut self) {
        self.load = self.load.saturating_sub(1);
    }
}
