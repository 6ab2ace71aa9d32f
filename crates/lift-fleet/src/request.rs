//! The `Request` entity and its pending → picked-up → completed lifecycle.

use lift_core::{CarId, Direction, Floor, RequestId, Timestamp};

/// One pickup/drop-off request.
///
/// A request is bound to exactly one car at creation and never reassigned.
/// `picked_up` and `completed` are monotonic — they go `false → true` once
/// and never reset — so external collaborators can treat the record as
/// append-only.  `origin == destination` is legal; such a request picks up
/// and completes within a single arrival.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    /// Store-assigned, immutable after creation.
    pub id: RequestId,

    pub origin: Floor,
    pub destination: Floor,

    /// Travel direction, derived from the floor pair at creation
    /// (same-floor pairs map to `Down`).
    pub direction: Direction,

    /// The passenger has boarded the car.
    pub picked_up: bool,

    /// The passenger has been delivered.
    pub completed: bool,

    pub created_at: Timestamp,

    /// Stamped exactly once, at completion.
    pub completed_at: Option<Timestamp>,

    /// Weak reference to the serving car — an id, resolved through the
    /// `CarStore`, never a live object reference.
    pub car: CarId,
}

impl Request {
    pub(crate) fn new(
        id: RequestId,
        origin: Floor,
        destination: Floor,
        car: CarId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            direction: Direction::between(origin, destination),
            picked_up: false,
            completed: false,
            created_at,
            completed_at: None,
            car,
        }
    }

    /// Still owed work by the engine: not yet completed.
    #[inline]
    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Mark the passenger as boarded.
    pub fn pick_up(&mut self) {
        debug_assert!(!self.completed, "cannot pick up a completed request");
        self.picked_up = true;
    }

    /// Mark the passenger as delivered and stamp the completion time.
    pub fn complete(&mut self, at: Timestamp) {
        debug_assert!(self.picked_up, "cannot complete before pickup");
        debug_assert!(!self.completed, "completed_at is stamped exactly once");
        self.completed = true;
        self.completed_at = Some(at);
    }
}
