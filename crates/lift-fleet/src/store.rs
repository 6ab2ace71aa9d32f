//! In-memory entity stores.
//!
//! Both stores hand out dense ids that double as `Vec` indices, so lookups
//! are O(1) without hashing.  The `RequestStore` keeps a per-car secondary
//! index (`FxHashMap<CarId, Vec<RequestId>>`) so "pending requests for car X"
//! — the hottest engine query — never scans the full request table.
//!
//! The stores are plain values passed into the engine's operations; nothing
//! here is global or ambient, so tests inject fixtures directly.

use rustc_hash::FxHashMap;

use lift_core::{CarId, Floor, RequestId, Timestamp};

use crate::{Car, Request};

// ── CarStore ──────────────────────────────────────────────────────────────────

/// All known cars, indexed by [`CarId`].  Cars are never destroyed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarStore {
    cars: Vec<Car>,
}

impl CarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a car parked `Idle` at `floor` and return its id.
    pub fn create(&mut self, floor: Floor, capacity: u32) -> CarId {
        let id = CarId(self.cars.len() as u32);
        self.cars.push(Car::new(id, floor, capacity));
        id
    }

    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    pub fn get_mut(&mut self, id: CarId) -> Option<&mut Car> {
        self.cars.get_mut(id.index())
    }

    /// All cars in ascending id order — the dispatcher's enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CarId> + '_ {
        (0..self.cars.len() as u32).map(CarId)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

// ── RequestStore ──────────────────────────────────────────────────────────────

/// All requests ever created, indexed by [`RequestId`], with a per-car
/// secondary index.  Requests are never deleted; retention is the caller's
/// concern.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestStore {
    requests: Vec<Request>,
    by_car: FxHashMap<CarId, Vec<RequestId>>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request bound to `car` and return its id.
    pub fn create(
        &mut self,
        origin: Floor,
        destination: Floor,
        car: CarId,
        created_at: Timestamp,
    ) -> RequestId {
        let id = RequestId(self.requests.len() as u32);
        self.requests.push(Request::new(id, origin, destination, car, created_at));
        self.by_car.entry(car).or_default().push(id);
        id
    }

    pub fn get(&self, id: RequestId) -> Option<&Request> {
        self.requests.get(id.index())
    }

    pub fn get_mut(&mut self, id: RequestId) -> Option<&mut Request> {
        self.requests.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    // ── Per-car queries ───────────────────────────────────────────────────

    /// Ids of every request ever bound to `car`, in creation order.
    pub fn ids_for_car(&self, car: CarId) -> &[RequestId] {
        self.by_car.get(&car).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of the uncompleted requests bound to `car`, in creation order.
    pub fn pending_for_car(&self, car: CarId) -> Vec<RequestId> {
        self.ids_for_car(car)
            .iter()
            .copied()
            .filter(|&id| self.requests[id.index()].is_pending())
            .collect()
    }

    /// Number of uncompleted requests bound to `car`.
    pub fn pending_count_for_car(&self, car: CarId) -> usize {
        self.ids_for_car(car)
            .iter()
            .filter(|id| self.requests[id.index()].is_pending())
            .count()
    }
}

// ── Indexing ──────────────────────────────────────────────────────────────────
//
// Ids handed out by a store are always valid for that store (entities are
// never destroyed), so indexing panics only on an id from a different store —
// the same contract as `Vec` indexing.

impl std::ops::Index<CarId> for CarStore {
    type Output = Car;

    fn index(&self, id: CarId) -> &Car {
        &self.cars[id.index()]
    }
}

impl std::ops::IndexMut<CarId> for CarStore {
    fn index_mut(&mut self, id: CarId) -> &mut Car {
        &mut self.cars[id.index()]
    }
}

impl std::ops::Index<RequestId> for RequestStore {
    type Output = Request;

    fn index(&self, id: RequestId) -> &Request {
        &self.requests[id.index()]
    }
}

impl std::ops::IndexMut<RequestId> for RequestStore {
    fn index_mut(&mut self, id: RequestId) -> &mut Request {
        &mut self.requests[id.index()]
    }
}
