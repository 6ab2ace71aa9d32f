//! The `LiftSystem` facade: operations plus round drivers.

use lift_core::{
    CarId, Clock, Direction, Floor, LiftConfig, LiftError, MonotonicClock, MotionState, RequestId,
};
use lift_dispatch::select_car;
use lift_engine::{TickOutcome, advance};
use lift_fleet::{Car, CarStore, Request, RequestStore};

use crate::{FleetObserver, RequestScript, SystemError, SystemResult};

/// One building's elevator bank: configuration, clock, and the two stores.
///
/// All mutating operations take `&mut self`, which is the concurrency model
/// of the core made structural: one caller at a time per system, dispatch
/// never interleaved with a tick.  Cloning the stores (both are `Clone`)
/// yields a consistent snapshot for read-side work on other threads.
///
/// Construct via [`SystemBuilder`][crate::SystemBuilder].
pub struct LiftSystem<C: Clock = MonotonicClock> {
    /// Building configuration (floor range, defaults).
    pub config: LiftConfig,

    /// All known cars.
    pub cars: CarStore,

    /// All requests ever created.
    pub requests: RequestStore,

    pub(crate) clock: C,
}

impl<C: Clock> LiftSystem<C> {
    // ── Operations ────────────────────────────────────────────────────────

    /// Create a car parked idle at the configured start floor.
    ///
    /// `capacity == None` uses the configured default.
    pub fn create_car(&mut self, capacity: Option<u32>) -> CarId {
        let capacity = capacity.unwrap_or(self.config.default_capacity);
        self.cars.create(self.config.default_start_floor, capacity)
    }

    /// Create a request, dispatch it to the lowest-cost car, and bind it.
    ///
    /// Validation and selection happen before any mutation, so a failure
    /// (`FloorOutOfRange`, `NoCarsAvailable`) commits no partial state.  On
    /// success the origin floor is scheduled on the winning car and the
    /// request is stored stamped with `created_at = clock.now()`.
    pub fn create_request(
        &mut self,
        origin: Floor,
        destination: Floor,
    ) -> SystemResult<RequestId> {
        let range = self.config.floor_range();
        for floor in [origin, destination] {
            if !range.contains(floor) {
                return Err(LiftError::FloorOutOfRange {
                    floor,
                    min: range.min,
                    max: range.max,
                }
                .into());
            }
        }

        let direction = Direction::between(origin, destination);
        let car = select_car(&self.cars, origin, direction, range)?;

        self.cars[car].stops.insert(origin);
        let id = self.requests.create(origin, destination, car, self.clock.now());
        self.cars[car].requests.push(id);
        Ok(id)
    }

    /// Advance one car by one tick.
    pub fn tick(&mut self, car: CarId) -> SystemResult<TickOutcome> {
        let car_state = self
            .cars
            .get_mut(car)
            .ok_or(LiftError::CarNotFound(car))?;
        let outcome = advance(car_state, &mut self.requests, self.clock.now())?;
        Ok(outcome)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn car(&self, id: CarId) -> SystemResult<&Car> {
        self.cars.get(id).ok_or(LiftError::CarNotFound(id).into())
    }

    pub fn request(&self, id: RequestId) -> SystemResult<&Request> {
        self.requests
            .get(id)
            .ok_or(LiftError::RequestNotFound(id).into())
    }

    /// The uncompleted requests bound to `car`, in creation order.
    pub fn pending_requests(&self, car: CarId) -> SystemResult<Vec<&Request>> {
        if self.cars.get(car).is_none() {
            return Err(LiftError::CarNotFound(car).into());
        }
        Ok(self
            .requests
            .pending_for_car(car)
            .into_iter()
            .map(|id| &self.requests[id])
            .collect())
    }

    pub fn pending_count(&self, car: CarId) -> SystemResult<usize> {
        if self.cars.get(car).is_none() {
            return Err(LiftError::CarNotFound(car).into());
        }
        Ok(self.requests.pending_count_for_car(car))
    }

    /// Uncompleted requests across the whole bank.
    pub fn total_pending(&self) -> usize {
        self.requests.iter().filter(|r| r.is_pending()).count()
    }

    /// `true` when nothing is pending and every car has parked.
    ///
    /// A car that just made its final delivery finishes that tick with the
    /// doors open; one further tick parks it.  The round drivers run that
    /// wind-down, so "idle" here means fully parked, not merely drained.
    pub fn is_idle(&self) -> bool {
        self.total_pending() == 0
            && self
                .cars
                .iter()
                .all(|car| car.motion == MotionState::Idle && car.direction == Direction::Idle)
    }

    // ── Round drivers ─────────────────────────────────────────────────────
    //
    // Thin loops over the public `tick`; the engine never schedules itself.

    /// Tick every car once per round, `rounds` times.
    pub fn run_rounds<O: FleetObserver>(
        &mut self,
        rounds: u64,
        observer: &mut O,
    ) -> SystemResult<()> {
        for round in 0..rounds {
            self.round(round, observer)?;
        }
        observer.on_run_end(rounds);
        Ok(())
    }

    /// Run rounds until the bank [is idle][Self::is_idle], up to `max_rounds`.
    ///
    /// Returns the number of rounds actually run.  Errors with
    /// [`SystemError::StillBusy`] if requests remain pending when the budget
    /// runs out.
    pub fn run_until_idle<O: FleetObserver>(
        &mut self,
        max_rounds: u64,
        observer: &mut O,
    ) -> SystemResult<u64> {
        for round in 0..max_rounds {
            if self.is_idle() {
                observer.on_run_end(round);
                return Ok(round);
            }
            self.round(round, observer)?;
        }
        if self.total_pending() == 0 {
            observer.on_run_end(max_rounds);
            Ok(max_rounds)
        } else {
            Err(SystemError::StillBusy { rounds: max_rounds })
        }
    }

    /// Replay a [`RequestScript`]: each round, create the requests due that
    /// round, then tick every car.  After the last scripted round, keep
    /// running up to `drain_rounds` extra rounds to let the bank finish.
    ///
    /// Returns the total number of rounds run.
    pub fn play_script<O: FleetObserver>(
        &mut self,
        script: &RequestScript,
        drain_rounds: u64,
        observer: &mut O,
    ) -> SystemResult<u64> {
        let scripted = script.last_round().map_or(0, |r| r + 1);

        for round in 0..scripted {
            for entry in script.due(round) {
                let id = self.create_request(entry.origin, entry.destination)?;
                observer.on_request_created(&self.requests[id]);
            }
            self.round(round, observer)?;
        }

        for extra in 0..drain_rounds {
            if self.is_idle() {
                observer.on_run_end(scripted + extra);
                return Ok(scripted + extra);
            }
            self.round(scripted + extra, observer)?;
        }

        if self.total_pending() == 0 {
            observer.on_run_end(scripted + drain_rounds);
            Ok(scripted + drain_rounds)
        } else {
            Err(SystemError::StillBusy { rounds: scripted + drain_rounds })
        }
    }

    /// One round: tick every car in id order, firing observer callbacks.
    fn round<O: FleetObserver>(&mut self, round: u64, observer: &mut O) -> SystemResult<()> {
        let ids: Vec<CarId> = self.cars.ids().collect();
        for car in ids {
            let outcome = self.tick(car)?;
            if let Some(service) = outcome.served() {
                for &request in &service.completed {
                    observer.on_trip_completed(&self.requests[request]);
                }
            }
            observer.on_tick(car, &outcome);
        }
        observer.on_round_end(round, &self.cars, &self.requests);
        Ok(())
    }
}
