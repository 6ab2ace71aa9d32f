//! Unit and scenario tests for lift-system.

use std::io::Cursor;

use lift_core::{
    CarId, Direction, Floor, LiftConfig, LiftError, ManualClock, MotionState, Timestamp,
};
use lift_dispatch::DispatchError;
use lift_engine::TickOutcome;
use lift_fleet::{CarStore, Request, RequestStore};

use crate::{
    FleetObserver, LiftSystem, NoopObserver, SystemBuilder, SystemError, load_script_reader,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Bank with `fleet` cars and a manual clock starting at zero.
fn bank(fleet: u32) -> LiftSystem<ManualClock> {
    SystemBuilder::new(LiftConfig::default())
        .clock(ManualClock::new())
        .fleet(fleet)
        .build()
        .unwrap()
}

/// Counts observer callbacks.
#[derive(Default)]
struct Counting {
    created: usize,
    ticks: usize,
    trips: usize,
    rounds: usize,
}

impl FleetObserver for Counting {
    fn on_request_created(&mut self, _request: &Request) {
        self.created += 1;
    }

    fn on_tick(&mut self, _car: CarId, _outcome: &TickOutcome) {
        self.ticks += 1;
    }

    fn on_trip_completed(&mut self, request: &Request) {
        assert!(request.completed_at.is_some());
        self.trips += 1;
    }

    fn on_round_end(&mut self, _round: u64, _cars: &CarStore, _requests: &RequestStore) {
        self.rounds += 1;
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn fleet_pre_provisions_cars() {
        let bank = bank(3);
        assert_eq!(bank.cars.len(), 3);
        for car in bank.cars.iter() {
            assert_eq!(car.floor, Floor(1));
            assert_eq!(car.capacity, 10);
            assert_eq!(car.direction, Direction::Idle);
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LiftConfig { default_capacity: 0, ..Default::default() };
        let result = SystemBuilder::new(config).build();
        assert!(matches!(
            result,
            Err(SystemError::Core(LiftError::Config(_)))
        ));
    }
}

// ── Operations ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod operations {
    use super::*;

    #[test]
    fn create_car_uses_defaults_unless_overridden() {
        let mut bank = bank(0);
        let default = bank.create_car(None);
        let custom = bank.create_car(Some(4));
        assert_eq!(bank.car(default).unwrap().capacity, 10);
        assert_eq!(bank.car(custom).unwrap().capacity, 4);
    }

    #[test]
    fn create_request_binds_and_schedules_the_origin() {
        let mut bank = bank(1);
        let id = bank.create_request(Floor(5), Floor(8)).unwrap();

        let request = bank.request(id).unwrap();
        assert_eq!(request.car, CarId(0));
        assert_eq!(request.direction, Direction::Up);
        assert_eq!(request.created_at, Timestamp::ZERO);

        let car = bank.car(CarId(0)).unwrap();
        assert!(car.stops.contains(Floor(5)));
        assert_eq!(car.requests, vec![id]);
    }

    #[test]
    fn create_request_rejects_out_of_range_floors() {
        let mut bank = bank(1);
        for (origin, destination) in [(0, 5), (3, 11)] {
            let result = bank.create_request(Floor(origin), Floor(destination));
            assert!(matches!(
                result,
                Err(SystemError::Core(LiftError::FloorOutOfRange { .. }))
            ));
        }
        // Nothing was committed.
        assert!(bank.requests.is_empty());
        assert!(bank.car(CarId(0)).unwrap().stops.is_empty());
    }

    #[test]
    fn create_request_with_no_cars_commits_nothing() {
        let mut bank = bank(0);
        let result = bank.create_request(Floor(3), Floor(7));
        assert!(matches!(
            result,
            Err(SystemError::Dispatch(DispatchError::NoCarsAvailable))
        ));
        assert!(bank.requests.is_empty());
    }

    #[test]
    fn tick_unknown_car_is_an_error() {
        let mut bank = bank(1);
        let result = bank.tick(CarId(5));
        assert!(matches!(
            result,
            Err(SystemError::Core(LiftError::CarNotFound(CarId(5))))
        ));
    }

    #[test]
    fn queries_reject_unknown_ids() {
        let bank = bank(1);
        assert!(bank.car(CarId(9)).is_err());
        assert!(bank.request(lift_core::RequestId(0)).is_err());
        assert!(bank.pending_requests(CarId(9)).is_err());
    }

    #[test]
    fn dispatch_prefers_the_closer_car() {
        // Cars at F1 and F8; origin F5 costs 4 vs 3, so the F8 car wins.
        let mut bank = bank(2);
        bank.cars[CarId(1)].floor = Floor(8);

        let id = bank.create_request(Floor(5), Floor(10)).unwrap();
        assert_eq!(bank.request(id).unwrap().car, CarId(1));
    }

    #[test]
    fn shared_origins_accumulate_on_one_car() {
        let mut bank = bank(1);
        let ids: Vec<_> = [1, 2, 3]
            .into_iter()
            .map(|f| bank.create_request(Floor(f), Floor(9)).unwrap())
            .collect();

        let car = bank.car(CarId(0)).unwrap();
        for floor in [1, 2, 3] {
            assert!(car.stops.contains(Floor(floor)));
        }
        for id in ids {
            assert_eq!(bank.request(id).unwrap().car, CarId(0));
        }
        assert_eq!(bank.pending_count(CarId(0)).unwrap(), 3);
    }
}

// ── Round drivers ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod drivers {
    use super::*;

    #[test]
    fn round_trip_completes_with_monotonic_stamps() {
        let mut bank = bank(1);
        let id = bank.create_request(Floor(3), Floor(7)).unwrap();

        // Let time pass between creation and the ticks that complete it.
        bank.clock.advance(500);
        let rounds = bank.run_until_idle(20, &mut NoopObserver).unwrap();
        assert!(rounds <= 20);

        let request = bank.request(id).unwrap();
        assert!(request.completed);
        assert!(request.completed_at.unwrap() >= request.created_at);
        assert_eq!(request.completed_at, Some(Timestamp(500)));

        let car = bank.car(request.car).unwrap();
        assert_eq!(car.load, 0);
        assert_eq!(car.motion, MotionState::Idle);
    }

    #[test]
    fn run_until_idle_on_an_idle_bank_runs_zero_rounds() {
        let mut bank = bank(2);
        assert_eq!(bank.run_until_idle(10, &mut NoopObserver).unwrap(), 0);
    }

    #[test]
    fn run_until_idle_reports_exhaustion() {
        let mut bank = bank(1);
        bank.create_request(Floor(3), Floor(7)).unwrap();
        let result = bank.run_until_idle(1, &mut NoopObserver);
        assert!(matches!(result, Err(SystemError::StillBusy { rounds: 1 })));
    }

    #[test]
    fn multi_car_scenario_drains_completely() {
        // Overlapping long, short, and down-bound trips across a three-car
        // bank.
        let mut bank = bank(3);
        let ids: Vec<_> = [(1, 10), (2, 3), (5, 8), (7, 1)]
            .into_iter()
            .map(|(o, d)| bank.create_request(Floor(o), Floor(d)).unwrap())
            .collect();

        let mut counting = Counting::default();
        bank.run_until_idle(50, &mut counting).unwrap();

        assert_eq!(bank.total_pending(), 0);
        assert_eq!(counting.trips, ids.len());
        // Every round ticks every car exactly once.
        assert_eq!(counting.ticks, counting.rounds * 3);
        for id in ids {
            assert!(bank.request(id).unwrap().completed);
        }
        // Every car winds down parked.
        for car in bank.cars.iter() {
            assert!(car.stops.is_empty());
            assert_eq!(car.load, 0);
            assert_eq!(car.motion, MotionState::Idle);
        }
    }

    #[test]
    fn busy_cars_shed_work_to_the_rest_of_the_bank() {
        // Park the three cars apart, then issue requests near each: no car
        // should collect everything.
        let mut bank = bank(3);
        bank.cars[CarId(1)].floor = Floor(5);
        bank.cars[CarId(2)].floor = Floor(9);

        for (origin, destination) in [(1, 4), (5, 7), (9, 6), (2, 3), (6, 10), (10, 8)] {
            bank.create_request(Floor(origin), Floor(destination)).unwrap();
        }

        let per_car: Vec<usize> = bank
            .cars
            .ids()
            .map(|id| bank.pending_count(id).unwrap())
            .collect();
        assert_eq!(per_car.iter().sum::<usize>(), 6);
        assert!(per_car.iter().all(|&n| n < 6), "got {per_car:?}");

        bank.run_until_idle(60, &mut NoopObserver).unwrap();
        assert_eq!(bank.total_pending(), 0);
    }

    #[test]
    fn same_floor_request_completes_where_it_started() {
        let mut bank = bank(1);
        bank.cars[CarId(0)].floor = Floor(5);
        let id = bank.create_request(Floor(5), Floor(5)).unwrap();

        bank.run_until_idle(5, &mut NoopObserver).unwrap();

        assert!(bank.request(id).unwrap().completed);
        let car = bank.car(CarId(0)).unwrap();
        assert_eq!(car.floor, Floor(5));
        assert!(car.stops.is_empty());
    }
}

// ── Scripts ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scripts {
    use super::*;

    const SCRIPT_CSV: &str = "\
round,origin,destination
0,1,10
0,2,3
1,5,8
3,7,1
";

    #[test]
    fn loader_parses_and_sorts() {
        let script = load_script_reader(Cursor::new(SCRIPT_CSV)).unwrap();
        assert_eq!(script.len(), 4);
        assert_eq!(script.last_round(), Some(3));
        assert_eq!(script.due(0).count(), 2);
        assert_eq!(script.due(2).count(), 0);
        assert_eq!(script.due(3).count(), 1);
    }

    #[test]
    fn loader_rejects_malformed_rows() {
        let bad = "round,origin,destination\n0,one,10\n";
        let result = load_script_reader(Cursor::new(bad));
        assert!(matches!(result, Err(crate::ScriptError::Parse(_))));
    }

    #[test]
    fn replay_issues_and_drains_everything() {
        let mut bank = bank(2);
        let script = load_script_reader(Cursor::new(SCRIPT_CSV)).unwrap();

        let mut counting = Counting::default();
        let rounds = bank.play_script(&script, 40, &mut counting).unwrap();

        assert_eq!(counting.created, 4);
        assert_eq!(counting.trips, 4);
        assert_eq!(counting.rounds as u64, rounds);
        assert_eq!(bank.total_pending(), 0);
    }

    #[test]
    fn replay_of_an_empty_script_is_a_noop() {
        let mut bank = bank(1);
        let script = load_script_reader(Cursor::new("round,origin,destination\n")).unwrap();
        let rounds = bank.play_script(&script, 10, &mut NoopObserver).unwrap();
        assert_eq!(rounds, 0);
        assert!(bank.requests.is_empty());
    }
}
