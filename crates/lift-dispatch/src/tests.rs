//! Unit tests for lift-dispatch.

use lift_core::{CarId, Direction, Floor, FloorRange};
use lift_fleet::CarStore;

use crate::{Cost, DispatchError, cost, select_car};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn range() -> FloorRange {
    FloorRange::new(Floor(1), Floor(10))
}

/// Store with one car at `floor`, heading `direction`, `load`/`capacity`.
fn one_car(floor: i32, direction: Direction, load: u32, capacity: u32) -> CarStore {
    let mut cars = CarStore::new();
    let id = cars.create(Floor(floor), capacity);
    let car = cars.get_mut(id).unwrap();
    car.direction = direction;
    car.load = load;
    cars
}

fn score(cars: &CarStore, origin: i32, requested: Direction) -> Cost {
    cost(cars.iter().next().unwrap(), Floor(origin), requested, range())
}

// ── Cost model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost_model {
    use super::*;

    #[test]
    fn idle_car_costs_plain_distance() {
        let cars = one_car(1, Direction::Idle, 0, 10);
        assert_eq!(score(&cars, 5, Direction::Up), Cost(4));
        assert_eq!(score(&cars, 1, Direction::Down), Cost(0));
    }

    #[test]
    fn full_car_is_infinite_regardless_of_floors() {
        let cars = one_car(5, Direction::Idle, 10, 10);
        assert_eq!(score(&cars, 5, Direction::Up), Cost::INFINITE);
        assert_eq!(score(&cars, 1, Direction::Down), Cost::INFINITE);
    }

    #[test]
    fn same_direction_origin_ahead_costs_distance() {
        let cars = one_car(3, Direction::Up, 0, 10);
        assert_eq!(score(&cars, 7, Direction::Up), Cost(4));
        // Boarding exactly at the car's floor is free.
        assert_eq!(score(&cars, 3, Direction::Up), Cost(0));
    }

    #[test]
    fn same_direction_origin_behind_is_a_detour() {
        // Car sweeping up at F6; origin F2 going up is behind it:
        // (10 - 6) + (10 - 2) = 12.
        let cars = one_car(6, Direction::Up, 0, 10);
        assert_eq!(score(&cars, 2, Direction::Up), Cost(12));
    }

    #[test]
    fn opposite_direction_is_a_detour() {
        // Car sweeping down at F4; request going up from F6:
        // (4 - 1) + (6 - 1) = 8.
        let cars = one_car(4, Direction::Down, 0, 10);
        assert_eq!(score(&cars, 6, Direction::Up), Cost(8));
    }

    #[test]
    fn detour_uses_configured_boundaries() {
        // Same geometry, basement-to-penthouse range: boundaries shift the
        // detour, nothing is hard-coded to 1/10.
        let wide = FloorRange::new(Floor(-3), Floor(20));
        let cars = one_car(6, Direction::Up, 0, 10);
        let car = cars.iter().next().unwrap();
        // (20 - 6) + (20 - 2) = 32.
        assert_eq!(cost(car, Floor(2), Direction::Up, wide), Cost(32));
    }

    #[test]
    fn infinite_display() {
        assert_eq!(Cost::INFINITE.to_string(), "∞");
        assert_eq!(Cost(7).to_string(), "7");
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn empty_store_errors() {
        let cars = CarStore::new();
        let result = select_car(&cars, Floor(3), Direction::Up, range());
        assert!(matches!(result, Err(DispatchError::NoCarsAvailable)));
    }

    #[test]
    fn closer_idle_car_wins() {
        // Cars at F1 and F5, origin F6: the F5 car is closer.
        let mut cars = CarStore::new();
        cars.create(Floor(1), 10);
        let near = cars.create(Floor(5), 10);
        assert_eq!(select_car(&cars, Floor(6), Direction::Up, range()).unwrap(), near);
    }

    #[test]
    fn cars_at_one_and_eight_origin_five() {
        // |1-5| = 4 vs |8-5| = 3: the F8 car wins.
        let mut cars = CarStore::new();
        cars.create(Floor(1), 10);
        let high = cars.create(Floor(8), 10);
        assert_eq!(select_car(&cars, Floor(5), Direction::Up, range()).unwrap(), high);
    }

    #[test]
    fn full_car_avoided_when_an_alternative_exists() {
        let mut cars = CarStore::new();
        let full = cars.create(Floor(3), 5);
        cars.get_mut(full).unwrap().load = 5;
        let open = cars.create(Floor(8), 10);
        cars.get_mut(open).unwrap().load = 2;
        assert_eq!(select_car(&cars, Floor(4), Direction::Up, range()).unwrap(), open);
    }

    #[test]
    fn all_cars_full_still_binds_to_the_minimum() {
        let mut cars = CarStore::new();
        let a = cars.create(Floor(2), 1);
        cars.get_mut(a).unwrap().load = 1;
        let b = cars.create(Floor(9), 1);
        cars.get_mut(b).unwrap().load = 1;
        // Both are infinite; the first minimum in id order wins.
        assert_eq!(select_car(&cars, Floor(5), Direction::Up, range()).unwrap(), a);
    }

    #[test]
    fn tie_goes_to_the_earlier_car() {
        // Car 0 sweeping up at F3 (cost |3-5| = 2) ties with the idle car
        // at F7 (cost |7-5| = 2); enumeration order keeps car 0.
        let mut cars = CarStore::new();
        let sweeping = cars.create(Floor(3), 10);
        cars.get_mut(sweeping).unwrap().direction = Direction::Up;
        cars.create(Floor(7), 10);
        assert_eq!(
            select_car(&cars, Floor(5), Direction::Up, range()).unwrap(),
            CarId(0)
        );
    }
}
