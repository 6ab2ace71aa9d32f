//! showcase — smallest end-to-end run of the rust_lift elevator bank.
//!
//! Drives three cars through a scripted morning workload: lobby-to-office
//! long hauls, short hops, a down-bound trip, and one same-floor request.
//! Writes per-round car snapshots and completed-trip records to CSV.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_core::{CarId, LiftConfig};
use lift_fleet::{CarStore, Request, RequestStore};
use lift_output::{CsvWriter, FleetOutputObserver, OutputWriter};
use lift_system::{FleetObserver, SystemBuilder, TickOutcome, load_script_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLEET: u32 = 3;
const DRAIN_ROUNDS: u64 = 60;
const OUTPUT_DIR: &str = "output/showcase";

// ── Request script ────────────────────────────────────────────────────────────

// Rounds 0–5: a compressed morning rush.  Floors are the default 1..=10
// building; round 3 includes a same-floor request (courier holding the
// doors) and round 5 sends two passengers back down to the lobby.
const SCRIPT_CSV: &str = "\
round,origin,destination
0,1,10
0,1,7
0,2,3
1,5,8
1,1,9
2,4,10
3,6,6
3,3,8
5,9,1
5,10,2
";

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner: FleetOutputObserver<W>,
    trips: usize,
    rounds: u64,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: FleetOutputObserver<W>) -> Self {
        Self { inner, trips: 0, rounds: 0 }
    }
}

impl<W: OutputWriter> FleetObserver for CountingObserver<W> {
    fn on_request_created(&mut self, request: &Request) {
        self.inner.on_request_created(request);
    }

    fn on_tick(&mut self, car: CarId, outcome: &TickOutcome) {
        self.inner.on_tick(car, outcome);
    }

    fn on_trip_completed(&mut self, request: &Request) {
        self.trips += 1;
        self.inner.on_trip_completed(request);
    }

    fn on_round_end(&mut self, round: u64, cars: &CarStore, requests: &RequestStore) {
        self.rounds = round + 1;
        self.inner.on_round_end(round, cars, requests);
    }

    fn on_run_end(&mut self, rounds: u64) {
        self.inner.on_run_end(rounds);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== showcase — rust_lift elevator bank ===");

    // 1. Configure the building and provision the fleet.
    let config = LiftConfig::default();
    println!(
        "Floors: {}  |  Cars: {FLEET} × capacity {}",
        config.floor_range(),
        config.default_capacity
    );
    let mut bank = SystemBuilder::new(config).fleet(FLEET).build()?;

    // 2. Load the embedded traffic script.
    let script = load_script_reader(Cursor::new(SCRIPT_CSV))?;
    println!(
        "Script: {} requests over rounds 0..={}",
        script.len(),
        script.last_round().unwrap_or(0)
    );
    println!();

    // 3. Set up CSV output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observer = CountingObserver::new(FleetOutputObserver::new(writer));

    // 4. Replay the script and drain the bank.
    let t0 = Instant::now();
    let rounds = bank.play_script(&script, DRAIN_ROUNDS, &mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = observer.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Run complete in {:.3} ms ({rounds} rounds)", elapsed.as_secs_f64() * 1e3);
    println!("  completed trips     : {}", observer.trips);
    println!("  car_snapshots.csv   : {} rows", observer.rounds * FLEET as u64);
    println!("  completed_trips.csv : {} rows", observer.trips);
    println!();

    // 6. Final car positions table.
    println!("{:<8} {:<8} {:<10} {:<10} {:<6}", "Car", "Floor", "Direction", "Motion", "Load");
    println!("{}", "-".repeat(44));
    for car in bank.cars.iter() {
        println!(
            "{:<8} {:<8} {:<10} {:<10} {:<6}",
            car.id.0, car.floor.0, car.direction.to_string(), car.motion.to_string(), car.load,
        );
    }
    println!();

    // 7. Trip turnaround table (milliseconds are wall time under the
    //    default monotonic clock, so tiny — the shape is what matters).
    println!("{:<10} {:<6} {:<14} {:<14}", "Request", "Car", "Trip", "Turnaround-ms");
    println!("{}", "-".repeat(46));
    for request in bank.requests.iter().filter(|r| r.completed) {
        let turnaround = request
            .completed_at
            .map(|t| t.since(request.created_at))
            .unwrap_or(0);
        println!(
            "{:<10} {:<6} {:<14} {:<14}",
            request.id.0,
            request.car.0,
            format!("{} -> {}", request.origin, request.destination),
            turnaround,
        );
    }

    Ok(())
}
