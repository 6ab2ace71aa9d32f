//! Observer hooks for progress reporting and data collection.

use lift_core::CarId;
use lift_engine::TickOutcome;
use lift_fleet::{CarStore, Request, RequestStore};

/// Callbacks fired by the round drivers
/// ([`run_rounds`][crate::LiftSystem::run_rounds],
/// [`run_until_idle`][crate::LiftSystem::run_until_idle],
/// [`play_script`][crate::LiftSystem::play_script]).
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — completion counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct TripCounter(usize);
///
/// impl FleetObserver for TripCounter {
///     fn on_trip_completed(&mut self, _request: &Request) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait FleetObserver {
    /// A request was created and bound to a car (script replay only — direct
    /// `create_request` calls return the id to the caller instead).
    fn on_request_created(&mut self, _request: &Request) {}

    /// One car finished its tick this round.
    fn on_tick(&mut self, _car: CarId, _outcome: &TickOutcome) {}

    /// A passenger was delivered; `request.completed_at` is stamped.
    fn on_trip_completed(&mut self, _request: &Request) {}

    /// Every car has ticked once.  Read-only access to the full bank state
    /// so output writers can record a snapshot without the system knowing
    /// about any particular format.
    fn on_round_end(&mut self, _round: u64, _cars: &CarStore, _requests: &RequestStore) {}

    /// A round driver finished.  `rounds` is the number of rounds it ran.
    fn on_run_end(&mut self, _rounds: u64) {}
}

/// A [`FleetObserver`] that does nothing.  Use when you need to call a round
/// driver but don't want callbacks.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
