//! `lift-system` — the public face of the elevator bank.
//!
//! # What callers do
//!
//! ```rust,ignore
//! use lift_core::{Floor, LiftConfig};
//! use lift_system::{NoopObserver, SystemBuilder};
//!
//! let mut bank = SystemBuilder::new(LiftConfig::default())
//!     .fleet(3)
//!     .build()?;
//!
//! bank.create_request(Floor(3), Floor(7))?;
//! let rounds = bank.run_until_idle(50, &mut NoopObserver)?;
//! ```
//!
//! The core engine is tick-driven and never schedules itself: `tick(car)`
//! advances exactly one car by one decision, and the round drivers
//! (`run_rounds`, `run_until_idle`, `play_script`) are plain loops over that
//! public operation, firing [`FleetObserver`] callbacks along the way.
//!
//! | Module       | Contents                                     |
//! |--------------|----------------------------------------------|
//! | [`system`]   | `LiftSystem` — operations and round drivers  |
//! | [`builder`]  | `SystemBuilder`                              |
//! | [`observer`] | `FleetObserver`, `NoopObserver`              |
//! | [`script`]   | `RequestScript` + CSV loader                 |
//! | [`error`]    | `SystemError`, `SystemResult`                |

pub mod builder;
pub mod error;
pub mod observer;
pub mod script;
pub mod system;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SystemBuilder;
pub use error::{SystemError, SystemResult};
pub use observer::{FleetObserver, NoopObserver};
pub use script::{RequestScript, ScriptError, ScriptedRequest, load_script_csv, load_script_reader};
pub use system::LiftSystem;

// The per-tick outcome types are part of this crate's API surface (observer
// callbacks and `tick` return values), so re-export them for callers that
// don't depend on lift-engine directly.
pub use lift_engine::{Movement, Service, TickOutcome};
