//! `lift-core` — foundational types for the `rust_lift` elevator bank simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `CarId`, `RequestId`                                  |
//! | [`floor`]     | `Floor`, `FloorRange`                                 |
//! | [`direction`] | `Direction`, `MotionState`                            |
//! | [`time`]      | `Timestamp`, `Clock`, `MonotonicClock`, `ManualClock` |
//! | [`config`]    | `LiftConfig`                                          |
//! | [`error`]     | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::LiftConfig;
pub use direction::{Direction, MotionState};
pub use error::{LiftError, LiftResult};
pub use floor::{Floor, FloorRange};
pub use ids::{CarId, RequestId};
pub use time::{Clock, ManualClock, MonotonicClock, Timestamp};
