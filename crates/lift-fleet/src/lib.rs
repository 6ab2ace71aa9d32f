//! `lift-fleet` — entities and in-memory stores for the elevator bank.
//!
//! | Module      | Contents                             |
//! |-------------|--------------------------------------|
//! | [`stops`]   | `StopSet`                            |
//! | [`car`]     | `Car`                                |
//! | [`request`] | `Request`                            |
//! | [`store`]   | `CarStore`, `RequestStore`           |
//!
//! Ownership is deliberately one-directional: a [`Car`] owns its [`StopSet`]
//! and the list of ids of requests ever bound to it; a [`Request`] refers
//! back to its car by [`CarId`][lift_core::CarId] only.  Resolving either
//! side goes through the stores, so there are no object cycles and no
//! aliasing of live references between entities.

pub mod car;
pub mod request;
pub mod stops;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::Car;
pub use request::Request;
pub use stops::StopSet;
pub use store::{CarStore, RequestStore};
