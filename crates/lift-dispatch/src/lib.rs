//! `lift-dispatch` — scoring cars against requests and picking the winner.
//!
//! | Module     | Contents                       |
//! |------------|--------------------------------|
//! | [`cost`]   | `Cost`, the suitability score  |
//! | [`select`] | minimum-cost car selection     |
//! | [`error`]  | `DispatchError`                |
//!
//! Everything in this crate is a pure read over car state.  The side effects
//! of a successful dispatch (stop-set insert, request binding) belong to the
//! system facade, so a failed selection commits no partial state.

pub mod cost;
pub mod error;
pub mod select;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cost::{Cost, cost};
pub use error::{DispatchError, DispatchResult};
pub use select::select_car;
