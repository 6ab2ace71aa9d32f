//! `lift-engine` — the dispatch-free half of the core: given a car and its
//! bound requests, decide and apply one tick of movement.
//!
//! | Module      | Contents                                     |
//! |-------------|----------------------------------------------|
//! | [`scan`]    | LOOK `next_stop`                             |
//! | [`arrival`] | pickup/drop-off handling, `Service`          |
//! | [`tick`]    | the per-tick state machine, `TickOutcome`    |
//! | [`error`]   | `EngineError`                                |
//!
//! # One tick
//!
//! ```text
//! advance(car, requests, now):
//!   no pending requests        → park Idle/Idle
//!   loop (bounded):
//!     next_stop == none        → park Idle/Idle
//!     next_stop == here        → doors open, serve pickups + drop-offs,
//!                                clear the stop; stops left? loop again
//!     next_stop == elsewhere   → move there (the tick's one floor change)
//! ```
//!
//! Serving a floor and then moving on both happen within a single external
//! call; only a genuine floor change ends the loop early.  The engine never
//! schedules itself — callers invoke `advance` once per car per round.

pub mod arrival;
pub mod error;
pub mod scan;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrival::{Service, handle_arrival};
pub use error::{EngineError, EngineResult};
pub use scan::next_stop;
pub use tick::{Movement, TickOutcome, advance};
