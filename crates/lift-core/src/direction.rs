//! Travel direction and car motion state.

use std::fmt;

use crate::Floor;

// ── Direction ─────────────────────────────────────────────────────────────────

/// The direction a car is sweeping, or a request wants to travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// No committed direction; the car serves the nearest stop first.
    #[default]
    Idle,
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `origin` to `destination`.
    ///
    /// A same-floor pair maps to `Down` — one consistent rule, applied both
    /// to request direction at creation and to a car's heading when it starts
    /// moving (where the two floors always differ).
    #[inline]
    pub fn between(origin: Floor, destination: Floor) -> Direction {
        if destination > origin {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Idle => "idle",
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

// ── MotionState ───────────────────────────────────────────────────────────────

/// What a car is physically doing.
///
/// Mutated only by the tick engine.  `Stopped` is transient within a tick
/// (arrival is immediately followed by `DoorOpen`); a car can finish a tick
/// in any of the other three states.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionState {
    #[default]
    Idle,
    Moving,
    Stopped,
    DoorOpen,
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MotionState::Idle => "idle",
            MotionState::Moving => "moving",
            MotionState::Stopped => "stopped",
            MotionState::DoorOpen => "door_open",
        })
    }
}
