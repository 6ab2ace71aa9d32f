//! The floor domain: a small closed integer range fixed by configuration.
//!
//! Floors are signed so basements are representable (`Floor(-2)`), though the
//! default configuration serves floors 1 through 10.  All floor arithmetic in
//! the simulator goes through [`Floor::distance_to`] or explicit comparisons;
//! there is deliberately no `Add`/`Sub` — a floor plus a floor is not a floor.

use std::fmt;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A building floor.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub i32);

impl Floor {
    /// Travel distance to `other`, in floors.  Always non-negative.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u64 {
        self.0.abs_diff(other.0) as u64
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FloorRange ────────────────────────────────────────────────────────────────

/// The closed range of floors a building serves, `min..=max`.
///
/// Every floor a car visits or a request names must lie inside this range;
/// the system facade validates requests against it before dispatch, which is
/// what keeps the tick engine's scan loop bounded.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    pub min: Floor,
    pub max: Floor,
}

impl FloorRange {
    pub fn new(min: Floor, max: Floor) -> Self {
        debug_assert!(min < max, "floor range must span at least two floors");
        Self { min, max }
    }

    /// `true` if `floor` lies within `min..=max`.
    #[inline]
    pub fn contains(self, floor: Floor) -> bool {
        self.min <= floor && floor <= self.max
    }

    /// Number of floors in the range (inclusive of both ends).
    #[inline]
    pub fn span(self) -> u64 {
        self.min.distance_to(self.max) + 1
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
