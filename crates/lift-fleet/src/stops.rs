//! `StopSet` — the floors a car must still visit.
//!
//! # Why a `BTreeSet`
//!
//! The LOOK scan only ever asks three questions of the stop set: "lowest stop
//! at or above me", "highest stop at or below me", and "nearest stop".  A
//! `BTreeSet<Floor>` answers the first two with a single `range` probe in
//! O(log n) and makes the third a comparison of those two probes, so the scan
//! scheduler never walks the whole set.  Floors are distinct by construction
//! (set semantics), which is exactly the dedup the dispatcher relies on when
//! it re-adds an origin floor already scheduled.

use std::collections::BTreeSet;

use lift_core::Floor;

/// Ordered set of floors a car must still visit, for pickups or drop-offs.
///
/// Pure data structure: membership plus the scan queries, no policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopSet {
    inner: BTreeSet<Floor>,
}

impl StopSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a stop.  Returns `false` if the floor was already scheduled.
    pub fn insert(&mut self, floor: Floor) -> bool {
        self.inner.insert(floor)
    }

    /// Clear a stop.  Returns `false` if the floor was not scheduled.
    pub fn remove(&mut self, floor: Floor) -> bool {
        self.inner.remove(&floor)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.inner.contains(&floor)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Ascending iteration over all scheduled floors.
    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.inner.iter().copied()
    }

    // ── Scan queries ──────────────────────────────────────────────────────

    /// The lowest scheduled floor at or above `floor`, if any.
    pub fn lowest_at_or_above(&self, floor: Floor) -> Option<Floor> {
        self.inner.range(floor..).next().copied()
    }

    /// The highest scheduled floor at or below `floor`, if any.
    pub fn highest_at_or_below(&self, floor: Floor) -> Option<Floor> {
        self.inner.range(..=floor).next_back().copied()
    }

    /// The scheduled floor nearest to `floor`.
    ///
    /// Equidistant candidates resolve to the lower floor — a total, stable
    /// rule, so idle-car scans are deterministic.
    pub fn nearest(&self, floor: Floor) -> Option<Floor> {
        let below = self.highest_at_or_below(floor);
        let above = self.lowest_at_or_above(floor);
        match (below, above) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(a)) => Some(a),
            (Some(b), Some(a)) => {
                if floor.distance_to(b) <= floor.distance_to(a) {
                    Some(b)
                } else {
                    Some(a)
                }
            }
        }
    }
}

impl FromIterator<Floor> for StopSet {
    fn from_iter<I: IntoIterator<Item = Floor>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}
