//! Building configuration.

use crate::{Floor, FloorRange, LiftError, LiftResult};

/// Top-level configuration for one building's elevator bank.
///
/// The `Default` is a ten-floor building (floors 1..=10) with ten-passenger
/// cars parked at the lobby.  Typically loaded from a TOML/JSON file by the
/// application crate (enable the `serde` feature) and passed to
/// `SystemBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftConfig {
    /// Lowest served floor.
    pub min_floor: Floor,

    /// Highest served floor.  Must be strictly above `min_floor`.
    pub max_floor: Floor,

    /// Passenger capacity for cars created without an explicit one.
    pub default_capacity: u32,

    /// Floor newly created cars start at.  Must lie within the range.
    pub default_start_floor: Floor,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            min_floor: Floor(1),
            max_floor: Floor(10),
            default_capacity: 10,
            default_start_floor: Floor(1),
        }
    }
}

impl LiftConfig {
    /// The closed floor range this configuration serves.
    #[inline]
    pub fn floor_range(&self) -> FloorRange {
        FloorRange { min: self.min_floor, max: self.max_floor }
    }

    /// Check internal consistency.  Called by `SystemBuilder::build`.
    pub fn validate(&self) -> LiftResult<()> {
        if self.min_floor >= self.max_floor {
            return Err(LiftError::Config(format!(
                "min_floor {} must be below max_floor {}",
                self.min_floor, self.max_floor
            )));
        }
        if self.default_capacity == 0 {
            return Err(LiftError::Config(
                "default_capacity must be at least 1".into(),
            ));
        }
        if !self.floor_range().contains(self.default_start_floor) {
            return Err(LiftError::Config(format!(
                "default_start_floor {} outside {}",
                self.default_start_floor,
                self.floor_range()
            )));
        }
        Ok(())
    }
}
