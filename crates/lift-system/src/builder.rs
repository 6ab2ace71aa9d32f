//! Fluent builder for constructing a [`LiftSystem`].

use lift_core::{Clock, LiftConfig, MonotonicClock};
use lift_fleet::{CarStore, RequestStore};

use crate::{LiftSystem, SystemResult};

/// Fluent builder for [`LiftSystem<C>`].
///
/// # Required inputs
///
/// - [`LiftConfig`] — floor range and defaults (validated in `build()`)
///
/// # Optional inputs
///
/// | Method      | Default                                   |
/// |-------------|-------------------------------------------|
/// | `.clock(c)` | [`MonotonicClock`] started at build time  |
/// | `.fleet(n)` | no cars pre-provisioned                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut bank = SystemBuilder::new(LiftConfig::default())
///     .clock(ManualClock::new())
///     .fleet(3)
///     .build()?;
/// ```
pub struct SystemBuilder<C: Clock = MonotonicClock> {
    config: LiftConfig,
    clock: C,
    fleet: u32,
}

impl SystemBuilder<MonotonicClock> {
    /// Create a builder with the default wall-clock time source.
    pub fn new(config: LiftConfig) -> Self {
        Self {
            config,
            clock: MonotonicClock::new(),
            fleet: 0,
        }
    }
}

impl<C: Clock> SystemBuilder<C> {
    /// Swap in a different time source (e.g. a
    /// [`ManualClock`][lift_core::ManualClock] for deterministic tests).
    pub fn clock<C2: Clock>(self, clock: C2) -> SystemBuilder<C2> {
        SystemBuilder {
            config: self.config,
            clock,
            fleet: self.fleet,
        }
    }

    /// Pre-provision `cars` cars at the configured start floor with the
    /// configured default capacity.
    pub fn fleet(mut self, cars: u32) -> Self {
        self.fleet = cars;
        self
    }

    /// Validate the configuration and return a ready [`LiftSystem`].
    pub fn build(self) -> SystemResult<LiftSystem<C>> {
        self.config.validate()?;

        let mut system = LiftSystem {
            config: self.config,
            cars: CarStore::new(),
            requests: RequestStore::new(),
            clock: self.clock,
        };
        for _ in 0..self.fleet {
            system.create_car(None);
        }
        Ok(system)
    }
}
