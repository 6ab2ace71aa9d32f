use lift_core::CarId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The scan loop ran out of iterations without moving or parking.
    ///
    /// Unreachable when every scheduled stop lies inside the served floor
    /// range (each iteration either returns or removes a floor from the stop
    /// set); surfacing it beats spinning forever on a corrupted store.
    #[error("{car}: scan exceeded {iterations} iterations without resolving — stop set invariant violated")]
    ScanBoundExceeded { car: CarId, iterations: usize },
}

pub type EngineResult<T> = Result<T, EngineError>;
