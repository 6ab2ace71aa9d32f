//! Base error type.
//!
//! Sub-crates define their own error enums (`DispatchError`, `EngineError`,
//! `SystemError`) and either convert into `LiftError` via `From` or wrap it
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::{CarId, Floor, RequestId};

/// The base error type for `lift-core` and the entity stores.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("{0} not found")]
    CarNotFound(CarId),

    #[error("{0} not found")]
    RequestNotFound(RequestId),

    #[error("floor {floor} outside the served range {min}..={max}")]
    FloorOutOfRange { floor: Floor, min: Floor, max: Floor },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
