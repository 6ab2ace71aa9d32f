use lift_core::LiftError;
use lift_dispatch::DispatchError;
use lift_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Core(#[from] LiftError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A bounded driver (`run_until_idle`, `play_script`) ran out of rounds
    /// with requests still pending.
    #[error("bank still busy after {rounds} rounds")]
    StillBusy { rounds: u64 },
}

pub type SystemResult<T> = Result<T, SystemError>;
