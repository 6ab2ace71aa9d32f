use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no cars available to serve the request")]
    NoCarsAvailable,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
