use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the rewards engine
/// Validation failures are recovered locally and shown to the user; none are
/// fatal to the process
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("no user is signed in")]
    NotAuthenticated,

    /// The engine does not distinguish storage failure causes (network,
    /// permission, quota), only success/failure
    #[error("storage write failed")]
    StorageWriteFailed(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
