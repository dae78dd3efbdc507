//! Error types raised by repository implementations.

use thiserror::Error;

use crate::types::GameId;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("game {0} not found")]
    NotFound(GameId),

    #[error("game id {0:?} cannot be used as a storage key")]
    InvalidGameId(GameId),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
