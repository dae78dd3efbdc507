//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, the game engine and
//! turn providers so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{Controller, ExecuteError, InitializationError};

pub use crate::repository::RepositoryError;
use crate::types::GameId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{controller} turn provider not set")]
    ProviderNotSet { controller: Controller },

    #[error("turn provider channel closed")]
    TurnProviderChannelClosed,

    #[error("game worker command channel closed")]
    CommandChannelClosed,

    #[error("game worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("game worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("failed to initialize game state from rosters")]
    InitialState(#[source] InitializationError),

    #[error("game {0} not found")]
    GameNotFound(GameId),

    #[error("at-bat {prepared} was prepared but the game is at at-bat {current}")]
    StaleAtBat { prepared: u64, current: u64 },
}

impl RuntimeError {
    /// The game refused the request because it is already over.
    pub fn is_game_over(&self) -> bool {
        matches!(self, RuntimeError::Execute(ExecuteError::GameNotActive))
    }
}
