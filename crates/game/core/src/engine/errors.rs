//! Error types for the at-bat pipeline.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Half, TeamId};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Errors surfaced while resolving or applying an at-bat.
///
/// Every variant is raised before the state is replaced, so a failed at-bat
/// leaves the game exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    /// The game is complete and accepts no further at-bats.
    #[error("game is not active")]
    GameNotActive,

    /// The batting-order cursor points at no player.
    #[error("lineup of team {team} has no batter at position {cursor}")]
    InvalidLineupState { team: TeamId, cursor: usize },

    /// The caller applied an outcome to the wrong half-inning.
    #[error("outcome applied to the {provided} half while the {expected} half is batting")]
    HalfMismatch { expected: Half, provided: Half },

    /// A state invariant failed after applying an outcome.
    #[error("{phase:?} check failed: {reason}")]
    InvariantViolation {
        phase: TransitionPhase,
        reason: String,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        use ExecuteError::*;
        match self {
            GameNotActive | HalfMismatch { .. } => ErrorSeverity::Validation,
            InvalidLineupState { .. } => ErrorSeverity::Fatal,
            InvariantViolation { .. } => ErrorSeverity::Internal,
            Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ExecuteError::*;
        match self {
            GameNotActive => "EXECUTE_GAME_NOT_ACTIVE",
            InvalidLineupState { .. } => "EXECUTE_INVALID_LINEUP_STATE",
            HalfMismatch { .. } => "EXECUTE_HALF_MISMATCH",
            InvariantViolation { .. } => "EXECUTE_INVARIANT_VIOLATION",
            Oracle(err) => err.error_code(),
        }
    }
}
