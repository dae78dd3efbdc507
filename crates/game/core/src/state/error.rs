//! Game setup errors.
//!
//! Errors raised while building the opening [`GameState`](super::GameState)
//! from roster data.

use crate::error::{ErrorSeverity, GameError};
use crate::state::TeamId;

/// Errors that occur when a game cannot be set up from the rosters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// The team has no starting pitcher on its roster.
    #[error("team {team} has no starting pitcher")]
    PitcherMissing { team: TeamId },

    /// The team has no batters in its lineup.
    #[error("team {team} has an empty lineup")]
    EmptyLineup { team: TeamId },

    /// A team cannot play itself.
    #[error("team {team} cannot play against itself")]
    SameTeam { team: TeamId },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        use InitializationError::*;
        match self {
            PitcherMissing { .. } | EmptyLineup { .. } => ErrorSeverity::Fatal,
            SameTeam { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            PitcherMissing { .. } => "INIT_PITCHER_MISSING",
            EmptyLineup { .. } => "INIT_EMPTY_LINEUP",
            SameTeam { .. } => "INIT_SAME_TEAM",
        }
    }
}
