//! Oracle access errors.
//!
//! Errors related to oracle availability and card data access.

use crate::error::{ErrorSeverity, GameError};
use crate::state::PlayerId;

use super::{CardCoordinate, CardKind};

/// Errors that occur when accessing Oracle data.
///
/// Missing oracles are fatal since the engine cannot resolve an at-bat
/// without them. Missing card data is reported as-is and never replaced by
/// a default play.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CardOracle is not available in the environment.
    #[error("CardOracle not available")]
    CardsNotAvailable,

    /// RosterOracle is not available in the environment.
    #[error("RosterOracle not available")]
    RosterNotAvailable,

    /// ConfigOracle is not available in the environment.
    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// Narrator is not available in the environment.
    #[error("Narrator not available")]
    NarratorNotAvailable,

    /// The player owns no card of the requested kind.
    #[error("player '{player}' has no {kind} card")]
    CardNotFound { player: PlayerId, kind: CardKind },

    /// The addressed cell of an existing card is empty.
    #[error("{kind} card of player '{player}' has no entry at {coordinate}")]
    CoordinateNotFound {
        player: PlayerId,
        kind: CardKind,
        coordinate: CardCoordinate,
    },
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - engine cannot proceed
            CardsNotAvailable | RosterNotAvailable | ConfigNotAvailable | RngNotAvailable
            | NarratorNotAvailable => ErrorSeverity::Fatal,

            CardNotFound { .. } => ErrorSeverity::Validation,

            // A hole in an authored card is a content bug
            CoordinateNotFound { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CardsNotAvailable => "ORACLE_CARDS_NOT_AVAILABLE",
            RosterNotAvailable => "ORACLE_ROSTER_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            NarratorNotAvailable => "ORACLE_NARRATOR_NOT_AVAILABLE",
            CardNotFound { .. } => "ORACLE_CARD_NOT_FOUND",
            CoordinateNotFound { .. } => "ORACLE_COORDINATE_NOT_FOUND",
        }
    }
}
