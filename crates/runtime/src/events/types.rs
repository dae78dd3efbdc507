//! Event types for different topics.

use game_core::{GameEnding, GameError, Half, Matchup, PlayReport, Side};
use serde::{Deserialize, Serialize};

use crate::types::GameId;

/// Game lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was set up and persisted
    Created { game_id: GameId, matchup: Matchup },

    /// A stored game was loaded and its worker started
    Resumed { game_id: GameId, nonce: u64 },

    /// A half-inning ended and play moved on to `inning`/`half`
    HalfInningStarted {
        game_id: GameId,
        inning: u32,
        half: Half,
    },

    /// The game reached its terminal phase
    Completed {
        game_id: GameId,
        final_score: FinalScore,
        /// Side with more runs. Completed games are never tied.
        winner: Option<Side>,
        ending: GameEnding,
    },
}

/// Per at-bat events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlayEvent {
    /// An at-bat was resolved, applied and persisted
    AtBatPlayed {
        game_id: GameId,
        report: Box<PlayReport>,
    },

    /// An at-bat request was refused; the stored state is unchanged
    AtBatRejected {
        game_id: GameId,
        nonce: u64,
        code: String,
        error: String,
    },
}

impl PlayEvent {
    pub(crate) fn rejected(game_id: &GameId, nonce: u64, error: &impl GameError) -> Self {
        PlayEvent::AtBatRejected {
            game_id: game_id.clone(),
            nonce,
            code: error.error_code().to_owned(),
            error: error.to_string(),
        }
    }
}

/// Runs per side when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub home: u32,
    pub away: u32,
}

impl FinalScore {
    pub fn runs(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}
