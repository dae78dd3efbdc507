//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so the runtime can build [`game_core::Env`] snapshots
//! on demand. The data is immutable at runtime; dynamic state lives in
//! repositories or [`game_core::GameState`].
mod cards;
mod config;
mod roster;

use std::sync::Arc;

use game_content::{League, LeagueError};
use game_core::{BroadcastNarrator, ConfigOracle, Env, GameConfig, GameEnv, PcgRng};

pub use cards::CardOracleImpl;
pub use config::ConfigOracleImpl;
pub use roster::{RosterOracleImpl, TeamEntry};

/// Manages all oracle implementations and provides unified access
///
/// Cloning is cheap: the card and roster tables are shared.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) cards: Arc<CardOracleImpl>,
    pub(crate) roster: Arc<RosterOracleImpl>,
    pub(crate) config: Arc<ConfigOracleImpl>,
    pub(crate) rng: PcgRng,
    pub(crate) narrator: BroadcastNarrator,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        cards: Arc<CardOracleImpl>,
        roster: Arc<RosterOracleImpl>,
        config: Arc<ConfigOracleImpl>,
    ) -> Self {
        Self {
            cards,
            roster,
            config,
            rng: PcgRng, // PcgRng is stateless
            narrator: BroadcastNarrator,
        }
    }

    /// Cards and rosters of `league`, played under `config`.
    ///
    /// # Errors
    ///
    /// Fails if the league does not validate.
    pub fn from_league(league: &League, config: GameConfig) -> Result<Self, LeagueError> {
        let roster = RosterOracleImpl::from_league(league)?;
        Ok(Self::new(
            Arc::new(CardOracleImpl::from_league(league)),
            Arc::new(roster),
            Arc::new(ConfigOracleImpl::new(config)),
        ))
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(
            self.cards.as_ref(),
            self.roster.as_ref(),
            self.config.as_ref(),
            &self.rng,
            &self.narrator,
        )
        .into_game_env()
    }

    pub fn cards(&self) -> &CardOracleImpl {
        &self.cards
    }

    pub fn roster(&self) -> &RosterOracleImpl {
        &self.roster
    }

    pub fn game_config(&self) -> GameConfig {
        self.config.game_config()
    }
}
