//! Traits describing read-only game data.
//!
//! Oracles expose player cards, rosters, rule configuration, randomness, and
//! play-by-play narration. The [`Env`] aggregate bundles them so the engine can
//! access everything it needs without hard coupling to concrete implementations.
mod cards;
mod config;
mod error;
mod rng;
mod roster;

pub use cards::{Card, CardCoordinate, CardError, CardKind, CardOracle};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};
pub use roster::{Lineup, RosterOracle};

use crate::config::GameConfig;
use crate::play::Narrator;

/// Aggregates read-only oracles required by the resolver and engine.
pub struct Env<'a, K, R, C, G, N>
where
    K: CardOracle + ?Sized,
    R: RosterOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    G: RngOracle + ?Sized,
    N: Narrator + ?Sized,
{
    cards: Option<&'a K>,
    roster: Option<&'a R>,
    config: Option<&'a C>,
    rng: Option<&'a G>,
    narrator: Option<&'a N>,
}

impl<K, R, C, G, N> Clone for Env<'_, K, R, C, G, N>
where
    K: CardOracle + ?Sized,
    R: RosterOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    G: RngOracle + ?Sized,
    N: Narrator + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Only references are held, so the aggregate is copyable even over trait objects.
impl<K, R, C, G, N> Copy for Env<'_, K, R, C, G, N>
where
    K: CardOracle + ?Sized,
    R: RosterOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    G: RngOracle + ?Sized,
    N: Narrator + ?Sized,
{
}

pub type GameEnv<'a> = Env<
    'a,
    dyn CardOracle + 'a,
    dyn RosterOracle + 'a,
    dyn ConfigOracle + 'a,
    dyn RngOracle + 'a,
    dyn Narrator + 'a,
>;

impl<'a, K, R, C, G, N> Env<'a, K, R, C, G, N>
where
    K: CardOracle + ?Sized,
    R: RosterOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    G: RngOracle + ?Sized,
    N: Narrator + ?Sized,
{
    pub fn new(
        cards: Option<&'a K>,
        roster: Option<&'a R>,
        config: Option<&'a C>,
        rng: Option<&'a G>,
        narrator: Option<&'a N>,
    ) -> Self {
        Self {
            cards,
            roster,
            config,
            rng,
            narrator,
        }
    }

    pub fn with_all(
        cards: &'a K,
        roster: &'a R,
        config: &'a C,
        rng: &'a G,
        narrator: &'a N,
    ) -> Self {
        Self::new(
            Some(cards),
            Some(roster),
            Some(config),
            Some(rng),
            Some(narrator),
        )
    }

    pub fn empty() -> Self {
        Self {
            cards: None,
            roster: None,
            config: None,
            rng: None,
            narrator: None,
        }
    }

    /// Returns the CardOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CardsNotAvailable` if no card oracle was provided.
    pub fn cards(&self) -> Result<&'a K, OracleError> {
        self.cards.ok_or(OracleError::CardsNotAvailable)
    }

    /// Returns the RosterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RosterNotAvailable` if no roster oracle was provided.
    pub fn roster(&self) -> Result<&'a R, OracleError> {
        self.roster.ok_or(OracleError::RosterNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a G, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the Narrator, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::NarratorNotAvailable` if no narrator was provided.
    pub fn narrator(&self) -> Result<&'a N, OracleError> {
        self.narrator.ok_or(OracleError::NarratorNotAvailable)
    }

    /// Returns the game configuration from the config oracle.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn game_config(&self) -> Result<GameConfig, OracleError> {
        Ok(self.config()?.game_config())
    }
}

impl<'a, K, R, C, G, N> Env<'a, K, R, C, G, N>
where
    K: CardOracle + 'a,
    R: RosterOracle + 'a,
    C: ConfigOracle + 'a,
    G: RngOracle + 'a,
    N: Narrator + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        self.as_game_env()
    }

    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let cards: Option<&'a dyn CardOracle> = self.cards.map(|cards| cards as _);
        let roster: Option<&'a dyn RosterOracle> = self.roster.map(|roster| roster as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        let narrator: Option<&'a dyn Narrator> = self.narrator.map(|narrator| narrator as _);
        Env::new(cards, roster, config, rng, narrator)
    }
}
