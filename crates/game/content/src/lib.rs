//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Card profiles (batter and pitcher archetypes)
//! - Leagues: teams, starting pitchers and batting orders (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.

pub mod league;
pub mod profiles;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use league::{BatterSpec, League, LeagueError, PitcherSpec, PlayerSpec, TeamSpec};
pub use profiles::{BatterProfile, CardProfile, PitcherProfile};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LeagueLoader, LoadResult};
