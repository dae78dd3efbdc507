//! Repository contracts for saving and loading mutable game data.

use game_core::{GameState, LogEntry};

use super::Result;
use crate::types::GameId;

/// Repository for the authoritative state of each game.
///
/// Callers serialize writes per game id (one worker per game), so
/// implementations only need to guard their own internal structures.
pub trait GameStateRepository: Send + Sync {
    /// Save (or replace) the state of `game_id`
    fn save(&self, game_id: &GameId, state: &GameState) -> Result<()>;

    /// Load the state of `game_id`
    fn load(&self, game_id: &GameId) -> Result<Option<GameState>>;

    /// Check if a state exists
    fn exists(&self, game_id: &GameId) -> bool;

    /// Delete a state
    fn delete(&self, game_id: &GameId) -> Result<()>;

    /// List all stored games, sorted by id
    fn list_games(&self) -> Result<Vec<GameId>>;
}

/// Append-only play-by-play log per game.
pub trait GameLogRepository: Send + Sync {
    /// Append entries to the end of `game_id`'s log
    fn append(&self, game_id: &GameId, entries: &[LogEntry]) -> Result<()>;

    /// All entries of `game_id`'s log, oldest first. Unknown games have an empty log.
    fn entries(&self, game_id: &GameId) -> Result<Vec<LogEntry>>;

    /// Remove the log of `game_id`
    fn delete(&self, game_id: &GameId) -> Result<()>;

    /// The last `count` entries, oldest first
    fn tail(&self, game_id: &GameId, count: usize) -> Result<Vec<LogEntry>> {
        let mut entries = self.entries(game_id)?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }
}
