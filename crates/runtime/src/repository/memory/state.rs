//! In-memory GameStateRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::GameState;

use crate::repository::{GameStateRepository, RepositoryError, Result};
use crate::types::GameId;

/// In-memory implementation of GameStateRepository.
///
/// Stores one state per game id for testing and local development.
pub struct InMemoryGameStateRepository {
    states: RwLock<HashMap<GameId, GameState>>,
}

impl InMemoryGameStateRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            states: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryGameStateRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateRepository for InMemoryGameStateRepository {
    fn save(&self, game_id: &GameId, state: &GameState) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.insert(game_id.clone(), state.clone());
        Ok(())
    }

    fn load(&self, game_id: &GameId) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.get(game_id).cloned())
    }

    fn exists(&self, game_id: &GameId) -> bool {
        self.states
            .read()
            .map(|states| states.contains_key(game_id))
            .unwrap_or(false)
    }

    fn delete(&self, game_id: &GameId) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.remove(game_id);
        Ok(())
    }

    fn list_games(&self) -> Result<Vec<GameId>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut games: Vec<GameId> = states.keys().cloned().collect();
        games.sort_unstable();
        Ok(games)
    }
}
