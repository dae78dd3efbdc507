//! In-memory GameLogRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::LogEntry;

use crate::repository::{GameLogRepository, RepositoryError, Result};
use crate::types::GameId;

/// Keeps every game's play-by-play log in a vector.
#[derive(Default)]
pub struct InMemoryGameLogRepository {
    logs: RwLock<HashMap<GameId, Vec<LogEntry>>>,
}

impl InMemoryGameLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameLogRepository for InMemoryGameLogRepository {
    fn append(&self, game_id: &GameId, entries: &[LogEntry]) -> Result<()> {
        let mut logs = self
            .logs
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        logs.entry(game_id.clone())
            .or_default()
            .extend_from_slice(entries);
        Ok(())
    }

    fn entries(&self, game_id: &GameId) -> Result<Vec<LogEntry>> {
        let logs = self
            .logs
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(logs.get(game_id).cloned().unwrap_or_default())
    }

    fn delete(&self, game_id: &GameId) -> Result<()> {
        let mut logs = self
            .logs
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        logs.remove(game_id);
        Ok(())
    }
}
