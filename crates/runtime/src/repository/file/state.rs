//! File-based GameStateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::GameState;

use super::{game_path, list_game_files};
use crate::repository::{GameStateRepository, RepositoryError, Result};
use crate::types::GameId;

/// File-based implementation of GameStateRepository.
///
/// Stores one bincode file per game.
///
/// # File Format
///
/// States are stored as `{game_id}.bin`. Every save writes `{game_id}.bin.tmp`
/// first and renames it over the previous file, so a crash mid-save leaves
/// the last committed state readable.
pub struct FileGameStateRepository {
    base_dir: PathBuf,
}

impl FileGameStateRepository {
    const EXTENSION: &'static str = "bin";

    /// Create a new file-based state repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn state_path(&self, game_id: &GameId) -> Result<PathBuf> {
        game_path(&self.base_dir, game_id, Self::EXTENSION)
    }
}

impl GameStateRepository for FileGameStateRepository {
    fn save(&self, game_id: &GameId, state: &GameState) -> Result<()> {
        let path = self.state_path(game_id)?;
        let temp_path = path.with_extension("bin.tmp");

        let bytes =
            bincode::serialize(state).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved state[{}] nonce {} to {}",
            game_id,
            state.nonce,
            path.display()
        );

        Ok(())
    }

    fn load(&self, game_id: &GameId) -> Result<Option<GameState>> {
        let path = self.state_path(game_id)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state: GameState = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded state[{}] from {}", game_id, path.display());

        Ok(Some(state))
    }

    fn exists(&self, game_id: &GameId) -> bool {
        self.state_path(game_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, game_id: &GameId) -> Result<()> {
        let path = self.state_path(game_id)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted state[{}]", game_id);
        }

        Ok(())
    }

    fn list_games(&self) -> Result<Vec<GameId>> {
        list_game_files(&self.base_dir, Self::EXTENSION)
    }
}
