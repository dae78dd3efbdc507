//! File-based repository implementations.

mod log;
mod state;

pub use log::FileGameLogRepository;
pub use state::FileGameStateRepository;

use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, Result};
use crate::types::GameId;

/// `{base_dir}/{game_id}.{extension}`, refusing ids that would escape `base_dir`.
fn game_path(base_dir: &Path, game_id: &GameId, extension: &str) -> Result<PathBuf> {
    if !game_id.is_path_safe() {
        return Err(RepositoryError::InvalidGameId(game_id.clone()));
    }
    Ok(base_dir.join(format!("{game_id}.{extension}")))
}

/// Game ids of every `*.{extension}` file directly under `base_dir`.
fn list_game_files(base_dir: &Path, extension: &str) -> Result<Vec<GameId>> {
    let mut games = Vec::new();
    let suffix = format!(".{extension}");

    let entries = std::fs::read_dir(base_dir).map_err(RepositoryError::Io)?;

    for entry in entries {
        let entry = entry.map_err(RepositoryError::Io)?;
        let path = entry.path();

        if let Some(filename) = path.file_name().and_then(|s| s.to_str())
            && let Some(stem) = filename.strip_suffix(suffix.as_str())
        {
            let game_id = GameId::new(stem);
            if game_id.is_path_safe() {
                games.push(game_id);
            }
        }
    }

    games.sort_unstable();
    Ok(games)
}
