//! Append-only play-by-play log files.
//!
//! Each game gets a `{game_id}.jsonl` file holding one JSON-encoded
//! [`LogEntry`] per line.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use game_core::LogEntry;

use super::game_path;
use crate::repository::{GameLogRepository, RepositoryError, Result};
use crate::types::GameId;

/// JSON Lines implementation of [`GameLogRepository`].
pub struct FileGameLogRepository {
    base_dir: PathBuf,
}

impl FileGameLogRepository {
    const EXTENSION: &'static str = "jsonl";

    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn log_path(&self, game_id: &GameId) -> Result<PathBuf> {
        game_path(&self.base_dir, game_id, Self::EXTENSION)
    }
}

impl GameLogRepository for FileGameLogRepository {
    fn append(&self, game_id: &GameId, entries: &[LogEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let path = self.log_path(game_id)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(RepositoryError::Io)?;

        // Lines are assembled in the buffer and hit the file in one flush.
        let mut writer = BufWriter::new(file);
        for entry in entries {
            serde_json::to_writer(&mut writer, entry)
                .map_err(|e| RepositoryError::Json(e.to_string()))?;
            writer.write_all(b"\n").map_err(RepositoryError::Io)?;
        }
        writer.flush().map_err(RepositoryError::Io)?;

        tracing::trace!(
            "Appended {} log entries for {} to {}",
            entries.len(),
            game_id,
            path.display()
        );

        Ok(())
    }

    fn entries(&self, game_id: &GameId) -> Result<Vec<LogEntry>> {
        let path = self.log_path(game_id)?;

        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&path).map_err(RepositoryError::Io)?);
        let mut entries = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(RepositoryError::Io)?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                RepositoryError::CorruptedData(format!(
                    "{} line {}: {}",
                    path.display(),
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    fn delete(&self, game_id: &GameId) -> Result<()> {
        let path = self.log_path(game_id)?;
        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
        }
        Ok(())
    }
}
