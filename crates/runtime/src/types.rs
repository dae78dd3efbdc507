//! Common identifiers used throughout the runtime.
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifier of one persisted game.
///
/// Generated ids look like `game-20260412T193005-8f3a1c2e`: creation time in
/// UTC followed by 32 random bits. They are safe to use as file names.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    const PREFIX: &'static str = "game-";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh identifier stamped with the current time.
    pub fn generate() -> Self {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S");
        let suffix: u32 = rand::thread_rng().r#gen();
        Self(format!("{}{stamp}-{suffix:08x}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id can be used verbatim as a file stem.
    pub fn is_path_safe(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
