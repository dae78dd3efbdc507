//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during gameplay:
//! - Game state (for save/load and resuming)
//! - The play-by-play log
//!
//! Static content (cards, rosters, config) is handled by Oracles, not Repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileGameLogRepository, FileGameStateRepository};
pub use memory::{InMemoryGameLogRepository, InMemoryGameStateRepository};
pub use traits::{GameLogRepository, GameStateRepository};
