//! In-memory repository implementations for testing and development.

mod log;
mod state;

pub use log::InMemoryGameLogRepository;
pub use state::InMemoryGameStateRepository;
