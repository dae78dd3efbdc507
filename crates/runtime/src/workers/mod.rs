//! Worker tasks that back the runtime orchestration.
//!
//! Each open game is owned by exactly one [`GameWorker`], which serializes
//! every command sent to that game.

mod game;

pub use game::{Command, GameWorker};
