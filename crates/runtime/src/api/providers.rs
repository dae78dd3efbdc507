//! Asynchronous abstraction for deciding when an at-bat is rolled.
//!
//! Every at-bat is decided by dice, so a provider contributes no play of its
//! own; it only gates the roll. Runtime users plug in [`TurnProvider`]
//! implementations so one side can wait on a human while the automated
//! opponent rolls immediately.
use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use game_core::AtBatPreview;

use super::errors::{Result, RuntimeError};
use crate::types::GameId;

/// What the controlling side wants to do with a prepared at-bat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDecision {
    /// Roll the dice now.
    Roll,
    /// Stop driving the game; the at-bat stays pending.
    Pause,
}

/// Trait for gating at-bats on the controlling side.
///
/// Different implementations can handle:
/// - Human input (from UI/CLI)
/// - The automated opponent
/// - Scripted decisions in tests
#[async_trait]
pub trait TurnProvider: Send + Sync {
    /// Decide what to do with the at-bat described by `preview`.
    async fn decide(&self, game_id: &GameId, preview: &AtBatPreview) -> Result<TurnDecision>;
}

/// Automated opponent: rolls every at-bat as soon as it is prepared.
pub struct AutoTurnProvider;

#[async_trait]
impl TurnProvider for AutoTurnProvider {
    async fn decide(&self, _game_id: &GameId, _preview: &AtBatPreview) -> Result<TurnDecision> {
        Ok(TurnDecision::Roll)
    }
}

/// Waits for decisions pushed through a channel, one per at-bat.
///
/// The front end keeps the [`mpsc::Sender`] returned by
/// [`ChannelTurnProvider::new`] and sends [`TurnDecision::Roll`] when the
/// player clicks "roll".
pub struct ChannelTurnProvider {
    decisions: Mutex<mpsc::Receiver<TurnDecision>>,
}

impl ChannelTurnProvider {
    pub fn new(buffer: usize) -> (Self, mpsc::Sender<TurnDecision>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (
            Self {
                decisions: Mutex::new(rx),
            },
            tx,
        )
    }
}

#[async_trait]
impl TurnProvider for ChannelTurnProvider {
    async fn decide(&self, game_id: &GameId, preview: &AtBatPreview) -> Result<TurnDecision> {
        tracing::debug!(
            target: "runtime::provider",
            game = %game_id,
            batter = %preview.batter,
            nonce = preview.nonce,
            "Waiting for human decision"
        );
        self.decisions
            .lock()
            .await
            .recv()
            .await
            .ok_or(RuntimeError::TurnProviderChannelClosed)
    }
}
