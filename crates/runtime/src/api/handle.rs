//! Cloneable façade for issuing commands to one game's worker.
//!
//! [`GameHandle`] hides channel plumbing and offers async helpers for
//! preparing and playing at-bats or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{AtBatPreview, GameState, PlayReport};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::types::GameId;
use crate::workers::Command;

/// Client-facing handle to interact with one running game
#[derive(Clone)]
pub struct GameHandle {
    game_id: GameId,
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl GameHandle {
    pub(crate) fn new(
        game_id: GameId,
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            game_id,
            command_tx,
            event_bus,
        }
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Looks up the next batter, pitcher and controlling side without rolling
    pub async fn prepare_at_bat(&self) -> Result<AtBatPreview> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::PrepareAtBat { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Rolls, resolves, applies and persists the next at-bat
    pub async fn play_at_bat(&self) -> Result<PlayReport> {
        self.send_play(None).await
    }

    /// Plays the at-bat described by `preview`.
    ///
    /// Fails with [`RuntimeError::StaleAtBat`] when another caller played
    /// the at-bat after `preview` was prepared.
    pub async fn play_prepared(&self, preview: &AtBatPreview) -> Result<PlayReport> {
        self.send_play(Some(preview.nonce)).await
    }

    async fn send_play(&self, expected_nonce: Option<u64>) -> Result<PlayReport> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::PlayAtBat {
                expected_nonce,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// The bus is shared by every game of a runtime; filter on `game_id` when
    /// following a single game.
    ///
    /// # Topics
    ///
    /// - `Topic::Game` - Creation, resumption, half-inning rollover, completion
    /// - `Topic::Play` - Played and rejected at-bats
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Asks the worker to stop once queued commands are handled
    pub(crate) async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
