//! Game worker that owns the authoritative [`GameState`] of one game.
//!
//! Receives commands from [`crate::api::GameHandle`], plays at-bats via
//! [`GameEngine`], persists the result and publishes events to the EventBus.
//! Being the only writer of its game is what keeps the read-modify-write of
//! every at-bat free of lost updates.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use game_core::{AtBatPreview, GameEngine, GameError, GameState, PlayReport, Side};

use crate::api::{Result, RuntimeError};
use crate::events::{EventBus, FinalScore, GameEvent, PlayEvent};
use crate::oracle::OracleManager;
use crate::repository::{GameLogRepository, GameStateRepository};
use crate::types::GameId;

/// Commands that can be sent to a game worker
pub enum Command {
    /// Look up who bats next without rolling.
    PrepareAtBat {
        reply: oneshot::Sender<Result<AtBatPreview>>,
    },
    /// Roll and apply the next at-bat.
    ///
    /// With `expected_nonce` set, the at-bat is only played if no other
    /// at-bat was applied since it was prepared.
    PlayAtBat {
        expected_nonce: Option<u64>,
        reply: oneshot::Sender<Result<PlayReport>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Stop the worker after the commands already queued.
    Shutdown,
}

/// Background task that processes the commands of a single game.
pub struct GameWorker {
    game_id: GameId,
    state: GameState,
    oracles: OracleManager,
    state_repo: Arc<dyn GameStateRepository>,
    log_repo: Arc<dyn GameLogRepository>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl GameWorker {
    /// Creates a new game worker.
    pub fn new(
        game_id: GameId,
        state: GameState,
        oracles: OracleManager,
        state_repo: Arc<dyn GameStateRepository>,
        log_repo: Arc<dyn GameLogRepository>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        debug!(
            target: "runtime::worker",
            game = %game_id,
            inning = state.inning,
            half = %state.half,
            nonce = state.nonce,
            "GameWorker initialized"
        );

        Self {
            game_id,
            state,
            oracles,
            state_repo,
            log_repo,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                else => break,
            }
        }

        debug!(target: "runtime::worker", game = %self.game_id, "GameWorker stopped");
    }

    /// Returns `false` once the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::PrepareAtBat { reply } => {
                let result = self.prepare_at_bat();
                if reply.send(result).is_err() {
                    debug!("PrepareAtBat reply channel closed (caller dropped)");
                }
            }
            Command::PlayAtBat {
                expected_nonce,
                reply,
            } => {
                let result = self.play_at_bat(expected_nonce);
                if reply.send(result).is_err() {
                    debug!("PlayAtBat reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => return false,
        }
        true
    }

    fn prepare_at_bat(&mut self) -> Result<AtBatPreview> {
        let env = self.oracles.as_game_env();
        let engine = GameEngine::new(&mut self.state);
        Ok(engine.preview(&env)?)
    }

    /// Plays one at-bat as a single unit: the new state is persisted and its
    /// play-by-play appended before it replaces the in-memory state, so a
    /// failure at any step leaves the stored state, the log and the live state
    /// at the previous at-bat.
    fn play_at_bat(&mut self, expected_nonce: Option<u64>) -> Result<PlayReport> {
        let nonce = self.state.nonce;
        if let Some(prepared) = expected_nonce
            && prepared != nonce
        {
            warn!(
                target: "runtime::worker",
                game = %self.game_id,
                prepared,
                current = nonce,
                "Rejected stale at-bat"
            );
            return Err(RuntimeError::StaleAtBat {
                prepared,
                current: nonce,
            });
        }

        let mut working_state = self.state.clone();
        let env = self.oracles.as_game_env();
        let report = match GameEngine::new(&mut working_state).play_at_bat(&env) {
            Ok(report) => report,
            Err(error) => {
                warn!(
                    target: "runtime::worker",
                    game = %self.game_id,
                    nonce,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    error = %error,
                    "At-bat rejected"
                );
                self.event_bus
                    .publish(PlayEvent::rejected(&self.game_id, nonce, &error));
                return Err(error.into());
            }
        };

        if let Err(error) = self.state_repo.save(&self.game_id, &working_state) {
            error!(
                target: "runtime::worker",
                game = %self.game_id,
                nonce,
                error = %error,
                "Failed to persist at-bat, state not advanced"
            );
            return Err(error.into());
        }

        // State and play-by-play commit together: a failed append puts the
        // previous state back in the store before the at-bat is rejected.
        if let Err(error) = self.log_repo.append(&self.game_id, &report.log) {
            error!(
                target: "runtime::worker",
                game = %self.game_id,
                nonce,
                error = %error,
                "Failed to append play-by-play, rolling back at-bat"
            );
            if let Err(restore) = self.state_repo.save(&self.game_id, &self.state) {
                error!(
                    target: "runtime::worker",
                    game = %self.game_id,
                    nonce,
                    error = %restore,
                    "Failed to restore previous state"
                );
            }
            return Err(error.into());
        }
        self.state = working_state;

        debug!(
            target: "runtime::worker",
            game = %self.game_id,
            nonce,
            batter = %report.preview.batter,
            result = %report.outcome.result(),
            runs = report.outcome.runs_scored,
            outs = self.state.outs,
            "At-bat played"
        );

        self.publish_play(&report);
        Ok(report)
    }

    fn publish_play(&self, report: &PlayReport) {
        self.event_bus.publish(PlayEvent::AtBatPlayed {
            game_id: self.game_id.clone(),
            report: Box::new(report.clone()),
        });

        if let Some(ending) = report.ending {
            let final_score = FinalScore {
                home: self.state.runs(Side::Home),
                away: self.state.runs(Side::Away),
            };
            let winner = self.state.winner();
            info!(
                target: "runtime::worker",
                game = %self.game_id,
                home = final_score.home,
                away = final_score.away,
                ending = %ending,
                "Game complete"
            );
            self.event_bus.publish(GameEvent::Completed {
                game_id: self.game_id.clone(),
                final_score,
                winner,
                ending,
            });
        } else if report.half_inning_over {
            info!(
                target: "runtime::worker",
                game = %self.game_id,
                inning = self.state.inning,
                half = %self.state.half,
                "Half-inning started"
            );
            self.event_bus.publish(GameEvent::HalfInningStarted {
                game_id: self.game_id.clone(),
                inning: self.state.inning,
                half: self.state.half,
            });
        }
    }
}
