//! High-level runtime orchestrator.
//!
//! The runtime owns one worker per open game, wires up command/event channels,
//! and exposes a builder-based API for clients to create, resume and drive
//! games.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use game_core::{Controller, GameState, LogEntry, PlayReport, Side, TeamId};

use crate::api::{
    AutoTurnProvider, GameHandle, Result, RuntimeError, TurnDecision, TurnProvider,
};
use crate::events::{Event, EventBus, GameEvent, Topic};
use crate::oracle::OracleManager;
use crate::repository::{
    GameLogRepository, GameStateRepository, InMemoryGameLogRepository,
    InMemoryGameStateRepository,
};
use crate::types::GameId;
use crate::workers::{Command, GameWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Parameters of a game to create.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub home: TeamId,
    pub away: TeamId,
    pub human_side: Option<Side>,
    /// Dice seed. A random seed is drawn when unset.
    pub seed: Option<u64>,
}

impl NewGame {
    /// Fully automated game between `home` and `away`.
    pub fn new(home: impl Into<TeamId>, away: impl Into<TeamId>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            human_side: None,
            seed: None,
        }
    }

    pub fn human(mut self, side: Side) -> Self {
        self.human_side = Some(side);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

struct OpenGame {
    handle: GameHandle,
    worker: JoinHandle<()>,
}

/// Main runtime that orchestrates games
///
/// Design: Runtime owns one worker per open game and decides, through the
/// turn providers, when each at-bat is rolled. [`GameHandle`] provides a
/// cloneable façade to a single game.
pub struct Runtime {
    config: RuntimeConfig,
    oracles: OracleManager,
    state_repo: Arc<dyn GameStateRepository>,
    log_repo: Arc<dyn GameLogRepository>,
    event_bus: EventBus,

    // Turn providers (injected by user)
    human_provider: Option<Arc<dyn TurnProvider>>,
    cpu_provider: Arc<dyn TurnProvider>,

    games: HashMap<GameId, OpenGame>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Subscribe to events of every game on `topic`
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Sets up a new game, persists its opening state and starts its worker.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::InitialState`] when the rosters cannot field the
    /// matchup, or a repository error if the opening state cannot be saved.
    pub async fn create_game(&mut self, setup: NewGame) -> Result<GameId> {
        let seed = setup.seed.unwrap_or_else(rand::random);
        let state = GameState::from_roster(
            self.oracles.roster(),
            setup.home,
            setup.away,
            setup.human_side,
            seed,
        )
        .map_err(RuntimeError::InitialState)?;

        let mut game_id = GameId::generate();
        while self.state_repo.exists(&game_id) || self.games.contains_key(&game_id) {
            game_id = GameId::generate();
        }

        self.state_repo.save(&game_id, &state)?;

        info!(
            target: "runtime",
            game = %game_id,
            home = %state.matchup.home,
            away = %state.matchup.away,
            human = ?state.matchup.human_side,
            seed,
            "Game created"
        );
        self.event_bus.publish(GameEvent::Created {
            game_id: game_id.clone(),
            matchup: state.matchup.clone(),
        });

        self.spawn_worker(game_id.clone(), state);
        Ok(game_id)
    }

    /// Loads a stored game and starts its worker.
    ///
    /// Opening a game that is already open returns its existing handle.
    pub async fn open_game(&mut self, game_id: &GameId) -> Result<GameHandle> {
        if let Some(open) = self.games.get(game_id) {
            return Ok(open.handle.clone());
        }

        let state = self
            .state_repo
            .load(game_id)?
            .ok_or_else(|| RuntimeError::GameNotFound(game_id.clone()))?;

        info!(
            target: "runtime",
            game = %game_id,
            inning = state.inning,
            half = %state.half,
            phase = %state.phase,
            "Game resumed"
        );
        self.event_bus.publish(GameEvent::Resumed {
            game_id: game_id.clone(),
            nonce: state.nonce,
        });

        Ok(self.spawn_worker(game_id.clone(), state))
    }

    fn spawn_worker(&mut self, game_id: GameId, state: GameState) -> GameHandle {
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let handle = GameHandle::new(game_id.clone(), command_tx, self.event_bus.clone());

        let worker = GameWorker::new(
            game_id.clone(),
            state,
            self.oracles.clone(),
            Arc::clone(&self.state_repo),
            Arc::clone(&self.log_repo),
            command_rx,
            self.event_bus.clone(),
        );
        let worker = tokio::spawn(async move {
            worker.run().await;
        });

        self.games.insert(
            game_id,
            OpenGame {
                handle: handle.clone(),
                worker,
            },
        );
        handle
    }

    /// Get a cloneable handle to an open game
    pub fn handle(&self, game_id: &GameId) -> Result<GameHandle> {
        self.games
            .get(game_id)
            .map(|open| open.handle.clone())
            .ok_or_else(|| RuntimeError::GameNotFound(game_id.clone()))
    }

    /// Ids of the games with a running worker, sorted.
    pub fn open_games(&self) -> Vec<GameId> {
        let mut ids: Vec<_> = self.games.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of every persisted game, open or not.
    pub fn stored_games(&self) -> Result<Vec<GameId>> {
        Ok(self.state_repo.list_games()?)
    }

    /// Play-by-play of a game, oldest first.
    pub fn game_log(&self, game_id: &GameId) -> Result<Vec<LogEntry>> {
        Ok(self.log_repo.entries(game_id)?)
    }

    /// Execute a single at-bat step
    ///
    /// Prepares the at-bat, lets the provider of the controlling side decide,
    /// then plays it. Returns `None` when the provider paused.
    pub async fn step(&self, game_id: &GameId) -> Result<Option<PlayReport>> {
        let handle = self.handle(game_id)?;
        let preview = handle.prepare_at_bat().await?;

        let provider = match preview.controller {
            Controller::Human => self
                .human_provider
                .as_ref()
                .ok_or(RuntimeError::ProviderNotSet {
                    controller: Controller::Human,
                })?,
            Controller::Cpu => &self.cpu_provider,
        };

        match provider.decide(game_id, &preview).await? {
            TurnDecision::Roll => Ok(Some(handle.play_prepared(&preview).await?)),
            TurnDecision::Pause => {
                debug!(target: "runtime", game = %game_id, nonce = preview.nonce, "Turn paused");
                Ok(None)
            }
        }
    }

    /// Plays automated at-bats until a human-controlled at-bat comes up, the
    /// automated provider pauses, or the game ends.
    pub async fn play_until_human(&self, game_id: &GameId) -> Result<Vec<PlayReport>> {
        let handle = self.handle(game_id)?;
        let mut reports = Vec::new();

        loop {
            let preview = match handle.prepare_at_bat().await {
                Ok(preview) => preview,
                Err(error) if error.is_game_over() => break,
                Err(error) => return Err(error),
            };
            if preview.controller == Controller::Human {
                break;
            }
            match self.cpu_provider.decide(game_id, &preview).await? {
                TurnDecision::Roll => reports.push(handle.play_prepared(&preview).await?),
                TurnDecision::Pause => break,
            }
        }

        Ok(reports)
    }

    /// Steps the game until it is complete or a provider pauses, then returns
    /// the resulting state.
    pub async fn run_to_completion(&self, game_id: &GameId) -> Result<GameState> {
        loop {
            match self.step(game_id).await {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(error) if error.is_game_over() => break,
                Err(error) => return Err(error),
            }
        }
        self.handle(game_id)?.query_state().await
    }

    /// Set the provider that gates human-controlled at-bats
    pub fn set_human_provider(&mut self, provider: impl TurnProvider + 'static) {
        self.human_provider = Some(Arc::new(provider));
    }

    /// Set the provider that gates automated at-bats
    pub fn set_cpu_provider(&mut self, provider: impl TurnProvider + 'static) {
        self.cpu_provider = Arc::new(provider);
    }

    /// Stops the worker of one game. Its stored state is kept.
    pub async fn close_game(&mut self, game_id: &GameId) -> Result<()> {
        let open = self
            .games
            .remove(game_id)
            .ok_or_else(|| RuntimeError::GameNotFound(game_id.clone()))?;
        Self::stop(open).await
    }

    async fn stop(open: OpenGame) -> Result<()> {
        // A closed channel means the worker already exited.
        let _ = open.handle.shutdown().await;
        open.worker.await.map_err(RuntimeError::WorkerJoin)
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(mut self) -> Result<()> {
        for (_, open) in self.games.drain() {
            Self::stop(open).await?;
        }
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    state_repo: Option<Arc<dyn GameStateRepository>>,
    log_repo: Option<Arc<dyn GameLogRepository>>,
    human_provider: Option<Arc<dyn TurnProvider>>,
    cpu_provider: Option<Arc<dyn TurnProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            state_repo: None,
            log_repo: None,
            human_provider: None,
            cpu_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Where game states are persisted (default: in memory)
    pub fn state_repository(mut self, repo: impl GameStateRepository + 'static) -> Self {
        self.state_repo = Some(Arc::new(repo));
        self
    }

    /// Where play-by-play logs are persisted (default: in memory)
    pub fn log_repository(mut self, repo: impl GameLogRepository + 'static) -> Self {
        self.log_repo = Some(Arc::new(repo));
        self
    }

    /// Set human turn provider (optional)
    pub fn human_provider(mut self, provider: impl TurnProvider + 'static) -> Self {
        self.human_provider = Some(Arc::new(provider));
        self
    }

    /// Set automated turn provider (default: [`AutoTurnProvider`])
    pub fn cpu_provider(mut self, provider: impl TurnProvider + 'static) -> Self {
        self.cpu_provider = Some(Arc::new(provider));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;

        Ok(Runtime {
            event_bus: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            oracles,
            state_repo: self
                .state_repo
                .unwrap_or_else(|| Arc::new(InMemoryGameStateRepository::new())),
            log_repo: self
                .log_repo
                .unwrap_or_else(|| Arc::new(InMemoryGameLogRepository::new())),
            human_provider: self.human_provider,
            cpu_provider: self
                .cpu_provider
                .unwrap_or_else(|| Arc::new(AutoTurnProvider)),
            games: HashMap::new(),
        })
    }
}
