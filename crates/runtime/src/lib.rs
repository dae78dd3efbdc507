//! Runtime orchestration for dice-and-card baseball games.
//!
//! This crate wires together oracle access, repositories, turn providers and
//! per-game worker tasks into a cohesive runtime API. Consumers embed
//! [`Runtime`] to create or resume games, drive at-bats, subscribe to events,
//! and talk to a single game through [`GameHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;
pub mod types;

mod workers;

pub use api::{
    AutoTurnProvider, ChannelTurnProvider, GameHandle, Result, RuntimeError, TurnDecision,
    TurnProvider,
};
pub use events::{Event, EventBus, FinalScore, GameEvent, PlayEvent, Topic};
pub use oracle::{CardOracleImpl, ConfigOracleImpl, OracleManager, RosterOracleImpl, TeamEntry};
pub use repository::{
    FileGameLogRepository, FileGameStateRepository, GameLogRepository, GameStateRepository,
    InMemoryGameLogRepository, InMemoryGameStateRepository, RepositoryError,
};
pub use runtime::{NewGame, Runtime, RuntimeBuilder, RuntimeConfig};
pub use types::GameId;
