//! Deterministic rules of the dice-and-card baseball game.
//!
//! `game-core` defines the canonical rules (cards, at-bat resolution, the
//! half-inning state machine) and exposes pure APIs that can be reused by both
//! the runtime and offline tools. All state mutation flows through
//! [`engine::GameEngine`] or the pure [`engine::apply_outcome`], and supporting
//! crates depend on the types re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod play;
pub mod state;

pub use config::GameConfig;
pub use engine::{
    AtBatPreview, ExecuteError, GameEnding, GameEngine, PlayReport, Transition, TransitionPhase,
    apply_outcome,
};
pub use env::{
    Card, CardCoordinate, CardError, CardKind, CardOracle, ConfigOracle, Env, GameEnv, Lineup,
    OracleError, PcgRng, RngOracle, RollContext, RosterOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use play::{
    AtBatContext, AtBatOutcome, BroadcastNarrator, Narrator, PlayClass, PlayEffect, PlayRecord,
    PlayResult, Roll, resolve_at_bat, resolve_roll,
};
pub use state::{
    BaseRunners, BattingOrder, Controller, GamePhase, GameState, Half, HalfInningScore,
    InitializationError, InningScoreLedger, LogEntry, LogEntryKind, Matchup, PlayerId, Side,
    TeamId,
};
