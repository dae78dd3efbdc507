mod bases;
mod common;
mod ledger;
mod log;
mod matchup;

pub use bases::BaseRunners;
pub use common::{Controller, GamePhase, Half, PlayerId, Side, TeamId, ordinal_suffix};
pub use ledger::{HalfInningScore, InningScoreLedger};
pub use log::{LogEntry, LogEntryKind};
pub use matchup::{BattingOrder, Matchup};
