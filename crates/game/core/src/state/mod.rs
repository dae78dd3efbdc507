//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the inning, outs, base
//! occupancy, batting order and score ledger. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.
mod error;
pub mod types;

pub use error::InitializationError;
pub use types::{
    BaseRunners, BattingOrder, Controller, GamePhase, Half, HalfInningScore, InningScoreLedger,
    LogEntry, LogEntryKind, Matchup, PlayerId, Side, TeamId, ordinal_suffix,
};

use crate::env::RosterOracle;

/// Canonical snapshot of one game.
///
/// Created once at game start (top of the first, no outs, empty bases) and
/// replaced after every resolved at-bat. Once `phase` is
/// [`GamePhase::Complete`] the state no longer changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game creation and never modified.
    /// Combined with `nonce` to derive the seed of every roll.
    pub game_seed: u64,

    /// Number of at-bats resolved so far.
    pub nonce: u64,

    pub matchup: Matchup,

    /// Current inning, starting at 1. No upper bound (extra innings).
    pub inning: u32,
    pub half: Half,
    /// Outs in the current half-inning, always below the per-half limit while active.
    pub outs: u8,
    pub bases: BaseRunners,
    pub batting_order: BattingOrder,
    pub phase: GamePhase,
    pub ledger: InningScoreLedger,
}

impl GameState {
    /// Opening state for `matchup`: top of the first, no outs, bases empty,
    /// both cursors on the leadoff hitter.
    pub fn new(matchup: Matchup, game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            matchup,
            inning: 1,
            half: Half::Top,
            outs: 0,
            bases: BaseRunners::EMPTY,
            batting_order: BattingOrder::default(),
            phase: GamePhase::Active,
            ledger: InningScoreLedger::new(),
        }
    }

    /// Builds the opening state by looking up both teams on the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if either team lacks a starting pitcher or batters,
    /// or if both sides name the same team.
    pub fn from_roster<R>(
        roster: &R,
        home: TeamId,
        away: TeamId,
        human_side: Option<Side>,
        game_seed: u64,
    ) -> Result<Self, InitializationError>
    where
        R: RosterOracle + ?Sized,
    {
        if home == away {
            return Err(InitializationError::SameTeam { team: home });
        }

        for team in [&home, &away] {
            if roster.lineup(team).is_empty() {
                return Err(InitializationError::EmptyLineup { team: team.clone() });
            }
        }

        let home_pitcher = roster
            .starting_pitcher(&home)
            .ok_or_else(|| InitializationError::PitcherMissing { team: home.clone() })?;
        let away_pitcher = roster
            .starting_pitcher(&away)
            .ok_or_else(|| InitializationError::PitcherMissing { team: away.clone() })?;

        Ok(Self::new(
            Matchup {
                home,
                away,
                home_pitcher,
                away_pitcher,
                human_side,
            },
            game_seed,
        ))
    }

    pub const fn is_active(&self) -> bool {
        matches!(self.phase, GamePhase::Active)
    }

    pub const fn batting_side(&self) -> Side {
        self.half.batting_side()
    }

    pub const fn fielding_side(&self) -> Side {
        self.half.fielding_side()
    }

    /// Who rolls the current at-bat.
    pub fn controller_at_bat(&self) -> Controller {
        self.matchup.controller(self.batting_side())
    }

    pub fn runs(&self, side: Side) -> u32 {
        self.ledger.runs(side)
    }

    /// Side with more runs, once the game is complete.
    pub fn winner(&self) -> Option<Side> {
        if self.is_active() {
            return None;
        }
        let (home, away) = (self.runs(Side::Home), self.runs(Side::Away));
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Lineup;

    struct League;

    impl RosterOracle for League {
        fn lineup(&self, team: &TeamId) -> Lineup {
            match team.as_str() {
                "bench" => Lineup::new(),
                _ => [PlayerId::new(format!("{team}-b1"))].into_iter().collect(),
            }
        }

        fn starting_pitcher(&self, team: &TeamId) -> Option<PlayerId> {
            (team.as_str() != "bullpen").then(|| PlayerId::new(format!("{team}-p1")))
        }
    }

    #[test]
    fn opening_state_from_roster() {
        let state = GameState::from_roster(
            &League,
            TeamId::from("home"),
            TeamId::from("away"),
            Some(Side::Home),
            11,
        )
        .unwrap();

        assert_eq!((state.inning, state.half, state.outs), (1, Half::Top, 0));
        assert_eq!(state.bases, BaseRunners::EMPTY);
        assert_eq!(state.matchup.home_pitcher, PlayerId::from("home-p1"));
        assert_eq!(state.controller_at_bat(), Controller::Cpu);
        assert!(state.is_active());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn setup_errors() {
        let setup = |home: &str, away: &str| {
            GameState::from_roster(&League, TeamId::from(home), TeamId::from(away), None, 0)
        };
        assert!(matches!(setup("a", "a"), Err(InitializationError::SameTeam { .. })));
        assert!(matches!(setup("a", "bench"), Err(InitializationError::EmptyLineup { .. })));
        assert_eq!(
            setup("bullpen", "a"),
            Err(InitializationError::PitcherMissing {
                team: TeamId::from("bullpen")
            })
        );
    }
}
