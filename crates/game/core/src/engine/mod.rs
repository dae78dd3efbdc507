//! At-bat execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. One call
//! to [`GameEngine::play_at_bat`] draws the dice, resolves the duel, applies
//! the half-inning rules, and only then swaps the new state in. A failure at
//! any step leaves the state untouched.

mod errors;
mod report;
mod transition;

pub use errors::{ExecuteError, TransitionPhase};
pub use report::{inning_header, play_log};
pub use transition::{GameEnding, Transition, apply_outcome};

use crate::env::{GameEnv, RosterOracle};
use crate::play::{AtBatContext, AtBatOutcome, resolve_at_bat};
use crate::state::{BaseRunners, Controller, GameState, Half, LogEntry, PlayerId, Side};

/// Who is up next and under what circumstances.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtBatPreview {
    pub inning: u32,
    pub half: Half,
    pub batting_side: Side,
    pub controller: Controller,
    pub batter: PlayerId,
    pub pitcher: PlayerId,
    pub bases: BaseRunners,
    pub outs: u8,
    pub nonce: u64,
}

impl AtBatPreview {
    pub fn context(&self) -> AtBatContext {
        AtBatContext {
            batter: self.batter.clone(),
            pitcher: self.pitcher.clone(),
            bases: self.bases,
            outs: self.outs,
        }
    }
}

/// Everything produced by one played at-bat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayReport {
    pub preview: AtBatPreview,
    pub outcome: AtBatOutcome,
    pub half_inning_over: bool,
    pub ending: Option<GameEnding>,
    pub log: Vec<LogEntry>,
}

/// Game engine that resolves at-bats against a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Looks up the batter and pitcher of the next at-bat.
    ///
    /// # Errors
    ///
    /// `GameNotActive` once the game is over, `InvalidLineupState` when the
    /// batting-order cursor points past the lineup.
    pub fn preview(&self, env: &GameEnv<'_>) -> Result<AtBatPreview, ExecuteError> {
        let state = &*self.state;
        if !state.is_active() {
            return Err(ExecuteError::GameNotActive);
        }

        let roster = env.roster()?;
        let batting_side = state.batting_side();
        let team = state.matchup.team(batting_side);
        let cursor = state.batting_order.cursor(batting_side);
        let batter =
            roster
                .batter_at(team, cursor)
                .ok_or_else(|| ExecuteError::InvalidLineupState {
                    team: team.clone(),
                    cursor,
                })?;

        Ok(AtBatPreview {
            inning: state.inning,
            half: state.half,
            batting_side,
            controller: state.controller_at_bat(),
            batter,
            pitcher: state.matchup.pitcher(state.fielding_side()).clone(),
            bases: state.bases,
            outs: state.outs,
            nonce: state.nonce,
        })
    }

    /// Rolls, resolves and applies the next at-bat.
    ///
    /// # Errors
    ///
    /// Any error from [`GameEngine::preview`], the resolver or the state
    /// machine. The state is only replaced on success.
    pub fn play_at_bat(&mut self, env: &GameEnv<'_>) -> Result<PlayReport, ExecuteError> {
        let preview = self.preview(env)?;
        let outcome = resolve_at_bat(
            env,
            &preview.context(),
            self.state.game_seed,
            preview.nonce,
        )?;
        self.apply(env, preview, outcome)
    }

    /// Applies an already resolved outcome for `preview`.
    ///
    /// # Errors
    ///
    /// See [`apply_outcome`].
    pub fn apply(
        &mut self,
        env: &GameEnv<'_>,
        preview: AtBatPreview,
        outcome: AtBatOutcome,
    ) -> Result<PlayReport, ExecuteError> {
        let roster = env.roster()?;
        let config = env.game_config()?;
        let team = self.state.matchup.team(preview.batting_side).clone();
        let lineup_len = roster.lineup(&team).len();

        let transition = apply_outcome(self.state, &outcome, preview.half, lineup_len, &config)?;
        let log = play_log(
            preview.inning,
            preview.half,
            &outcome,
            &transition,
            &roster.team_abbreviation(&team),
        );

        let half_inning_over = transition.half_inning_over;
        let ending = transition.ending;
        *self.state = transition.state;

        Ok(PlayReport {
            preview,
            outcome,
            half_inning_over,
            ending,
            log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{Card, CardKind, CardOracle, Env, Lineup, OracleError, PcgRng};
    use crate::play::{BroadcastNarrator, PlayResult};
    use crate::state::{GamePhase, LogEntryKind, Matchup, TeamId};

    /// Every batter homers, every pitcher strikes everyone out.
    struct Cards;

    impl CardOracle for Cards {
        fn card(&self, player: &PlayerId, kind: CardKind) -> Option<Card> {
            match kind {
                CardKind::Batter if player.as_str() != "hole" => {
                    Some(Card::from_columns([PlayResult::HomeRun; 36]))
                }
                CardKind::Batter => Card::from_cells(std::iter::empty()).ok(),
                CardKind::Pitcher => Some(Card::from_columns([PlayResult::Strikeout; 36])),
            }
        }
    }

    struct Roster {
        away: Vec<&'static str>,
    }

    impl RosterOracle for Roster {
        fn lineup(&self, team: &TeamId) -> Lineup {
            let names: &[&str] = match team.as_str() {
                "away" => self.away.as_slice(),
                _ => &["h1", "h2", "h3"],
            };
            names.iter().map(|name| PlayerId::from(*name)).collect()
        }

        fn starting_pitcher(&self, team: &TeamId) -> Option<PlayerId> {
            Some(PlayerId::new(format!("{team}-p")))
        }

        fn team_abbreviation(&self, team: &TeamId) -> String {
            team.as_str()[..1].to_uppercase()
        }
    }

    fn game() -> GameState {
        GameState::new(
            Matchup {
                home: TeamId::from("home"),
                away: TeamId::from("away"),
                home_pitcher: PlayerId::from("home-p"),
                away_pitcher: PlayerId::from("away-p"),
                human_side: None,
            },
            2024,
        )
    }

    fn roster() -> Roster {
        Roster {
            away: vec!["a1", "a2"],
        }
    }

    #[test]
    fn preview_names_batter_and_opposing_pitcher() {
        let mut state = game();
        let roster = roster();
        let config = GameConfig::default();
        let env = Env::with_all(&Cards, &roster, &config, &PcgRng, &BroadcastNarrator);
        let engine = GameEngine::new(&mut state);
        let preview = engine.preview(&env.as_game_env()).unwrap();

        assert_eq!(preview.batter, PlayerId::from("a1"));
        assert_eq!(preview.pitcher, PlayerId::from("home-p"));
        assert_eq!(preview.batting_side, Side::Away);
        assert_eq!(preview.controller, Controller::Cpu);
    }

    #[test]
    fn play_at_bat_advances_state_and_logs() {
        let mut state = game();
        let roster = roster();
        let config = GameConfig::default();
        let env = Env::with_all(&Cards, &roster, &config, &PcgRng, &BroadcastNarrator);
        let env = env.as_game_env();
        let mut engine = GameEngine::new(&mut state);

        let report = engine.play_at_bat(&env).unwrap();
        let result = report.outcome.result();
        assert!(matches!(result, PlayResult::HomeRun | PlayResult::Strikeout));
        assert_eq!(report.log[0].text, report.outcome.play.description);
        if result == PlayResult::HomeRun {
            assert_eq!(report.log[1].kind, LogEntryKind::Run);
            assert_eq!(report.log[1].text, "1 run(s) score for A.");
        }

        let state = engine.state();
        assert_eq!(state.nonce, 1);
        assert_eq!(state.batting_order.cursor(Side::Away), 1);
    }

    #[test]
    fn games_always_finish() {
        let mut state = game();
        let roster = roster();
        let config = GameConfig::default();
        let env = Env::with_all(&Cards, &roster, &config, &PcgRng, &BroadcastNarrator);
        let env = env.as_game_env();
        let mut engine = GameEngine::new(&mut state);

        let mut plays = 0;
        while engine.state().is_active() {
            let report = engine.play_at_bat(&env).unwrap();
            plays += 1;
            assert!(plays < 10_000, "game did not terminate");
            if report.ending.is_some() {
                assert_eq!(report.log.last().unwrap().text, "Game over.");
            }
        }

        let state = engine.state();
        assert_eq!(state.phase, GamePhase::Complete);
        assert!(state.inning >= 9);
        assert!(state.winner().is_some());
        assert_eq!(
            engine.play_at_bat(&env).unwrap_err(),
            ExecuteError::GameNotActive
        );
    }

    #[test]
    fn lookup_failure_leaves_state_untouched() {
        let mut state = game();
        let roster = Roster {
            away: vec!["hole"],
        };
        let config = GameConfig::default();
        let env = Env::with_all(&Cards, &roster, &config, &PcgRng, &BroadcastNarrator);
        let env = env.as_game_env();
        let mut engine = GameEngine::new(&mut state);

        // Pitcher-card rolls still resolve, batter-card rolls hit the empty card.
        let mut failed = false;
        for _ in 0..50 {
            let snapshot = engine.state().clone();
            if let Err(err) = engine.play_at_bat(&env) {
                assert!(matches!(
                    err,
                    ExecuteError::Oracle(OracleError::CoordinateNotFound { .. })
                ));
                assert_eq!(engine.state(), &snapshot);
                failed = true;
                break;
            }
        }
        assert!(failed);
    }

    #[test]
    fn cursor_past_lineup_is_invalid() {
        let mut state = game();
        state.batting_order.away = 5;
        let roster = roster();
        let config = GameConfig::default();
        let env = Env::with_all(&Cards, &roster, &config, &PcgRng, &BroadcastNarrator);
        let engine = GameEngine::new(&mut state);
        assert!(matches!(
            engine.preview(&env.as_game_env()),
            Err(ExecuteError::InvalidLineupState { cursor: 5, .. })
        ));
    }
}
