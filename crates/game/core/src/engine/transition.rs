//! Half-inning and game state machine.
//!
//! [`apply_outcome`] folds one resolved at-bat into a copy of the game state
//! through three phases: `pre_validate` rejects outcomes the state cannot
//! accept, `apply` computes the next state, and `post_validate` checks the
//! invariants of the result. The input state is never modified.

use crate::config::GameConfig;
use crate::play::AtBatOutcome;
use crate::state::{BaseRunners, GamePhase, GameState, Half, Side};

use super::errors::{ExecuteError, TransitionPhase};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameEnding {
    /// The home team took the lead in the bottom of a final inning.
    WalkOff,
    /// The home team led after the top half, so its bottom half was skipped.
    HomeTeamAhead,
    /// A final bottom half ended with the score decided.
    Regulation,
}

/// Next state plus what changed at the inning level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    /// The half-inning ended on this play.
    pub half_inning_over: bool,
    pub ending: Option<GameEnding>,
}

impl Transition {
    pub const fn is_complete(&self) -> bool {
        self.ending.is_some()
    }
}

/// Applies `outcome`, resolved in `half`, to `state`.
///
/// `lineup_len` is the batting team's lineup length used to cycle its cursor.
///
/// # Errors
///
/// `GameNotActive` for completed games, `HalfMismatch` when `half` is not the
/// half being played, `InvalidLineupState` for an empty lineup.
pub fn apply_outcome(
    state: &GameState,
    outcome: &AtBatOutcome,
    half: Half,
    lineup_len: usize,
    config: &GameConfig,
) -> Result<Transition, ExecuteError> {
    pre_validate(state, half, lineup_len)?;
    let transition = apply(state, outcome, lineup_len, config);
    post_validate(&transition, config)?;
    Ok(transition)
}

fn pre_validate(state: &GameState, half: Half, lineup_len: usize) -> Result<(), ExecuteError> {
    if !state.is_active() {
        return Err(ExecuteError::GameNotActive);
    }
    if state.half != half {
        return Err(ExecuteError::HalfMismatch {
            expected: state.half,
            provided: half,
        });
    }
    if lineup_len == 0 {
        let side = state.batting_side();
        return Err(ExecuteError::InvalidLineupState {
            team: state.matchup.team(side).clone(),
            cursor: state.batting_order.cursor(side),
        });
    }
    Ok(())
}

fn apply(
    state: &GameState,
    outcome: &AtBatOutcome,
    lineup_len: usize,
    config: &GameConfig,
) -> Transition {
    let mut next = state.clone();
    let (inning, half) = (state.inning, state.half);
    let batting = half.batting_side();

    next.ledger.record(
        inning,
        half,
        u32::from(outcome.runs_scored),
        u32::from(outcome.is_hit),
    );
    next.batting_order.advance(batting, lineup_len);
    next.nonce += 1;
    next.bases = outcome.bases;
    next.outs = state.outs.saturating_add(outcome.outs_recorded);

    let final_inning = inning >= config.regulation_innings;
    let home = next.runs(Side::Home);
    let away = next.runs(Side::Away);
    let half_inning_over = next.outs >= config.outs_per_half;

    if half_inning_over {
        next.outs = 0;
        next.bases = BaseRunners::EMPTY;
    }

    let ending = match (half, half_inning_over) {
        (Half::Bottom, false) if final_inning && home > away => Some(GameEnding::WalkOff),
        (Half::Bottom, true) if final_inning && home != away => Some(GameEnding::Regulation),
        (Half::Top, true) if final_inning && home > away => Some(GameEnding::HomeTeamAhead),
        _ => None,
    };

    match ending {
        Some(_) => next.phase = GamePhase::Complete,
        None if half_inning_over => match half {
            Half::Top => next.half = Half::Bottom,
            Half::Bottom => {
                next.inning += 1;
                next.half = Half::Top;
            }
        },
        None => {}
    }

    Transition {
        state: next,
        half_inning_over,
        ending,
    }
}

fn post_validate(transition: &Transition, config: &GameConfig) -> Result<(), ExecuteError> {
    let state = &transition.state;
    let violation = |reason: &str| ExecuteError::InvariantViolation {
        phase: TransitionPhase::PostValidate,
        reason: reason.to_owned(),
    };

    if state.inning == 0 {
        return Err(violation("inning numbers start at 1"));
    }
    if state.outs >= config.outs_per_half {
        return Err(violation("outs must reset when a half-inning ends"));
    }
    if transition.is_complete() == state.is_active() {
        return Err(violation("phase disagrees with game ending"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CardKind;
    use crate::play::{PlayRecord, PlayResult, Roll};
    use crate::state::{Matchup, PlayerId, TeamId};

    fn new_game() -> GameState {
        GameState::new(
            Matchup {
                home: TeamId::from("home"),
                away: TeamId::from("away"),
                home_pitcher: PlayerId::from("hp"),
                away_pitcher: PlayerId::from("ap"),
                human_side: Some(Side::Home),
            },
            7,
        )
    }

    fn outcome(result: PlayResult, bases: BaseRunners, runs: u8, outs: u8) -> AtBatOutcome {
        AtBatOutcome {
            roll: Roll::new(1, 1, 1),
            card: CardKind::Batter,
            play: PlayRecord {
                result,
                description: String::new(),
                rbi: runs,
            },
            bases,
            runs_scored: runs,
            outs_recorded: outs,
            is_hit: result.is_hit(),
        }
    }

    fn strikeout() -> AtBatOutcome {
        outcome(PlayResult::Strikeout, BaseRunners::EMPTY, 0, 1)
    }

    fn step(state: &GameState, outcome: &AtBatOutcome) -> Transition {
        apply_outcome(state, outcome, state.half, 9, &GameConfig::default()).unwrap()
    }

    /// Positions the game at the start of `half` of `inning` with the given score.
    fn at(inning: u32, half: Half, home: u32, away: u32) -> GameState {
        let mut state = new_game();
        state.inning = inning;
        state.half = half;
        state.ledger.record(1, Half::Bottom, home, 0);
        state.ledger.record(1, Half::Top, away, 0);
        state
    }

    #[test]
    fn outs_accumulate_within_a_half() {
        let state = new_game();
        let t = step(&state, &strikeout());
        assert_eq!(t.state.outs, 1);
        assert_eq!(t.state.half, Half::Top);
        assert!(!t.half_inning_over);
        assert_eq!(t.state.batting_order.cursor(Side::Away), 1);
        assert_eq!(t.state.batting_order.cursor(Side::Home), 0);
        assert_eq!(t.state.nonce, 1);
        // Input untouched.
        assert_eq!(state.outs, 0);
    }

    #[test]
    fn third_out_rolls_over_and_clears_bases() {
        let mut state = new_game();
        state.outs = 2;
        state.bases = BaseRunners::LOADED;
        let t = step(&state, &outcome(PlayResult::GroundOut, BaseRunners::LOADED, 0, 1));

        assert!(t.half_inning_over);
        assert_eq!(t.state.outs, 0);
        assert_eq!(t.state.bases, BaseRunners::EMPTY);
        assert_eq!((t.state.inning, t.state.half), (1, Half::Bottom));

        let mut state = t.state;
        state.outs = 2;
        let t = step(&state, &strikeout());
        assert_eq!((t.state.inning, t.state.half), (2, Half::Top));
        assert!(t.state.is_active());
    }

    #[test]
    fn runs_and_hits_land_in_the_ledger() {
        let state = new_game();
        let t = step(
            &state,
            &outcome(PlayResult::HomeRun, BaseRunners::EMPTY, 1, 0),
        );
        assert_eq!(t.state.runs(Side::Away), 1);
        assert_eq!(t.state.ledger.hits(Side::Away), 1);
        assert_eq!(t.state.runs(Side::Home), 0);
    }

    #[test]
    fn walk_off_ends_the_game_immediately() {
        // Home trails by one entering the bottom of the 9th.
        let mut state = at(9, Half::Bottom, 3, 4);
        state.bases = BaseRunners::from_bools(true, false, true);
        let t = step(
            &state,
            &outcome(PlayResult::Double, BaseRunners::from_bools(false, true, true), 1, 0),
        );
        assert!(t.state.is_active(), "tied game continues");

        let t = step(
            &t.state,
            &outcome(PlayResult::Single, BaseRunners::from_bools(true, false, true), 1, 0),
        );
        assert_eq!(t.ending, Some(GameEnding::WalkOff));
        assert_eq!(t.state.phase, GamePhase::Complete);
        assert_eq!((t.state.inning, t.state.half), (9, Half::Bottom));
        assert_eq!(t.state.winner(), Some(Side::Home));
    }

    #[test]
    fn tie_after_nine_goes_to_extra_innings() {
        let mut state = at(9, Half::Bottom, 2, 2);
        state.outs = 2;
        let t = step(&state, &strikeout());
        assert!(t.ending.is_none());
        assert!(t.state.is_active());
        assert_eq!((t.state.inning, t.state.half), (10, Half::Top));
    }

    #[test]
    fn decided_bottom_half_ends_the_game() {
        let mut state = at(12, Half::Bottom, 2, 5);
        state.outs = 2;
        let t = step(&state, &strikeout());
        assert_eq!(t.ending, Some(GameEnding::Regulation));
        assert_eq!(t.state.winner(), Some(Side::Away));
        assert_eq!((t.state.inning, t.state.half), (12, Half::Bottom));
    }

    #[test]
    fn home_lead_after_top_of_ninth_skips_bottom() {
        let mut state = at(9, Half::Top, 4, 1);
        state.outs = 2;
        let t = step(&state, &strikeout());
        assert_eq!(t.ending, Some(GameEnding::HomeTeamAhead));
        assert!(!t.state.is_active());
    }

    #[test]
    fn early_innings_never_end_the_game() {
        let mut state = at(8, Half::Bottom, 9, 0);
        state.outs = 2;
        let t = step(&state, &strikeout());
        assert!(t.state.is_active());
        assert_eq!((t.state.inning, t.state.half), (9, Half::Top));

        // Home lead in the bottom of the 8th is not a walk-off.
        let state = at(8, Half::Bottom, 1, 1);
        let t = step(
            &state,
            &outcome(PlayResult::HomeRun, BaseRunners::EMPTY, 1, 0),
        );
        assert!(t.state.is_active());
    }

    #[test]
    fn completed_game_rejects_outcomes() {
        let mut state = new_game();
        state.phase = GamePhase::Complete;
        let err = apply_outcome(&state, &strikeout(), Half::Top, 9, &GameConfig::default())
            .unwrap_err();
        assert_eq!(err, ExecuteError::GameNotActive);
    }

    #[test]
    fn wrong_half_is_rejected() {
        let state = new_game();
        let err = apply_outcome(&state, &strikeout(), Half::Bottom, 9, &GameConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            ExecuteError::HalfMismatch {
                expected: Half::Top,
                provided: Half::Bottom,
            }
        );
    }

    #[test]
    fn empty_lineup_is_rejected() {
        let state = new_game();
        let err = apply_outcome(&state, &strikeout(), Half::Top, 0, &GameConfig::default())
            .unwrap_err();
        assert!(matches!(err, ExecuteError::InvalidLineupState { .. }));
    }

    #[test]
    fn shortened_games_follow_configured_regulation() {
        let config = GameConfig::default().with_regulation_innings(3);
        let mut state = at(3, Half::Bottom, 0, 1);
        state.outs = 2;
        let t = apply_outcome(&state, &strikeout(), Half::Bottom, 9, &config).unwrap();
        assert_eq!(t.ending, Some(GameEnding::Regulation));
    }
}
