//! Runner advancement and out recording.
//!
//! Both are pure functions of the play result and the pre-play base/out
//! state. Runners are anonymous, so advancement only moves occupancy flags.
use crate::state::BaseRunners;

use super::{PlayClass, PlayResult};

/// Base, run and out deltas of a single play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayEffect {
    pub bases: BaseRunners,
    pub runs: u8,
    /// 0 or 1.
    pub outs: u8,
}

/// Moves runners for a hit or walk.
///
/// Outs leave the bases untouched; use [`record_out`] for them.
pub fn advance_runners(result: PlayResult, bases: BaseRunners) -> PlayEffect {
    match result {
        PlayResult::Walk => force_advance(bases),
        PlayResult::HomeRun => PlayEffect {
            bases: BaseRunners::EMPTY,
            runs: bases.occupied() + 1,
            outs: 0,
        },
        PlayResult::Single | PlayResult::Double | PlayResult::Triple => {
            push_runners(bases, result.bases_gained())
        }
        PlayResult::Strikeout | PlayResult::GroundOut | PlayResult::FlyOut | PlayResult::LineOut => {
            PlayEffect {
                bases,
                runs: 0,
                outs: 0,
            }
        }
    }
}

/// Every runner and the batter move up `gained` bases. Anyone pushed past
/// third scores.
fn push_runners(bases: BaseRunners, gained: u8) -> PlayEffect {
    // bit 0 = first; the batter enters at bit 0 after shifting.
    let shifted = (u16::from(bases.bits()) << gained) | (1 << (gained - 1));
    let runs = (shifted >> 3).count_ones() as u8;
    PlayEffect {
        bases: BaseRunners::from_bits_truncate(shifted as u8),
        runs,
        outs: 0,
    }
}

/// Batter takes first; runners move only when forced.
fn force_advance(bases: BaseRunners) -> PlayEffect {
    if bases == BaseRunners::LOADED {
        return PlayEffect {
            bases: BaseRunners::LOADED,
            runs: 1,
            outs: 0,
        };
    }

    let mut next = bases | BaseRunners::FIRST;
    if bases.first() {
        next |= BaseRunners::SECOND;
        if bases.second() {
            next |= BaseRunners::THIRD;
        }
    }
    PlayEffect {
        bases: next,
        runs: 0,
        outs: 0,
    }
}

/// Records one out. A fly ball with a runner on third scores the runner, unless the
/// catch itself ends the half-inning.
pub fn record_out(
    result: PlayResult,
    bases: BaseRunners,
    outs_before: u8,
    outs_per_half: u8,
) -> PlayEffect {
    let sacrifice_fly = result == PlayResult::FlyOut
        && bases.third()
        && outs_before.saturating_add(1) < outs_per_half;

    if sacrifice_fly {
        PlayEffect {
            bases: bases - BaseRunners::THIRD,
            runs: 1,
            outs: 1,
        }
    } else {
        PlayEffect {
            bases,
            runs: 0,
            outs: 1,
        }
    }
}

/// Dispatches on the result class.
pub fn apply_play(
    result: PlayResult,
    bases: BaseRunners,
    outs_before: u8,
    outs_per_half: u8,
) -> PlayEffect {
    match result.class() {
        PlayClass::Hit | PlayClass::Walk => advance_runners(result, bases),
        PlayClass::Out => record_out(result, bases, outs_before, outs_per_half),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlayResult::*;

    fn all_bases() -> impl Iterator<Item = BaseRunners> {
        (0u8..8).map(BaseRunners::from_bits_truncate)
    }

    fn bases(first: bool, second: bool, third: bool) -> BaseRunners {
        BaseRunners::from_bools(first, second, third)
    }

    #[test]
    fn single_moves_everyone_one_base() {
        let effect = advance_runners(Single, bases(true, true, true));
        assert_eq!(effect.bases, BaseRunners::LOADED);
        assert_eq!(effect.runs, 1);

        let effect = advance_runners(Single, bases(false, true, false));
        assert_eq!(effect.bases, bases(true, false, true));
        assert_eq!(effect.runs, 0);
    }

    #[test]
    fn double_with_first_and_third() {
        let effect = advance_runners(Double, bases(true, false, true));
        assert_eq!(effect.runs, 1);
        assert_eq!(effect.bases, bases(false, true, true));
    }

    #[test]
    fn double_scores_second_and_third() {
        let effect = advance_runners(Double, BaseRunners::LOADED);
        assert_eq!(effect.runs, 2);
        assert_eq!(effect.bases, bases(false, true, true));
    }

    #[test]
    fn triple_clears_the_bases() {
        for before in all_bases() {
            let effect = advance_runners(Triple, before);
            assert_eq!(effect.runs, before.occupied());
            assert_eq!(effect.bases, bases(false, false, true));
        }
    }

    #[test]
    fn home_run_scores_batter_and_runners() {
        for before in all_bases() {
            let effect = advance_runners(HomeRun, before);
            assert_eq!(effect.runs, before.occupied() + 1);
            assert!(effect.runs >= 1);
            assert_eq!(effect.bases, BaseRunners::EMPTY);
        }
    }

    #[test]
    fn hits_conserve_runners() {
        for result in [Single, Double, Triple, HomeRun] {
            for before in all_bases() {
                let effect = advance_runners(result, before);
                assert!(effect.runs <= 4);
                assert_eq!(effect.outs, 0);
                // Everyone on base plus the batter is either still on base or home.
                assert_eq!(
                    effect.bases.occupied() + effect.runs,
                    before.occupied() + 1
                );
            }
        }
    }

    #[test]
    fn walk_with_bases_loaded_forces_in_a_run() {
        let effect = advance_runners(Walk, BaseRunners::LOADED);
        assert_eq!(effect.runs, 1);
        assert_eq!(effect.bases, BaseRunners::LOADED);
    }

    #[test]
    fn walk_pushes_runner_from_first() {
        let effect = advance_runners(Walk, bases(true, false, false));
        assert_eq!(effect.runs, 0);
        assert_eq!(effect.bases, bases(true, true, false));

        let effect = advance_runners(Walk, bases(true, true, false));
        assert_eq!(effect.bases, BaseRunners::LOADED);

        let effect = advance_runners(Walk, bases(true, false, true));
        assert_eq!(effect.runs, 0);
        assert_eq!(effect.bases, BaseRunners::LOADED);
    }

    #[test]
    fn walk_without_force_leaves_runners() {
        for before in [
            bases(false, true, false),
            bases(false, false, true),
            bases(false, true, true),
            BaseRunners::EMPTY,
        ] {
            let effect = advance_runners(Walk, before);
            assert_eq!(effect.runs, 0);
            assert_eq!(effect.bases, before | BaseRunners::FIRST);
        }
    }

    #[test]
    fn sacrifice_fly_scores_from_third() {
        for outs in [0, 1] {
            for before in all_bases().filter(|b| b.third()) {
                let effect = record_out(FlyOut, before, outs, 3);
                assert_eq!(effect.runs, 1);
                assert_eq!(effect.outs, 1);
                assert!(!effect.bases.third());
                assert_eq!(effect.bases, before - BaseRunners::THIRD);
            }
        }
    }

    #[test]
    fn third_out_fly_ball_scores_nothing() {
        for before in all_bases() {
            let effect = record_out(FlyOut, before, 2, 3);
            assert_eq!(effect.runs, 0);
            assert_eq!(effect.bases, before);
        }
    }

    #[test]
    fn other_outs_never_move_runners() {
        for result in [Strikeout, GroundOut, LineOut] {
            for outs in 0..3 {
                for before in all_bases() {
                    let effect = apply_play(result, before, outs, 3);
                    assert_eq!(effect, PlayEffect { bases: before, runs: 0, outs: 1 });
                }
            }
        }
    }
}
