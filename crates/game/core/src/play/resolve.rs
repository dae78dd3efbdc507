//! At-bat resolution.
//!
//! [`resolve_roll`] is the pure duel: selector die, card lookup, runner
//! advancement. [`resolve_at_bat`] throws the dice, resolves them and asks
//! the narrator for a description.
use crate::config::GameConfig;
use crate::env::{CardKind, CardOracle, GameEnv, OracleError, RollContext, compute_seed};
use crate::state::{BaseRunners, PlayerId};

use super::{PlayEffect, PlayResult, Roll, apply_play};

/// Input to the resolver. Immutable per call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtBatContext {
    pub batter: PlayerId,
    pub pitcher: PlayerId,
    pub bases: BaseRunners,
    /// Outs before the play, always below the per-half limit.
    pub outs: u8,
}

/// Result of a roll before narration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedPlay {
    pub roll: Roll,
    pub card: CardKind,
    pub result: PlayResult,
    pub effect: PlayEffect,
}

/// What happened on the play, as shown in the box score.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayRecord {
    pub result: PlayResult,
    pub description: String,
    pub rbi: u8,
}

/// Resolver output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtBatOutcome {
    pub roll: Roll,
    pub card: CardKind,
    pub play: PlayRecord,
    pub bases: BaseRunners,
    pub runs_scored: u8,
    pub outs_recorded: u8,
    pub is_hit: bool,
}

impl AtBatOutcome {
    pub const fn result(&self) -> PlayResult {
        self.play.result
    }
}

/// Resolves `roll` against the cards of the batter and pitcher.
///
/// # Errors
///
/// Propagates `CardNotFound` and `CoordinateNotFound` from the card oracle.
pub fn resolve_roll<K>(
    cards: &K,
    context: &AtBatContext,
    roll: Roll,
    config: &GameConfig,
) -> Result<ResolvedPlay, OracleError>
where
    K: CardOracle + ?Sized,
{
    let card = roll.card_kind(config);
    let owner = match card {
        CardKind::Batter => &context.batter,
        CardKind::Pitcher => &context.pitcher,
    };
    let result = cards.lookup(owner, roll.coordinate(), card)?;
    let effect = apply_play(result, context.bases, context.outs, config.outs_per_half);

    Ok(ResolvedPlay {
        roll,
        card,
        result,
        effect,
    })
}

/// Draws the roll of at-bat `nonce`, resolves it and narrates it.
///
/// # Errors
///
/// Returns an error when an oracle is missing or card data is incomplete.
pub fn resolve_at_bat(
    env: &GameEnv<'_>,
    context: &AtBatContext,
    game_seed: u64,
    nonce: u64,
) -> Result<AtBatOutcome, OracleError> {
    let config = env.game_config()?;
    let rng = env.rng()?;
    let roll = Roll::draw(rng, game_seed, nonce, &config);
    let resolved = resolve_roll(env.cards()?, context, roll, &config)?;

    let narrator = env.narrator()?;
    let roster = env.roster()?;
    let variant = rng.pick(
        compute_seed(game_seed, nonce, RollContext::Narrative),
        narrator.variants(resolved.result),
    );
    let description = narrator.describe(
        resolved.result,
        &roster.player_name(&context.batter),
        &roster.player_name(&context.pitcher),
        variant,
    );

    Ok(AtBatOutcome::from_resolved(resolved, description))
}

impl AtBatOutcome {
    pub fn from_resolved(resolved: ResolvedPlay, description: String) -> Self {
        let ResolvedPlay {
            roll,
            card,
            result,
            effect,
        } = resolved;
        Self {
            roll,
            card,
            play: PlayRecord {
                result,
                description,
                rbi: effect.runs,
            },
            bases: effect.bases,
            runs_scored: effect.runs,
            outs_recorded: effect.outs,
            is_hit: result.is_hit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Card, CardCoordinate, Env, Lineup, RngOracle, RosterOracle};
    use crate::play::BroadcastNarrator;
    use crate::state::TeamId;
    use PlayResult::*;

    struct Duel {
        batter: Card,
        pitcher: Card,
    }

    impl CardOracle for Duel {
        fn card(&self, player: &PlayerId, kind: CardKind) -> Option<Card> {
            match (player.as_str(), kind) {
                ("B", CardKind::Batter) => Some(self.batter.clone()),
                ("P", CardKind::Pitcher) => Some(self.pitcher.clone()),
                _ => None,
            }
        }
    }

    struct Names;

    impl RosterOracle for Names {
        fn lineup(&self, _team: &TeamId) -> Lineup {
            Lineup::new()
        }

        fn starting_pitcher(&self, _team: &TeamId) -> Option<PlayerId> {
            None
        }
    }

    /// Always lands on the same faces: selector 15, column 3, row 3.
    struct Fixed;

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            // 14 % 20 + 1 = 15, 14 % 6 + 1 = 3
            14
        }
    }

    fn context(bases: BaseRunners, outs: u8) -> AtBatContext {
        AtBatContext {
            batter: PlayerId::from("B"),
            pitcher: PlayerId::from("P"),
            bases,
            outs,
        }
    }

    fn duel() -> Duel {
        Duel {
            batter: Card::from_columns([Double; 36]),
            pitcher: Card::from_columns([Strikeout; 36]),
        }
    }

    #[test]
    fn pitcher_card_strikeout() {
        let config = GameConfig::default();
        let resolved = resolve_roll(
            &duel(),
            &context(BaseRunners::EMPTY, 0),
            Roll::new(17, 4, 2),
            &config,
        )
        .unwrap();
        let outcome = AtBatOutcome::from_resolved(resolved, String::new());

        assert_eq!(outcome.card, CardKind::Pitcher);
        assert_eq!(outcome.result(), Strikeout);
        assert_eq!(outcome.outs_recorded, 1);
        assert_eq!(outcome.runs_scored, 0);
        assert_eq!(outcome.bases, BaseRunners::EMPTY);
        assert!(!outcome.is_hit);
    }

    #[test]
    fn batter_card_double_with_first_and_third() {
        let config = GameConfig::default();
        let bases = BaseRunners::from_bools(true, false, true);
        let resolved =
            resolve_roll(&duel(), &context(bases, 1), Roll::new(3, 6, 6), &config).unwrap();
        let outcome = AtBatOutcome::from_resolved(resolved, String::new());

        assert_eq!(outcome.card, CardKind::Batter);
        assert_eq!(outcome.result(), Double);
        assert_eq!(outcome.runs_scored, 1);
        assert_eq!(outcome.play.rbi, 1);
        assert_eq!(outcome.bases, BaseRunners::from_bools(false, true, true));
        assert_eq!(outcome.outs_recorded, 0);
        assert!(outcome.is_hit);
    }

    #[test]
    fn hole_in_card_is_an_error() {
        let config = GameConfig::default();
        let cards = Duel {
            batter: Card::from_cells([(CardCoordinate::new(1, 1), Single)]).unwrap(),
            pitcher: Card::from_columns([Strikeout; 36]),
        };
        let err = resolve_roll(
            &cards,
            &context(BaseRunners::EMPTY, 0),
            Roll::new(1, 2, 2),
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, OracleError::CoordinateNotFound { .. }));
    }

    #[test]
    fn missing_pitcher_card_is_an_error() {
        let config = GameConfig::default();
        let mut ctx = context(BaseRunners::EMPTY, 0);
        ctx.pitcher = PlayerId::from("nobody");
        let err = resolve_roll(&duel(), &ctx, Roll::new(20, 1, 1), &config).unwrap_err();
        assert_eq!(
            err,
            OracleError::CardNotFound {
                player: PlayerId::from("nobody"),
                kind: CardKind::Pitcher,
            }
        );
    }

    #[test]
    fn resolve_at_bat_narrates_with_names() {
        let cards = duel();
        let config = GameConfig::default();
        let env = Env::with_all(&cards, &Names, &config, &Fixed, &BroadcastNarrator);
        let outcome = resolve_at_bat(
            &env.as_game_env(),
            &context(BaseRunners::EMPTY, 0),
            1,
            0,
        )
        .unwrap();

        assert_eq!(outcome.roll, Roll::new(15, 3, 3));
        assert_eq!(outcome.result(), Strikeout);
        // 14 % 3 = 2
        assert_eq!(outcome.play.description, "P rings up B looking.");
    }

    #[test]
    fn missing_oracle_is_reported() {
        let cards = duel();
        let config = GameConfig::default();
        let env: Env<'_, Duel, Names, GameConfig, Fixed, BroadcastNarrator> =
            Env::new(Some(&cards), Some(&Names), Some(&config), None, None);
        let err = resolve_at_bat(&env.as_game_env(), &context(BaseRunners::EMPTY, 0), 1, 0)
            .unwrap_err();
        assert_eq!(err, OracleError::RngNotAvailable);
    }
}
