use crate::config::GameConfig;
use crate::env::{CardCoordinate, CardKind, RngOracle, RollContext, compute_seed};

/// Dice thrown for one at-bat: a selector die and two card dice.
///
/// Rolls are single-use; they are kept only inside the outcome they produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    pub selector: u32,
    pub column: u8,
    pub row: u8,
}

impl Roll {
    pub const fn new(selector: u32, column: u8, row: u8) -> Self {
        Self {
            selector,
            column,
            row,
        }
    }

    /// Throws the three dice of at-bat `nonce`.
    pub fn draw<G>(rng: &G, game_seed: u64, nonce: u64, config: &GameConfig) -> Self
    where
        G: RngOracle + ?Sized,
    {
        let die = |context, sides: u32| rng.roll_die(compute_seed(game_seed, nonce, context), sides);
        Self {
            selector: die(RollContext::Selector, config.selector_sides),
            column: die(RollContext::Column, u32::from(GameConfig::CARD_COLUMNS)) as u8,
            row: die(RollContext::Row, u32::from(GameConfig::CARD_ROWS)) as u8,
        }
    }

    /// Low selector values hand the at-bat to the batter's card.
    pub const fn card_kind(&self, config: &GameConfig) -> CardKind {
        if self.selector <= config.batter_card_threshold() {
            CardKind::Batter
        } else {
            CardKind::Pitcher
        }
    }

    pub const fn coordinate(&self) -> CardCoordinate {
        CardCoordinate::new(self.column, self.row)
    }
}
