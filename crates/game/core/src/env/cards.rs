//! Card oracle: per-player 6×6 result tables.
//!
//! Every card is addressed by a column die followed by a row die, so each cell
//! is reached with probability 1/36 once the card has been selected.
use std::fmt;

use crate::config::GameConfig;
use crate::play::PlayResult;
use crate::state::PlayerId;

use super::OracleError;

/// Which of the two cards in a duel is consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardKind {
    Batter,
    Pitcher,
}

/// 1-based (column, row) address of a card cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardCoordinate {
    pub column: u8,
    pub row: u8,
}

impl CardCoordinate {
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    pub const fn is_valid(&self) -> bool {
        self.column >= 1
            && self.column <= GameConfig::CARD_COLUMNS
            && self.row >= 1
            && self.row <= GameConfig::CARD_ROWS
    }

    /// Column-major slot of this coordinate, or `None` outside the grid.
    pub const fn index(&self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        Some((self.column as usize - 1) * GameConfig::CARD_ROWS as usize + (self.row as usize - 1))
    }

    /// Every coordinate of the grid in column-major order.
    pub fn all() -> impl Iterator<Item = CardCoordinate> {
        (1..=GameConfig::CARD_COLUMNS)
            .flat_map(|column| (1..=GameConfig::CARD_ROWS).map(move |row| Self::new(column, row)))
    }
}

impl fmt::Display for CardCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Errors raised while assembling a card from individual cells.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("coordinate {0} is outside the 6x6 grid")]
    OutOfRange(CardCoordinate),

    #[error("coordinate {0} is assigned more than once")]
    DuplicateCell(CardCoordinate),
}

/// Immutable result table owned by one player.
///
/// A card assembled from stored rows may have holes. Holes are reported by
/// [`Card::missing_cells`] and surface as `CoordinateNotFound` on lookup; they
/// are never filled with a default result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    cells: [Option<PlayResult>; GameConfig::CARD_CELLS],
}

impl Card {
    /// Fully-populated card from a column-major table.
    pub fn from_columns(results: [PlayResult; GameConfig::CARD_CELLS]) -> Self {
        Self {
            cells: results.map(Some),
        }
    }

    /// Card from individually addressed cells, possibly sparse.
    ///
    /// # Errors
    ///
    /// Fails when a coordinate is off the grid or addressed twice.
    pub fn from_cells<I>(cells: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = (CardCoordinate, PlayResult)>,
    {
        let mut card = Self {
            cells: [None; GameConfig::CARD_CELLS],
        };
        for (coordinate, result) in cells {
            let index = coordinate
                .index()
                .ok_or(CardError::OutOfRange(coordinate))?;
            if card.cells[index].replace(result).is_some() {
                return Err(CardError::DuplicateCell(coordinate));
            }
        }
        Ok(card)
    }

    pub fn get(&self, coordinate: CardCoordinate) -> Option<PlayResult> {
        coordinate.index().and_then(|index| self.cells[index])
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn missing_cells(&self) -> Vec<CardCoordinate> {
        CardCoordinate::all()
            .filter(|coordinate| self.get(*coordinate).is_none())
            .collect()
    }

    /// Number of cells holding `result`.
    pub fn count(&self, result: PlayResult) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(result))
            .count()
    }
}

/// Read-only access to player cards.
pub trait CardOracle: Send + Sync {
    /// Card of `kind` owned by `player`, if the player has one.
    fn card(&self, player: &PlayerId, kind: CardKind) -> Option<Card>;

    /// Result stored at `coordinate` on `player`'s card of `kind`.
    ///
    /// # Errors
    ///
    /// `CardNotFound` when the player owns no such card, `CoordinateNotFound`
    /// when the addressed cell is empty.
    fn lookup(
        &self,
        player: &PlayerId,
        coordinate: CardCoordinate,
        kind: CardKind,
    ) -> Result<PlayResult, OracleError> {
        let card = self
            .card(player, kind)
            .ok_or_else(|| OracleError::CardNotFound {
                player: player.clone(),
                kind,
            })?;
        card.get(coordinate)
            .ok_or_else(|| OracleError::CoordinateNotFound {
                player: player.clone(),
                kind,
                coordinate,
            })
    }
}
