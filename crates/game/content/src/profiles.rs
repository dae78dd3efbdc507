//! Built-in card profiles.
//!
//! Each profile is a 6×6 table written column by column: the first group of
//! six is column 1 (rows 1 to 6), the next group column 2, and so on.

use game_core::{Card, CardKind, PlayResult};

const B1: PlayResult = PlayResult::Single;
const B2: PlayResult = PlayResult::Double;
const B3: PlayResult = PlayResult::Triple;
const HR: PlayResult = PlayResult::HomeRun;
const BB: PlayResult = PlayResult::Walk;
const K: PlayResult = PlayResult::Strikeout;
const GO: PlayResult = PlayResult::GroundOut;
const FO: PlayResult = PlayResult::FlyOut;
const LO: PlayResult = PlayResult::LineOut;

type Table = [PlayResult; 36];

#[rustfmt::skip]
const POWER: Table = [
    HR, HR, K, K, GO, B2,
    K, K, GO, B2, FO, B1,
    HR, K, GO, B2, FO, B1,
    K, K, GO, B2, FO, B1,
    HR, K, FO, B1, B1, B1,
    BB, K, GO, B1, B1, FO,
];

#[rustfmt::skip]
const CONTACT: Table = [
    B1, B1, B1, GO, B2, B1,
    B1, B1, GO, B2, BB, B1,
    B1, B1, GO, B2, FO, K,
    B1, B1, GO, B2, FO, K,
    B1, B1, GO, FO, BB, K,
    B1, B3, GO, FO, GO, B1,
];

#[rustfmt::skip]
const BALANCED: Table = [
    HR, K, GO, B1, GO, FO,
    B2, K, GO, B1, GO, FO,
    B2, K, GO, B1, FO, BB,
    B1, K, GO, B1, FO, BB,
    B1, K, LO, B1, FO, B1,
    B3, B1, B1, B1, GO, FO,
];

#[rustfmt::skip]
const SPEEDSTER: Table = [
    B3, B1, GO, B1, GO, FO,
    B1, B1, GO, B1, FO, K,
    B1, B1, BB, B1, FO, K,
    B3, B1, GO, B1, FO, K,
    B1, BB, GO, B1, B2, K,
    HR, B1, B1, B1, B1, B1,
];

#[rustfmt::skip]
const ACE: Table = [
    K, K, GO, GO, FO, B1,
    K, K, GO, GO, FO, B1,
    K, K, GO, LO, FO, B1,
    K, GO, LO, FO, B2, B1,
    BB, GO, B1, FO, B2, B1,
    BB, K, B1, B1, FO, GO,
];

#[rustfmt::skip]
const GROUNDBALL: Table = [
    GO, GO, GO, K, FO, B1,
    GO, GO, GO, K, FO, B1,
    GO, GO, K, LO, FO, B1,
    GO, GO, K, FO, B2, B1,
    BB, GO, B1, B2, B1, B1,
    BB, GO, B1, B1, FO, GO,
];

#[rustfmt::skip]
const STRIKEOUT: Table = [
    K, K, K, GO, FO, B1,
    K, K, K, GO, FO, B1,
    K, K, K, LO, FO, B1,
    K, K, GO, FO, B2, B1,
    BB, K, FO, B2, B1, B1,
    BB, K, FO, B1, B1, HR,
];

#[rustfmt::skip]
const AVERAGE: Table = [
    K, K, GO, GO, FO, B1,
    K, K, GO, GO, FO, B1,
    K, LO, GO, FO, B2, B1,
    K, B1, FO, B2, B1, B1,
    BB, B1, B2, B1, B1, HR,
    BB, B1, B1, B1, FO, GO,
];

/// Hitting archetypes available to roster authors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BatterProfile {
    Power,
    Contact,
    Balanced,
    Speedster,
}

impl BatterProfile {
    pub fn table(self) -> &'static Table {
        match self {
            Self::Power => &POWER,
            Self::Contact => &CONTACT,
            Self::Balanced => &BALANCED,
            Self::Speedster => &SPEEDSTER,
        }
    }

    pub fn card(self) -> Card {
        Card::from_columns(*self.table())
    }
}

/// Pitching archetypes available to roster authors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PitcherProfile {
    Ace,
    Groundball,
    Strikeout,
    Average,
}

impl PitcherProfile {
    pub fn table(self) -> &'static Table {
        match self {
            Self::Ace => &ACE,
            Self::Groundball => &GROUNDBALL,
            Self::Strikeout => &STRIKEOUT,
            Self::Average => &AVERAGE,
        }
    }

    pub fn card(self) -> Card {
        Card::from_columns(*self.table())
    }
}

/// Kind of card a profile produces.
pub trait CardProfile {
    const KIND: CardKind;

    fn build(self) -> Card;
}

impl CardProfile for BatterProfile {
    const KIND: CardKind = CardKind::Batter;

    fn build(self) -> Card {
        self.card()
    }
}

impl CardProfile for PitcherProfile {
    const KIND: CardKind = CardKind::Pitcher;

    fn build(self) -> Card {
        self.card()
    }
}
