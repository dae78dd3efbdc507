use crate::state::LogEntryKind;

/// Outcome symbol read off a card.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PlayResult {
    Single,
    Double,
    Triple,
    HomeRun,
    Walk,
    Strikeout,
    GroundOut,
    FlyOut,
    LineOut,
}

/// Disjoint partition of [`PlayResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlayClass {
    Hit,
    Walk,
    Out,
}

impl PlayResult {
    pub const fn class(self) -> PlayClass {
        use PlayResult::*;
        match self {
            Single | Double | Triple | HomeRun => PlayClass::Hit,
            Walk => PlayClass::Walk,
            Strikeout | GroundOut | FlyOut | LineOut => PlayClass::Out,
        }
    }

    pub const fn is_hit(self) -> bool {
        matches!(self.class(), PlayClass::Hit)
    }

    pub const fn is_out(self) -> bool {
        matches!(self.class(), PlayClass::Out)
    }

    /// Bases the batter takes on a hit or walk; zero for outs.
    pub const fn bases_gained(self) -> u8 {
        use PlayResult::*;
        match self {
            Single | Walk => 1,
            Double => 2,
            Triple => 3,
            HomeRun => 4,
            Strikeout | GroundOut | FlyOut | LineOut => 0,
        }
    }

    /// Scorebook abbreviation (`1B`, `HR`, `K`, ...).
    pub const fn abbreviation(self) -> &'static str {
        use PlayResult::*;
        match self {
            Single => "1B",
            Double => "2B",
            Triple => "3B",
            HomeRun => "HR",
            Walk => "BB",
            Strikeout => "K",
            GroundOut => "GO",
            FlyOut => "FO",
            LineOut => "LO",
        }
    }

    /// Inverse of [`PlayResult::abbreviation`].
    pub fn from_abbreviation(code: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|result| result.abbreviation() == code)
    }
}

impl From<PlayClass> for LogEntryKind {
    fn from(class: PlayClass) -> Self {
        match class {
            PlayClass::Hit => LogEntryKind::Hit,
            PlayClass::Walk => LogEntryKind::Walk,
            PlayClass::Out => LogEntryKind::Out,
        }
    }
}
