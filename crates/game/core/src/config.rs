/// Game configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Innings played before a decided score ends the game.
    /// Ties after this many innings continue into extra innings without a cap.
    pub regulation_innings: u32,

    /// Outs that close a half-inning.
    pub outs_per_half: u8,

    /// Faces of the selector die. The lower half selects the batter's card,
    /// the upper half the pitcher's.
    pub selector_sides: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Columns of a card grid (first d6).
    pub const CARD_COLUMNS: u8 = 6;
    /// Rows of a card grid (second d6).
    pub const CARD_ROWS: u8 = 6;
    /// Number of addressable cells on a card.
    pub const CARD_CELLS: usize = (Self::CARD_COLUMNS as usize) * (Self::CARD_ROWS as usize);
    /// Batters in a full lineup.
    pub const MAX_LINEUP: usize = 9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REGULATION_INNINGS: u32 = 9;
    pub const DEFAULT_OUTS_PER_HALF: u8 = 3;
    pub const DEFAULT_SELECTOR_SIDES: u32 = 20;

    pub const fn new() -> Self {
        Self {
            regulation_innings: Self::DEFAULT_REGULATION_INNINGS,
            outs_per_half: Self::DEFAULT_OUTS_PER_HALF,
            selector_sides: Self::DEFAULT_SELECTOR_SIDES,
        }
    }

    pub const fn with_regulation_innings(mut self, innings: u32) -> Self {
        self.regulation_innings = innings;
        self
    }

    /// Highest selector value that still selects the batter's card.
    pub const fn batter_card_threshold(&self) -> u32 {
        self.selector_sides / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
