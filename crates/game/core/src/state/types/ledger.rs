use super::{Half, Side};

/// Runs and hits accumulated by the batting team in one half-inning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfInningScore {
    pub inning: u32,
    pub half: Half,
    pub runs: u32,
    pub hits: u32,
}

/// Per-(inning, half) score ledger.
///
/// Entries only ever grow: runs and hits are added, never removed. Entries are
/// kept in (inning, half) order and are created lazily on the first run or hit
/// of a half-inning.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InningScoreLedger {
    entries: Vec<HalfInningScore>,
}

impl InningScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `runs` and `hits` to the given half-inning.
    pub fn record(&mut self, inning: u32, half: Half, runs: u32, hits: u32) {
        if runs == 0 && hits == 0 {
            return;
        }

        let key = (inning, half);
        match self
            .entries
            .binary_search_by(|entry| (entry.inning, entry.half).cmp(&key))
        {
            Ok(index) => {
                let entry = &mut self.entries[index];
                entry.runs += runs;
                entry.hits += hits;
            }
            Err(index) => self.entries.insert(
                index,
                HalfInningScore {
                    inning,
                    half,
                    runs,
                    hits,
                },
            ),
        }
    }

    pub fn get(&self, inning: u32, half: Half) -> Option<&HalfInningScore> {
        self.entries
            .iter()
            .find(|entry| entry.inning == inning && entry.half == half)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HalfInningScore> {
        self.entries.iter()
    }

    fn for_side(&self, side: Side) -> impl Iterator<Item = &HalfInningScore> {
        self.entries
            .iter()
            .filter(move |entry| entry.half.batting_side() == side)
    }

    /// Total runs scored by `side`.
    pub fn runs(&self, side: Side) -> u32 {
        self.for_side(side).map(|entry| entry.runs).sum()
    }

    /// Total hits collected by `side`.
    pub fn hits(&self, side: Side) -> u32 {
        self.for_side(side).map(|entry| entry.hits).sum()
    }

    /// Runs per inning for `side`, from the first inning through `through_inning`.
    ///
    /// Innings without an entry read as zero.
    pub fn line(&self, side: Side, through_inning: u32) -> Vec<u32> {
        let half = match side {
            Side::Away => Half::Top,
            Side::Home => Half::Bottom,
        };
        (1..=through_inning)
            .map(|inning| self.get(inning, half).map_or(0, |entry| entry.runs))
            .collect()
    }
}
