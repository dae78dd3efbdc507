//! Play-by-play flavor text.
//!
//! Narration is presentation only: it runs after a play has been resolved and
//! its output never feeds back into game state.
use super::PlayResult;

/// Turns a resolved play into a sentence.
pub trait Narrator: Send + Sync {
    /// Number of interchangeable templates for `result`.
    fn variants(&self, result: PlayResult) -> usize;

    /// Renders template `variant` (taken modulo [`Narrator::variants`]).
    fn describe(&self, result: PlayResult, batter: &str, pitcher: &str, variant: usize) -> String;
}

/// Radio-style English templates.
///
/// `{b}` is replaced with the batter's name and `{p}` with the pitcher's.
#[derive(Clone, Copy, Debug, Default)]
pub struct BroadcastNarrator;

impl BroadcastNarrator {
    fn templates(result: PlayResult) -> &'static [&'static str] {
        use PlayResult::*;
        match result {
            Single => &[
                "{b} singles through the left side.",
                "{b} lines one into right field.",
                "{b} drops a single into shallow center.",
            ],
            Double => &[
                "{b} doubles off the wall in left-center.",
                "{b} rips a gapper to right-center.",
            ],
            Triple => &[
                "{b} legs out a triple to the right field corner!",
                "{b} smokes one into the gap, all the way to the wall!",
            ],
            HomeRun => &[
                "{b} goes deep! That ball is GONE!",
                "{b} crushes one to deep left, home run!",
                "{b} gets all of that one. It's out of here!",
            ],
            Walk => &["{p} walks {b} on four pitches.", "{b} works a walk."],
            Strikeout => &[
                "{p} blows a fastball past {b}. Struck out!",
                "{b} swings and misses. Strikeout.",
                "{p} rings up {b} looking.",
            ],
            GroundOut => &[
                "{b} grounds out to second.",
                "{b} chops one to third, thrown out at first.",
                "{b} rolls over, grounds to short.",
            ],
            FlyOut => &[
                "{b} flies out to center.",
                "{b} lifts a lazy fly ball to right.",
                "{b} pops up to the second baseman.",
            ],
            LineOut => &[
                "{b} stings one, but right at the shortstop. Line out.",
                "{b} smokes a liner, caught!",
            ],
        }
    }
}

impl Narrator for BroadcastNarrator {
    fn variants(&self, result: PlayResult) -> usize {
        Self::templates(result).len()
    }

    fn describe(&self, result: PlayResult, batter: &str, pitcher: &str, variant: usize) -> String {
        let templates = Self::templates(result);
        templates[variant % templates.len()]
            .replace("{b}", batter)
            .replace("{p}", pitcher)
    }
}
