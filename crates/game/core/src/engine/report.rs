//! Play-by-play log lines produced by an applied at-bat.

use crate::play::AtBatOutcome;
use crate::state::{Half, LogEntry, LogEntryKind, ordinal_suffix};

use super::Transition;

/// Log lines for `outcome`, played in `half` of `inning`.
///
/// `abbreviation` labels the batting team in run lines. Inning headers are
/// stamped with the half they announce; everything else with the half the
/// play happened in.
pub fn play_log(
    inning: u32,
    half: Half,
    outcome: &AtBatOutcome,
    transition: &Transition,
    abbreviation: &str,
) -> Vec<LogEntry> {
    let mut entries = vec![LogEntry::new(
        inning,
        half,
        outcome.result().class().into(),
        outcome.play.description.clone(),
    )];

    if outcome.runs_scored > 0 {
        entries.push(LogEntry::new(
            inning,
            half,
            LogEntryKind::Run,
            format!("{} run(s) score for {abbreviation}.", outcome.runs_scored),
        ));
    }

    if transition.is_complete() {
        entries.push(LogEntry::new(inning, half, LogEntryKind::Info, "Game over."));
    } else if transition.half_inning_over {
        let next = &transition.state;
        entries.push(LogEntry::new(
            next.inning,
            next.half,
            LogEntryKind::Inning,
            inning_header(next.inning, next.half),
        ));
    }

    entries
}

/// `--- Top of the 2nd ---`
pub fn inning_header(inning: u32, half: Half) -> String {
    let label = match half {
        Half::Top => "Top",
        Half::Bottom => "Bottom",
    };
    format!("--- {label} of the {inning}{} ---", ordinal_suffix(inning))
}
