use super::Half;

/// Category of a play-by-play line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogEntryKind {
    Hit,
    Walk,
    Out,
    Run,
    Inning,
    Info,
}

/// One line of the play-by-play log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub inning: u32,
    pub half: Half,
    pub kind: LogEntryKind,
    pub text: String,
}

impl LogEntry {
    pub fn new(inning: u32, half: Half, kind: LogEntryKind, text: impl Into<String>) -> Self {
        Self {
            inning,
            half,
            kind,
            text: text.into(),
        }
    }
}
