//! Read-only query layer over a validated match record, plus per-player
//! movement routine extraction. Consumers query this instead of walking the
//! nested record themselves.

pub mod repository;
pub mod routine;

/// Part of the record an accessor failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Rounds,
    Frames,
    Players(common::Side),
    Grenades,
    Roster,
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rounds => write!(f, "round"),
            Self::Frames => write!(f, "frame"),
            Self::Players(side) => write!(f, "{} player", side),
            Self::Grenades => write!(f, "grenade"),
            Self::Roster => write!(f, "roster slot"),
        }
    }
}

/// Every failure is raised where it is detected and handed to the caller
/// unchanged. There is no partial-result mode and no local recovery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{section} index {index} out of range (length {len})")]
    OutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },
    #[error("no {0} data present")]
    DataAbsent(Section),
    #[error("unrecognized side value {0:?}")]
    InvalidSideValue(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("team routines require exactly 5 players, got {actual}")]
    RosterSizeMismatch { actual: usize },
}
