//! Per-letter feedback state

use serde::{Deserialize, Serialize};

/// Feedback for a single letter slot
///
/// Variants are declared in ascending rank, so the derived `Ord` is the
/// "best known" ordering: `Empty < Absent < Present < Correct`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    /// Blank slot, or a letter nothing is known about yet
    #[default]
    Empty,
    /// Letter is not in the solution (or all its occurrences are accounted for)
    Absent,
    /// Letter is in the solution at another position
    Present,
    /// Letter is in the solution at this position
    Correct,
}

impl LetterState {
    /// All states in rank order
    pub const ALL: [Self; 4] = [Self::Empty, Self::Absent, Self::Present, Self::Correct];

    /// Keep the higher-ranked of two states
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Whether the state reveals the letter is part of the solution
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Stored name of the state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Parse a stored name; unknown names yield `None`
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == name)
    }
}
