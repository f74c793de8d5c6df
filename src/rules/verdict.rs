//! Comparison outcome.

use serde::Serialize;

/// Which card won a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The first card wins.
    First,
    /// The second card wins.
    Second,
    /// Neither card wins.
    Tie,
}

impl Verdict {
    /// Numeric code: 1 or 2 for the winning card, 0 for a tie.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Tie => 0,
        }
    }

    /// The verdict with the two cards swapped.
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
            Self::Tie => Self::Tie,
        }
    }
}
