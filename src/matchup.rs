//! A pair of cards held for a session.

use serde::Serialize;

use crate::card::Card;
use crate::rules::{
    analyze_advanced, compare, score_all, AdvancedReport, Attribute, Scoreboard, Verdict,
};

/// Kind of comparison the player can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Compare one attribute.
    Single(Attribute),
    /// Compare every attribute and tally the wins.
    All,
    /// Run the advanced heuristics.
    Advanced,
}

/// Result of a [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// One attribute compared.
    Single {
        /// Attribute compared.
        attribute: Attribute,
        /// Result.
        verdict: Verdict,
    },
    /// All attributes compared.
    All(Scoreboard),
    /// Advanced analysis.
    Advanced(AdvancedReport),
}

impl Outcome {
    /// Overall verdict of the outcome.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match self {
            Self::Single { verdict, .. } => *verdict,
            Self::All(board) => board.overall(),
            Self::Advanced(report) => report.verdict,
        }
    }
}

/// Two cards facing each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    first: Card,
    second: Card,
}

impl Matchup {
    /// Create a matchup.
    #[must_use]
    pub fn new(first: Card, second: Card) -> Self {
        Self { first, second }
    }

    /// The first card.
    #[must_use]
    pub fn first(&self) -> &Card {
        &self.first
    }

    /// The second card.
    #[must_use]
    pub fn second(&self) -> &Card {
        &self.second
    }

    /// The winning card for a verdict, or `None` on a tie.
    #[must_use]
    pub fn winner(&self, verdict: Verdict) -> Option<&Card> {
        match verdict {
            Verdict::First => Some(&self.first),
            Verdict::Second => Some(&self.second),
            Verdict::Tie => None,
        }
    }

    /// Compare one attribute.
    #[must_use]
    pub fn compare(&self, attribute: Attribute) -> Verdict {
        compare(&self.first, &self.second, attribute)
    }

    /// Compare every attribute.
    #[must_use]
    pub fn score_all(&self) -> Scoreboard {
        score_all(&self.first, &self.second)
    }

    /// Run the advanced heuristics.
    #[must_use]
    pub fn analyze_advanced(&self) -> AdvancedReport {
        analyze_advanced(&self.first, &self.second)
    }

    /// Run any kind of comparison.
    #[must_use]
    pub fn run(&self, comparison: Comparison) -> Outcome {
        match comparison {
            Comparison::Single(attribute) => Outcome::Single {
                attribute,
                verdict: self.compare(attribute),
            },
            Comparison::All => Outcome::All(self.score_all()),
            Comparison::Advanced => Outcome::Advanced(self.analyze_advanced()),
        }
    }
}
