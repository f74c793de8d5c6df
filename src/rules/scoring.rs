//! Aggregate scoring across every attribute.

use serde::Serialize;

use crate::card::Card;
use crate::rules::{compare, Attribute, Verdict};

/// One attribute's result inside a [`Scoreboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    /// Attribute compared.
    pub attribute: Attribute,
    /// Result of the comparison.
    pub verdict: Verdict,
}

/// Tally of wins and ties over all six attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    /// Attributes won by the first card.
    pub wins_first: u8,
    /// Attributes won by the second card.
    pub wins_second: u8,
    /// Attributes tied.
    pub ties: u8,
    /// Per-attribute results, in [`Attribute::ALL`] order.
    pub rounds: [Round; 6],
}

impl Scoreboard {
    /// Card with strictly more wins, or a tie.
    #[must_use]
    pub fn overall(&self) -> Verdict {
        match self.wins_first.cmp(&self.wins_second) {
            std::cmp::Ordering::Greater => Verdict::First,
            std::cmp::Ordering::Less => Verdict::Second,
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }

    /// Number of attributes compared.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.wins_first + self.wins_second + self.ties
    }
}

/// Compare the cards on every attribute and tally the results.
#[must_use]
pub fn score_all(first: &Card, second: &Card) -> Scoreboard {
    let rounds = Attribute::ALL.map(|attribute| Round {
        attribute,
        verdict: compare(first, second, attribute),
    });

    let mut board = Scoreboard {
        wins_first: 0,
        wins_second: 0,
        ties: 0,
        rounds,
    };
    for round in &rounds {
        match round.verdict {
            Verdict::First => board.wins_first += 1,
            Verdict::Second => board.wins_second += 1,
            Verdict::Tie => board.ties += 1,
        }
    }

    tracing::debug!(
        wins_first = board.wins_first,
        wins_second = board.wins_second,
        ties = board.ties,
        "scored all attributes"
    );
    board
}
