// Allow unwrap, float equality, and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Trunfo: Super Trunfo card comparisons over Brazilian city statistics.
//!
//! Two city cards are compared attribute by attribute:
//! - Raw statistics (population, area, GDP, tourist attractions)
//! - Derived statistics (population density, GDP per capita)
//! - Aggregate scoring and an advanced multi-attribute analysis
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Matchup (two cards, session)    │
//! ├─────────────────────────────────────┤
//! │  Rules (compare, score, advanced)   │
//! ├─────────────────────────────────────┤
//! │   Cards (raw, derived, validation)  │
//! └─────────────────────────────────────┘
//! ```

pub mod card;
pub mod error;
pub mod matchup;
pub mod rules;

pub use error::{CardError, CardResult};

// Re-export key types at crate root for convenience
pub use card::{Card, DerivedStats, RawCard};
pub use matchup::{Comparison, Matchup, Outcome};
pub use rules::{
    analyze_advanced, compare, compare_by_id, score_all, AdvancedReport, Attribute, Direction,
    Heuristic, Scoreboard, Verdict,
};
