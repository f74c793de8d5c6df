//! Comparison rules.
//!
//! Implements the Super Trunfo rules on top of [`Card`](crate::card::Card):
//! - Per-attribute comparison with a fixed direction of victory
//! - Aggregate scoring across all six attributes
//! - Advanced analysis combining several attributes

mod advanced;
mod attribute;
mod compare;
mod scoring;
mod verdict;

pub use advanced::{analyze_advanced, AdvancedReport, Heuristic, UNCOMPUTED};
pub use attribute::{Attribute, Direction};
pub use compare::{compare, compare_by_id};
pub use scoring::{score_all, Round, Scoreboard};
pub use verdict::Verdict;
