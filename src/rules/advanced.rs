//! Advanced analysis.
//!
//! Three compound heuristics are tried in priority order, each first for the
//! first card and then for the second. The first one that holds decides the
//! verdict; if none holds the cards are considered equally developed.
//!
//! Unlike single-attribute comparison, these heuristics do not guard against
//! absent derived statistics. An absent value takes part as [`UNCOMPUTED`],
//! below every computable value, so a card with no density counts as the
//! sparsest and a card with no GDP per capita counts as the poorest.

use serde::Serialize;

use crate::card::Card;
use crate::rules::Verdict;

/// Stand-in for an absent derived statistic inside the heuristics.
pub const UNCOMPUTED: f64 = -1.0;

/// A heuristic that can decide an advanced analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// More than twice the population and a larger GDP.
    ScaleDominance,
    /// Higher GDP per capita and more tourist attractions.
    DevelopmentCombo,
    /// Lower density and more tourist attractions.
    QualityOfLife,
}

impl Heuristic {
    /// All heuristics in priority order.
    pub const PRIORITY: [Self; 3] = [
        Self::ScaleDominance,
        Self::DevelopmentCombo,
        Self::QualityOfLife,
    ];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ScaleDominance => "Scale dominance",
            Self::DevelopmentCombo => "Development",
            Self::QualityOfLife => "Quality of life",
        }
    }

    /// Whether `winner` beats `other` under this heuristic.
    #[must_use]
    pub fn holds(self, winner: &Card, other: &Card) -> bool {
        match self {
            Self::ScaleDominance => {
                u64::from(winner.population()) > 2 * u64::from(other.population())
                    && winner.gdp() > other.gdp()
            }
            Self::DevelopmentCombo => {
                or_uncomputed(winner.gdp_per_capita()) > or_uncomputed(other.gdp_per_capita())
                    && winner.tourist_spots() > other.tourist_spots()
            }
            Self::QualityOfLife => {
                or_uncomputed(winner.density()) < or_uncomputed(other.density())
                    && winner.tourist_spots() > other.tourist_spots()
            }
        }
    }
}

/// Result of an advanced analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvancedReport {
    /// Overall verdict.
    pub verdict: Verdict,
    /// Heuristic that decided it, or `None` on a tie.
    pub rule: Option<Heuristic>,
}

/// Run the heuristics in priority order and report the first that holds.
#[must_use]
pub fn analyze_advanced(first: &Card, second: &Card) -> AdvancedReport {
    let report = Heuristic::PRIORITY
        .into_iter()
        .find_map(|rule| {
            if rule.holds(first, second) {
                Some((Verdict::First, rule))
            } else if rule.holds(second, first) {
                Some((Verdict::Second, rule))
            } else {
                None
            }
        })
        .map_or(
            AdvancedReport {
                verdict: Verdict::Tie,
                rule: None,
            },
            |(verdict, rule)| AdvancedReport {
                verdict,
                rule: Some(rule),
            },
        );

    tracing::debug!(
        first = first.name(),
        second = second.name(),
        verdict = ?report.verdict,
        rule = ?report.rule,
        "advanced analysis"
    );
    report
}

fn or_uncomputed(value: Option<f64>) -> f64 {
    value.unwrap_or(UNCOMPUTED)
}

/// Kani formal verification proofs.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    /// Doubling a population in `u64` never overflows.
    #[kani::proof]
    fn prove_scale_doubling_safe() {
        let population: u32 = kani::any();
        let doubled = 2 * u64::from(population);
        assert!(doubled >= u64::from(population));
        assert!(doubled <= 2 * u64::from(u32::MAX));
    }

    /// Scale dominance can never hold in both directions.
    #[kani::proof]
    fn prove_scale_dominance_antisymmetric() {
        let a: u32 = kani::any();
        let b: u32 = kani::any();
        let a_dominates = u64::from(a) > 2 * u64::from(b);
        let b_dominates = u64::from(b) > 2 * u64::from(a);
        assert!(!(a_dominates && b_dominates));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::RawCard;

    fn card(population: u32, area: f64, gdp: f64, tourist_spots: u32) -> Card {
        Card::new(RawCard {
            state: "BA".to_string(),
            code: "C03".to_string(),
            name: "City".to_string(),
            population,
            area,
            gdp,
            tourist_spots,
        })
    }

    #[test]
    fn test_scale_dominance() {
        let big = card(10_000_000, 10.0, 500_000.0, 0);
        let small = card(1_000_000, 1_000.0, 100_000.0, 99);

        let report = analyze_advanced(&big, &small);
        assert_eq!(report.verdict, Verdict::First);
        assert_eq!(report.rule, Some(Heuristic::ScaleDominance));

        let report = analyze_advanced(&small, &big);
        assert_eq!(report.verdict, Verdict::Second);
        assert_eq!(report.rule, Some(Heuristic::ScaleDominance));
    }

    #[test]
    fn test_exactly_double_population_is_not_dominance() {
        let a = card(2_000, 10.0, 100.0, 0);
        let b = card(1_000, 10.0, 50.0, 0);

        assert!(!Heuristic::ScaleDominance.holds(&a, &b));
    }

    #[test]
    fn test_scale_dominance_does_not_overflow() {
        let a = card(u32::MAX, 10.0, 100.0, 0);
        let b = card(u32::MAX / 2 + 1, 10.0, 50.0, 0);

        assert!(!Heuristic::ScaleDominance.holds(&a, &b));
    }

    #[test]
    fn test_development_combo() {
        // Same population, so higher GDP means higher GDP per capita.
        let rich = card(1_000, 10.0, 200.0, 5);
        let poor = card(1_000, 10.0, 100.0, 4);

        let report = analyze_advanced(&poor, &rich);
        assert_eq!(report.verdict, Verdict::Second);
        assert_eq!(report.rule, Some(Heuristic::DevelopmentCombo));
    }

    #[test]
    fn test_quality_of_life() {
        // a: density 10, per capita 100_000; b: density 100, per capita 1_000_000.
        let a = card(1_000, 100.0, 100.0, 8);
        let b = card(1_000, 10.0, 1_000.0, 2);

        let report = analyze_advanced(&a, &b);
        assert_eq!(report.verdict, Verdict::First);
        assert_eq!(report.rule, Some(Heuristic::QualityOfLife));
    }

    #[test]
    fn test_priority_order() {
        // a dominates on scale; b wins development. Scale is checked first.
        let a = card(3_000, 10.0, 100.0, 0);
        let b = card(1_000, 10.0, 99.0, 10);

        let report = analyze_advanced(&a, &b);
        assert_eq!(report.verdict, Verdict::First);
        assert_eq!(report.rule, Some(Heuristic::ScaleDominance));
    }

    #[test]
    fn test_no_heuristic_ties() {
        let a = card(1_000, 10.0, 100.0, 3);
        let report = analyze_advanced(&a, &a.clone());

        assert_eq!(report.verdict, Verdict::Tie);
        assert_eq!(report.rule, None);
    }

    #[test]
    fn test_absent_gdp_per_capita_loses_development() {
        // a has no GDP per capita, so any computable value beats it.
        let a = Card::validated(RawCard {
            state: "SP".to_string(),
            code: "E01".to_string(),
            name: "Empty".to_string(),
            population: 0,
            area: 10.0,
            gdp: 100.0,
            tourist_spots: 1,
        })
        .unwrap();
        let b = card(10, 10.0, 0.1, 5);
        assert_eq!(a.gdp_per_capita(), None);

        assert!(Heuristic::DevelopmentCombo.holds(&b, &a));
        assert!(!Heuristic::DevelopmentCombo.holds(&a, &b));

        let report = analyze_advanced(&a, &b);
        assert_eq!(report.verdict, Verdict::Second);
        assert_eq!(report.verdict.code(), 2);
        assert_eq!(report.rule, Some(Heuristic::DevelopmentCombo));
    }

    #[test]
    fn test_absent_density_wins_quality_of_life() {
        // Equal population and GDP, so only quality of life can decide.
        let no_area = card(1_000, 0.0, 10.0, 9);
        let other = card(1_000, 10.0, 10.0, 1);
        assert_eq!(no_area.density(), None);

        assert!(Heuristic::QualityOfLife.holds(&no_area, &other));
        assert!(!Heuristic::QualityOfLife.holds(&other, &no_area));

        let report = analyze_advanced(&other, &no_area);
        assert_eq!(report.verdict, Verdict::Second);
        assert_eq!(report.rule, Some(Heuristic::QualityOfLife));
    }

    #[test]
    fn test_both_absent_do_not_decide() {
        let a = card(0, 0.0, 10.0, 9);
        let b = card(0, 0.0, 10.0, 1);

        let report = analyze_advanced(&a, &b);
        assert_eq!(report.verdict, Verdict::Tie);
        assert_eq!(report.rule, None);
    }
}
