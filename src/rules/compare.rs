//! Single-attribute comparison.

use std::cmp::Ordering;

use crate::card::Card;
use crate::rules::{Attribute, Direction, Verdict};

/// Compare two cards on one attribute.
///
/// A value that is absent, negative, or not finite cannot win: the comparison
/// is a tie no matter what the other card holds.
#[must_use]
pub fn compare(first: &Card, second: &Card, attribute: Attribute) -> Verdict {
    let verdict = match (
        comparable(attribute.value(first)),
        comparable(attribute.value(second)),
    ) {
        (Some(a), Some(b)) => decide(a, b, attribute.direction()),
        _ => Verdict::Tie,
    };

    tracing::debug!(
        attribute = attribute.name(),
        first = first.name(),
        second = second.name(),
        ?verdict,
        "compared attribute"
    );
    verdict
}

/// Compare two cards by menu number. Unknown numbers are a tie.
#[must_use]
pub fn compare_by_id(first: &Card, second: &Card, id: u8) -> Verdict {
    match Attribute::from_id(id) {
        Some(attribute) => compare(first, second, attribute),
        None => {
            tracing::debug!(id, "unknown attribute id, scoring as tie");
            Verdict::Tie
        }
    }
}

fn comparable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

fn decide(a: f64, b: f64, direction: Direction) -> Verdict {
    let ordering = match direction {
        Direction::HigherWins => a.partial_cmp(&b),
        Direction::LowerWins => b.partial_cmp(&a),
    };

    match ordering {
        Some(Ordering::Greater) => Verdict::First,
        Some(Ordering::Less) => Verdict::Second,
        Some(Ordering::Equal) | None => Verdict::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::RawCard;

    fn card(population: u32, area: f64, gdp: f64, tourist_spots: u32) -> Card {
        Card::new(RawCard {
            state: "SP".to_string(),
            code: "A01".to_string(),
            name: "City".to_string(),
            population,
            area,
            gdp,
            tourist_spots,
        })
    }

    #[test]
    fn test_higher_wins() {
        let big = card(1_000, 100.0, 50.0, 9);
        let small = card(500, 10.0, 5.0, 1);

        for attribute in [
            Attribute::Population,
            Attribute::Area,
            Attribute::Gdp,
            Attribute::TouristSpots,
        ] {
            assert_eq!(compare(&big, &small, attribute), Verdict::First, "{attribute}");
            assert_eq!(compare(&small, &big, attribute), Verdict::Second, "{attribute}");
        }
    }

    #[test]
    fn test_density_lower_wins() {
        // 1000/100 = 10 vs 1000/10 = 100
        let sparse = card(1_000, 100.0, 1.0, 0);
        let dense = card(1_000, 10.0, 1.0, 0);

        assert_eq!(compare(&sparse, &dense, Attribute::Density), Verdict::First);
        assert_eq!(compare(&dense, &sparse, Attribute::Density), Verdict::Second);
    }

    #[test]
    fn test_equal_values_tie() {
        let a = card(1_000, 100.0, 50.0, 3);
        let b = card(1_000, 100.0, 50.0, 3);
        for attribute in Attribute::ALL {
            assert_eq!(compare(&a, &b, attribute), Verdict::Tie, "{attribute}");
        }
    }

    #[test]
    fn test_absent_density_ties() {
        let no_area = card(1_000, 0.0, 50.0, 3);
        let normal = card(1_000_000, 1.0, 50.0, 3);

        assert_eq!(compare(&no_area, &normal, Attribute::Density), Verdict::Tie);
        assert_eq!(compare(&normal, &no_area, Attribute::Density), Verdict::Tie);
    }

    #[test]
    fn test_absent_gdp_per_capita_ties() {
        let empty = card(0, 10.0, 1_000_000.0, 3);
        let normal = card(10, 10.0, 0.001, 3);

        assert_eq!(compare(&empty, &normal, Attribute::GdpPerCapita), Verdict::Tie);
    }

    #[test]
    fn test_negative_raw_value_ties() {
        let broken = card(10, 5.0, -1.0, 0);
        let normal = card(10, 5.0, 0.0, 0);

        assert_eq!(compare(&broken, &normal, Attribute::Gdp), Verdict::Tie);
    }

    #[test]
    fn test_compare_by_id() {
        let big = card(1_000, 100.0, 50.0, 9);
        let small = card(500, 10.0, 5.0, 1);

        assert_eq!(compare_by_id(&big, &small, 1), Verdict::First);
        assert_eq!(compare_by_id(&big, &small, 6), Verdict::First);
        assert_eq!(compare_by_id(&big, &small, 0), Verdict::Tie);
        assert_eq!(compare_by_id(&big, &small, 7), Verdict::Tie);
        assert_eq!(compare_by_id(&big, &small, 255), Verdict::Tie);
    }
}
