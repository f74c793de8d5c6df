//! Derived statistics.
//!
//! Density and GDP per capita are ratios; when the divisor is zero the value
//! is absent rather than a placeholder number.

use serde::Serialize;

use crate::card::RawCard;

/// GDP is entered in millions of reais.
const GDP_UNIT: f64 = 1_000_000.0;

/// Statistics computed from a card's raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedStats {
    /// Inhabitants per km². `None` when the area is not positive.
    pub density: Option<f64>,
    /// Reais per inhabitant. `None` when the population is zero.
    pub gdp_per_capita: Option<f64>,
}

/// Compute density and GDP per capita from raw fields.
#[must_use]
pub fn compute_derived(raw: &RawCard) -> DerivedStats {
    let population = f64::from(raw.population);

    let density = if raw.area > 0.0 {
        Some(population / raw.area)
    } else {
        None
    };
    let gdp_per_capita = if raw.population > 0 {
        Some(raw.gdp * GDP_UNIT / population)
    } else {
        None
    };

    DerivedStats {
        density,
        gdp_per_capita,
    }
}
