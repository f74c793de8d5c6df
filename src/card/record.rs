//! Raw and finished card records.

use serde::{Deserialize, Serialize};

use crate::card::{
    check_area, check_card_code, check_city_name, check_gdp, compute_derived,
    normalize_state_code, DerivedStats,
};
use crate::error::CardResult;

/// Card fields as entered, before derived statistics exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCard {
    /// Two-letter state code.
    pub state: String,
    /// Free-form card code.
    pub code: String,
    /// City name.
    pub name: String,
    /// Number of inhabitants.
    pub population: u32,
    /// Area in km².
    pub area: f64,
    /// GDP in millions of reais.
    pub gdp: f64,
    /// Number of tourist attractions.
    pub tourist_spots: u32,
}

impl RawCard {
    /// Validate every field, returning the record with identity fields normalized.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(self) -> CardResult<Self> {
        Ok(Self {
            state: normalize_state_code(&self.state)?,
            code: check_card_code(&self.code)?,
            name: check_city_name(&self.name)?,
            population: self.population,
            area: check_area(self.area)?,
            gdp: check_gdp(self.gdp)?,
            tourist_spots: self.tourist_spots,
        })
    }
}

/// A city card with its derived statistics.
///
/// Fields are private so derived values can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    #[serde(flatten)]
    raw: RawCard,
    #[serde(flatten)]
    derived: DerivedStats,
}

impl Card {
    /// Build a card from raw fields without validating them.
    #[must_use]
    pub fn new(raw: RawCard) -> Self {
        let derived = compute_derived(&raw);
        Self { raw, derived }
    }

    /// Validate raw fields, then build the card.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is invalid.
    pub fn validated(raw: RawCard) -> CardResult<Self> {
        raw.validate().map(Self::new)
    }

    /// Raw fields.
    #[must_use]
    pub fn raw(&self) -> &RawCard {
        &self.raw
    }

    /// Derived statistics.
    #[must_use]
    pub fn derived(&self) -> DerivedStats {
        self.derived
    }

    /// Two-letter state code.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.raw.state
    }

    /// Card code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.raw.code
    }

    /// City name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.raw.name
    }

    /// Number of inhabitants.
    #[must_use]
    pub fn population(&self) -> u32 {
        self.raw.population
    }

    /// Area in km².
    #[must_use]
    pub fn area(&self) -> f64 {
        self.raw.area
    }

    /// GDP in millions of reais.
    #[must_use]
    pub fn gdp(&self) -> f64 {
        self.raw.gdp
    }

    /// Number of tourist attractions.
    #[must_use]
    pub fn tourist_spots(&self) -> u32 {
        self.raw.tourist_spots
    }

    /// Inhabitants per km², if computable.
    #[must_use]
    pub fn density(&self) -> Option<f64> {
        self.derived.density
    }

    /// Reais per inhabitant, if computable.
    #[must_use]
    pub fn gdp_per_capita(&self) -> Option<f64> {
        self.derived.gdp_per_capita
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;

    fn sao_paulo() -> RawCard {
        RawCard {
            state: " sp ".to_string(),
            code: "A01".to_string(),
            name: "São Paulo".to_string(),
            population: 12_000_000,
            area: 1_500.0,
            gdp: 700_000.0,
            tourist_spots: 50,
        }
    }

    #[test]
    fn test_new_computes_derived() {
        let card = Card::new(sao_paulo());
        assert_eq!(card.derived(), compute_derived(card.raw()));
        assert!(card.density().is_some());
        assert!(card.gdp_per_capita().is_some());
    }

    #[test]
    fn test_new_accepts_zero_area() {
        let card = Card::new(RawCard {
            area: 0.0,
            ..sao_paulo()
        });
        assert_eq!(card.density(), None);
    }

    #[test]
    fn test_validated_normalizes_state() {
        let card = Card::validated(sao_paulo()).unwrap();
        assert_eq!(card.state(), "SP");
        assert_eq!(card.name(), "São Paulo");
    }

    #[test]
    fn test_validated_rejects_zero_area() {
        let err = Card::validated(RawCard {
            area: 0.0,
            ..sao_paulo()
        })
        .unwrap_err();
        assert_eq!(err, CardError::InvalidArea(0.0));
    }

    #[test]
    fn test_validated_allows_zero_population() {
        let card = Card::validated(RawCard {
            population: 0,
            ..sao_paulo()
        })
        .unwrap();
        assert_eq!(card.gdp_per_capita(), None);
    }

    #[test]
    fn test_card_serializes_flat() {
        let card = Card::new(sao_paulo());
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["population"], 12_000_000);
        assert_eq!(json["density"], 8_000.0);
        assert!(json.get("raw").is_none());
    }
}
