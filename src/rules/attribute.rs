//! The six comparable attributes.

use std::fmt;

use serde::Serialize;

use crate::card::Card;

/// Whether the larger or the smaller value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Larger value wins.
    HigherWins,
    /// Smaller value wins.
    LowerWins,
}

/// An attribute eligible for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Number of inhabitants.
    Population,
    /// Area in km².
    Area,
    /// GDP in millions.
    Gdp,
    /// Inhabitants per km² (derived).
    Density,
    /// GDP per inhabitant (derived).
    GdpPerCapita,
    /// Number of tourist attractions.
    TouristSpots,
}

impl Attribute {
    /// All attributes, in the order the aggregate scorer visits them.
    pub const ALL: [Self; 6] = [
        Self::Population,
        Self::Area,
        Self::Gdp,
        Self::TouristSpots,
        Self::Density,
        Self::GdpPerCapita,
    ];

    /// Look up an attribute by its menu number (1-6).
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Population),
            2 => Some(Self::Area),
            3 => Some(Self::Gdp),
            4 => Some(Self::Density),
            5 => Some(Self::GdpPerCapita),
            6 => Some(Self::TouristSpots),
            _ => None,
        }
    }

    /// Menu number (1-6).
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Population => 1,
            Self::Area => 2,
            Self::Gdp => 3,
            Self::Density => 4,
            Self::GdpPerCapita => 5,
            Self::TouristSpots => 6,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Population => "Population",
            Self::Area => "Area",
            Self::Gdp => "GDP",
            Self::Density => "Population density",
            Self::GdpPerCapita => "GDP per capita",
            Self::TouristSpots => "Tourist attractions",
        }
    }

    /// Direction of victory.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::Density => Direction::LowerWins,
            _ => Direction::HigherWins,
        }
    }

    /// The card's value for this attribute, or `None` if it was not computable.
    #[must_use]
    pub fn value(self, card: &Card) -> Option<f64> {
        match self {
            Self::Population => Some(f64::from(card.population())),
            Self::Area => Some(card.area()),
            Self::Gdp => Some(card.gdp()),
            Self::Density => card.density(),
            Self::GdpPerCapita => card.gdp_per_capita(),
            Self::TouristSpots => Some(f64::from(card.tourist_spots())),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
