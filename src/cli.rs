//! CLI command implementations for Trunfo.

pub(crate) mod compare;
pub(crate) mod play;

mod menu;
mod output;
mod prompt;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use tracing_subscriber::EnvFilter;
use trunfo::{Attribute, CardError, Comparison};

/// Output format for comparison results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Comparison requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ComparisonMode {
    /// Population (higher wins).
    Population,
    /// Area (higher wins).
    Area,
    /// GDP (higher wins).
    Gdp,
    /// Population density (lower wins).
    Density,
    /// GDP per capita (higher wins).
    GdpPerCapita,
    /// Tourist attractions (higher wins).
    TouristSpots,
    /// Every attribute with a final scoreboard.
    All,
    /// Advanced multi-attribute analysis.
    Advanced,
}

impl From<ComparisonMode> for Comparison {
    fn from(mode: ComparisonMode) -> Self {
        match mode {
            ComparisonMode::Population => Self::Single(Attribute::Population),
            ComparisonMode::Area => Self::Single(Attribute::Area),
            ComparisonMode::Gdp => Self::Single(Attribute::Gdp),
            ComparisonMode::Density => Self::Single(Attribute::Density),
            ComparisonMode::GdpPerCapita => Self::Single(Attribute::GdpPerCapita),
            ComparisonMode::TouristSpots => Self::Single(Attribute::TouristSpots),
            ComparisonMode::All => Self::All,
            ComparisonMode::Advanced => Self::Advanced,
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug output for this crate.
pub(crate) fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filter directive used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "trunfo=debug" } else { "warn" }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("invalid JSON: {e}"))
    }
}

impl From<CardError> for CliError {
    fn from(e: CardError) -> Self {
        Self::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "trunfo=debug");
        assert_eq!(default_directive(false), "warn");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
    }

    #[test]
    fn test_mode_to_comparison() {
        assert_eq!(
            Comparison::from(ComparisonMode::Density),
            Comparison::Single(Attribute::Density)
        );
        assert_eq!(Comparison::from(ComparisonMode::All), Comparison::All);
        assert_eq!(Comparison::from(ComparisonMode::Advanced), Comparison::Advanced);
    }

    #[test]
    fn test_mode_parses_kebab_case() {
        let mode = ComparisonMode::from_str("gdp-per-capita", true).unwrap();
        assert_eq!(mode, ComparisonMode::GdpPerCapita);
    }

    #[test]
    fn test_card_error_converts() {
        let err: CliError = CardError::EmptyName.into();
        assert!(err.to_string().contains("empty"));
    }
}
