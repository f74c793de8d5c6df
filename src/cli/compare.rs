//! Compare command implementation - batch comparison of two cards from a file.

use super::output::{format_matchup, format_outcome, JsonReport};
use super::{CliError, ComparisonMode, OutputFormat};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use trunfo::{Card, Comparison, Matchup, RawCard};

/// Input file layout.
#[derive(Debug, Deserialize)]
struct CardPair {
    first: RawCard,
    second: RawCard,
}

/// Execute the compare command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or holds an invalid card.
pub(crate) fn execute(
    path: &Path,
    mode: ComparisonMode,
    format: OutputFormat,
) -> Result<(), CliError> {
    let matchup = load_matchup(path)?;
    print!("{}", render(&matchup, mode.into(), format)?);
    Ok(())
}

/// Read and validate both cards.
fn load_matchup(path: &Path) -> Result<Matchup, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;
    let pair: CardPair = serde_json::from_str(&text)?;

    let first = Card::validated(pair.first)
        .map_err(|e| CliError::new(format!("card 1: {e}")))?;
    let second = Card::validated(pair.second)
        .map_err(|e| CliError::new(format!("card 2: {e}")))?;

    tracing::debug!(path = %path.display(), "loaded cards");
    Ok(Matchup::new(first, second))
}

fn render(
    matchup: &Matchup,
    comparison: Comparison,
    format: OutputFormat,
) -> Result<String, CliError> {
    let outcome = matchup.run(comparison);
    match format {
        OutputFormat::Text => Ok(format!(
            "{}{}",
            format_matchup(matchup),
            format_outcome(matchup, &outcome)
        )),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonReport::new(matchup, outcome))?;
            Ok(format!("{json}\n"))
        }
    }
}
