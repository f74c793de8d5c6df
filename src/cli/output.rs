//! Output formatting utilities for CLI.

use serde::Serialize;
use trunfo::{AdvancedReport, Attribute, Card, Matchup, Outcome, Scoreboard, Verdict};

const RULE: &str = "===================================";
const THIN_RULE: &str = "-----------------------------------";

/// JSON-serializable comparison report.
#[derive(Debug, Serialize)]
pub(super) struct JsonReport<'a> {
    /// First card, including derived statistics.
    pub(super) first: &'a Card,
    /// Second card, including derived statistics.
    pub(super) second: &'a Card,
    /// Comparison result.
    pub(super) outcome: Outcome,
    /// Name of the winning city (null on a tie).
    pub(super) winner: Option<&'a str>,
}

impl<'a> JsonReport<'a> {
    /// Create from a matchup and one of its outcomes.
    pub(super) fn new(matchup: &'a Matchup, outcome: Outcome) -> Self {
        Self {
            first: matchup.first(),
            second: matchup.second(),
            outcome,
            winner: matchup.winner(outcome.verdict()).map(Card::name),
        }
    }
}

/// Format one card with raw and derived statistics.
pub(super) fn format_card(label: &str, card: &Card) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{label}:\n{RULE}\n"));
    output.push_str(&format!("Card: {}\n{THIN_RULE}\n", card.name()));
    output.push_str(&format!("State: {}\n", card.state()));
    output.push_str(&format!("Code: {}\n", card.code()));
    output.push_str(&format!("Population: {} inhabitants\n", card.population()));
    output.push_str(&format!("Area: {:.2} km²\n", card.area()));
    output.push_str(&format!("GDP: R$ {:.2} million\n", card.gdp()));
    output.push_str(&format!("Tourist attractions: {}\n", card.tourist_spots()));

    output.push_str(&format!("\nDerived statistics:\n{THIN_RULE}\n"));
    match card.density() {
        Some(density) => {
            output.push_str(&format!("Population density: {density:.2} inhabitants/km²\n"));
        }
        None => output.push_str("Population density: not computable (area = 0)\n"),
    }
    match card.gdp_per_capita() {
        Some(per_capita) => output.push_str(&format!("GDP per capita: R$ {per_capita:.2}\n")),
        None => output.push_str("GDP per capita: not computable (population = 0)\n"),
    }
    output.push_str(RULE);
    output.push('\n');

    output
}

/// Format both cards of a matchup.
pub(super) fn format_matchup(matchup: &Matchup) -> String {
    let mut output = String::from("=== REGISTERED CARDS ===\n");
    output.push_str(&format_card("CARD 1", matchup.first()));
    output.push_str(&format_card("CARD 2", matchup.second()));
    output
}

/// Format any outcome as human-readable text.
pub(super) fn format_outcome(matchup: &Matchup, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Single { attribute, verdict } => {
            let mut output = String::from("\n=== CARD COMPARISON ===\n");
            output.push_str(&format_attribute(matchup, *attribute));
            output.push_str(&format!("\nRESULT: {}\n", describe_verdict(matchup, *verdict)));
            output
        }
        Outcome::All(board) => format_scoreboard(matchup, board),
        Outcome::Advanced(report) => format_advanced(matchup, *report),
    }
}

fn format_attribute(matchup: &Matchup, attribute: Attribute) -> String {
    format!(
        "Attribute: {attribute}\n\nCard 1 - {}\nCard 2 - {}\n",
        describe_value(matchup.first(), attribute),
        describe_value(matchup.second(), attribute),
    )
}

fn format_scoreboard(matchup: &Matchup, board: &Scoreboard) -> String {
    let mut output = String::from("\n=== RESULTS OF ALL COMPARISONS ===\n");

    for round in &board.rounds {
        output.push('\n');
        output.push_str(&format_attribute(matchup, round.attribute));
        output.push_str(&format!("Result: {}\n", describe_verdict(matchup, round.verdict)));
    }

    output.push_str("\n=== FINAL SCORE ===\n");
    output.push_str(&format!("{}: {} wins\n", matchup.first().name(), board.wins_first));
    output.push_str(&format!("{}: {} wins\n", matchup.second().name(), board.wins_second));
    output.push_str(&format!("Ties: {}\n", board.ties));

    match matchup.winner(board.overall()) {
        Some(card) => output.push_str(&format!("\nOverall winner: {}!\n", card.name())),
        None => output.push_str("\nOverall tie!\n"),
    }
    output
}

fn format_advanced(matchup: &Matchup, report: AdvancedReport) -> String {
    let (first, second) = (matchup.first(), matchup.second());
    let mut output = String::from("\n=== ADVANCED ANALYSIS ===\n");

    output.push_str("\nPopulation vs GDP:\n");
    for card in [first, second] {
        output.push_str(&format!(
            "{}: {} inhabitants, GDP: R$ {:.2} million\n",
            card.name(),
            card.population(),
            card.gdp()
        ));
    }

    output.push_str("\nQuality of life:\n");
    for card in [first, second] {
        output.push_str(&format!(
            "{}: {}, {} tourist attractions\n",
            card.name(),
            describe_stat(card, Attribute::Density),
            card.tourist_spots()
        ));
    }

    output.push_str("\nDevelopment:\n");
    for card in [first, second] {
        output.push_str(&format!(
            "{}: {}, {} tourist attractions\n",
            card.name(),
            describe_stat(card, Attribute::GdpPerCapita),
            card.tourist_spots()
        ));
    }

    output.push_str("\nADVANCED ANALYSIS RESULT:\n");
    match (matchup.winner(report.verdict), report.rule) {
        (Some(card), Some(rule)) => output.push_str(&format!(
            "{} shows better overall development ({}).\n",
            card.name(),
            rule.name()
        )),
        _ => output.push_str("The cities are at similar levels of development.\n"),
    }
    output
}

fn describe_value(card: &Card, attribute: Attribute) -> String {
    format!("{} ({}): {}", card.name(), card.state(), describe_stat(card, attribute))
}

fn describe_stat(card: &Card, attribute: Attribute) -> String {
    match attribute {
        Attribute::Population => format!("{} inhabitants", card.population()),
        Attribute::Area => format!("{:.2} km²", card.area()),
        Attribute::Gdp => format!("R$ {:.2} million", card.gdp()),
        Attribute::Density => card.density().map_or_else(
            || "density not computable".to_string(),
            |density| format!("{density:.2} inhabitants/km²"),
        ),
        Attribute::GdpPerCapita => card.gdp_per_capita().map_or_else(
            || "GDP per capita not computable".to_string(),
            |per_capita| format!("R$ {per_capita:.2} per capita"),
        ),
        Attribute::TouristSpots => format!("{} tourist attractions", card.tourist_spots()),
    }
}

fn describe_verdict(matchup: &Matchup, verdict: Verdict) -> String {
    match matchup.winner(verdict) {
        Some(card) => format!("{} wins!", card.name()),
        None => "Tie!".to_string(),
    }
}
