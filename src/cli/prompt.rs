//! Line-based prompts that repeat until the answer is valid.

use std::io::{BufRead, Write};

use trunfo::card::{
    check_area, check_card_code, check_city_name, check_gdp, normalize_state_code, parse_amount,
    parse_count, MAX_CODE_LEN, MAX_NAME_LEN,
};
use trunfo::{Card, CardResult, RawCard};

use super::CliError;

/// Reads answers from `input` and writes questions to `output`.
pub(super) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over a reader and a writer.
    pub(super) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer questions go to.
    pub(super) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning the writer.
    #[cfg(test)]
    pub(super) fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its terminator. Returns `None` at end of input.
    pub(super) fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask a question until `parse` accepts the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends before a valid answer is given.
    pub(super) fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> CardResult<T>,
    ) -> Result<T, CliError> {
        loop {
            write!(self.output, "\n{question}: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Err(CliError::new("input ended before the card was complete"));
            };
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(question, error = %e, "rejected answer");
                    writeln!(self.output, "Invalid value: {e}. Please try again.")?;
                }
            }
        }
    }

    /// Ask for every field of a card.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends before the card is complete.
    pub(super) fn read_card(&mut self) -> Result<Card, CliError> {
        writeln!(self.output, "\n=== CARD REGISTRATION ===")?;

        let state = self.ask("State (2-letter code, e.g. SP)", normalize_state_code)?;
        let code = self.ask(
            &format!("Card code (max {MAX_CODE_LEN} characters)"),
            check_card_code,
        )?;
        let name = self.ask(
            &format!("City name (max {MAX_NAME_LEN} characters)"),
            check_city_name,
        )?;
        let population = self.ask("Population (whole number >= 0)", |s| {
            parse_count("population", s)
        })?;
        let area = self.ask("Area in km² (number > 0)", |s| {
            parse_amount("area", s).and_then(check_area)
        })?;
        let gdp = self.ask("GDP in millions of R$ (>= 0)", |s| {
            parse_amount("GDP", s).and_then(check_gdp)
        })?;
        let tourist_spots = self.ask("Number of tourist attractions (>= 0)", |s| {
            parse_count("tourist attractions", s)
        })?;

        let card = Card::validated(RawCard {
            state,
            code,
            name,
            population,
            area,
            gdp,
            tourist_spots,
        })?;
        Ok(card)
    }

    /// Show a message and wait for ENTER. Returns `false` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub(super) fn wait_for_enter(&mut self, message: &str) -> Result<bool, CliError> {
        write!(self.output, "\n{message}")?;
        self.output.flush()?;
        Ok(self.read_line()?.is_some())
    }
}
