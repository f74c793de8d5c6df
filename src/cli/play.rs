//! Play command implementation - interactive card entry and comparison menu.

use super::menu::{self, MenuChoice};
use super::output::{format_matchup, format_outcome, JsonReport};
use super::prompt::Prompter;
use super::{CliError, OutputFormat};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use trunfo::{Comparison, Matchup};

/// Settings for an interactive session.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlayConfig {
    /// Clear the terminal between steps.
    pub(crate) clear_screen: bool,
    /// Format for comparison results.
    pub(crate) format: OutputFormat,
}

/// Execute the play command on the process's stdin and stdout.
///
/// # Errors
///
/// Returns an error if input ends during card entry or the terminal fails.
pub(crate) fn execute(config: PlayConfig) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config).run()
}

/// One interactive session over a reader and a writer.
struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: PlayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, output: W, config: PlayConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
        }
    }

    fn run(&mut self) -> Result<(), CliError> {
        self.clear()?;
        self.write("\n====================================\n")?;
        self.write("  SUPER TRUNFO - BRAZILIAN CITIES\n")?;
        self.write("====================================\n\n")?;

        self.write("=== CARD 1 ===\n")?;
        let first = self.prompter.read_card()?;
        self.prompter
            .wait_for_enter("Press ENTER to register the next card...")?;

        self.clear()?;
        self.write("=== CARD 2 ===\n")?;
        let second = self.prompter.read_card()?;

        let matchup = Matchup::new(first, second);
        tracing::info!(
            first = matchup.first().name(),
            second = matchup.second().name(),
            "cards registered"
        );

        self.clear()?;
        self.write(&format_matchup(&matchup))?;
        self.menu_loop(&matchup)?;

        self.clear()?;
        self.write("\n==================================\n")?;
        self.write("        THANKS FOR PLAYING!\n")?;
        self.write("==================================\n\n")?;
        Ok(())
    }

    fn menu_loop(&mut self, matchup: &Matchup) -> Result<(), CliError> {
        loop {
            self.write(&menu::render())?;
            self.write("Choose an option: ")?;
            self.prompter.output().flush()?;

            // End of input at the menu ends the session like option 0.
            let Some(line) = self.prompter.read_line()? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => return Ok(()),
                Some(MenuChoice::Compare(comparison)) => {
                    self.clear()?;
                    self.show(matchup, comparison)?;
                }
                None => self.write("\nInvalid option! Please try again.\n")?,
            }

            if !self.prompter.wait_for_enter("Press ENTER to continue...")? {
                return Ok(());
            }
            self.clear()?;
            self.write(&format_matchup(matchup))?;
        }
    }

    fn show(&mut self, matchup: &Matchup, comparison: Comparison) -> Result<(), CliError> {
        let outcome = matchup.run(comparison);
        tracing::debug!(?comparison, verdict = ?outcome.verdict(), "menu comparison");

        match self.config.format {
            OutputFormat::Text => self.write(&format_outcome(matchup, &outcome)),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&JsonReport::new(matchup, outcome))?;
                self.write(&format!("{json}\n"))
            }
        }
    }

    fn clear(&mut self) -> Result<(), CliError> {
        if self.config.clear_screen {
            execute!(self.prompter.output(), Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), CliError> {
        self.prompter.output().write_all(text.as_bytes())?;
        Ok(())
    }
}
