//! Trunfo CLI - Command-line interface for comparing Super Trunfo city cards.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Trunfo - Super Trunfo with Brazilian cities
#[derive(Parser, Debug)]
#[command(name = "trunfo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log comparison details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Enter two cards interactively and compare them from a menu
    Play {
        /// Do not clear the screen between steps
        #[arg(long, env = "TRUNFO_NO_CLEAR")]
        no_clear: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Compare two cards read from a JSON file
    Compare {
        /// JSON file with `first` and `second` cards
        #[arg(required = true)]
        cards: std::path::PathBuf,

        /// What to compare (default: all attributes)
        #[arg(short, long, default_value = "all")]
        mode: cli::ComparisonMode,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = match args.command {
        Commands::Play { no_clear, format } => cli::play::execute(cli::play::PlayConfig {
            clear_screen: !no_clear,
            format,
        }),

        Commands::Compare {
            cards,
            mode,
            format,
        } => cli::compare::execute(&cards, mode, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
