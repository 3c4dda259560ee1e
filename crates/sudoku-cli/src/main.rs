//! Command-line front end for the Sudoku engine.
//!
//! Subcommands map one-to-one onto the engine's four operations and print
//! the service's JSON response shapes on stdout.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use sudoku_engine::{self as engine, Difficulty, Error, Generator};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "sudoku",
    version,
    about = "Validate, check, solve, and generate Sudoku puzzles"
)]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an 81-character puzzle string.
    Validate {
        /// Puzzle string: digits 1-9 and '.' for empty cells.
        puzzle: String,
    },
    /// Check one placement for row/column/region conflicts.
    Check {
        puzzle: String,
        /// Coordinate such as "a1": row letter a-i, column 1-9.
        coordinate: String,
        /// Value 1-9 to test at the coordinate.
        value: String,
    },
    /// Solve a puzzle.
    Solve {
        puzzle: String,
    },
    /// Generate a puzzle with a unique solution.
    Generate {
        /// Target difficulty.
        #[arg(short, long, value_enum, default_value = "medium")]
        difficulty: CliDifficulty,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Difficulty as the command line spells it.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDifficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<CliDifficulty> for Difficulty {
    fn from(d: CliDifficulty) -> Self {
        match d {
            CliDifficulty::Easy => Difficulty::Easy,
            CliDifficulty::Medium => Difficulty::Medium,
            CliDifficulty::Hard => Difficulty::Hard,
            CliDifficulty::Expert => Difficulty::Expert,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_max_level(cli.log)
        .with_target(false)
        .init();

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", json!({ "error": err.to_string() }));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String, Error> {
    match command {
        Command::Validate { puzzle } => {
            engine::validate(&puzzle)?;
            Ok(json!({ "valid": true }).to_string())
        }
        Command::Check {
            puzzle,
            coordinate,
            value,
        } => {
            let placement = engine::check(&puzzle, &coordinate, &value)?;
            Ok(serde_json::to_string(&placement).expect("placement serializes"))
        }
        Command::Solve { puzzle } => {
            let solution = engine::solve(&puzzle)?;
            Ok(json!({ "solution": solution }).to_string())
        }
        Command::Generate { difficulty, seed } => {
            let mut generator = match seed {
                Some(seed) => Generator::with_seed(seed),
                None => Generator::new(),
            };
            let puzzle = generator.generate(difficulty.into());
            Ok(json!({ "puzzle": puzzle.to_line() }).to_string())
        }
    }
}
