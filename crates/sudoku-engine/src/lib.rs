//! Core Sudoku engine.
//!
//! Works on 81-character puzzle strings (`1`-`9` for givens, `.` for
//! empty cells) and exposes four operations to the glue layer around it:
//!
//! - [`validate`] — shape and given-consistency of a puzzle string
//! - [`check`] — row/column/region conflicts for one candidate placement
//! - [`solve`] — backtracking search with a most-constrained-cell heuristic
//! - [`generate`] — a puzzle with exactly one solution, dug from a random
//!   solved grid under a difficulty-dependent failure budget
//!
//! Everything is synchronous and CPU-bound; each call owns its working
//! grid, so concurrent callers only need independent inputs. Timeouts are
//! the caller's business: pathological inputs can drive the search
//! exponential, and the engine never bails out on its own.

mod candidates;
mod check;
mod error;
mod generator;
mod grid;
mod solver;

pub use candidates::{choices, is_forced_singleton, legal_values, CandidateSet};
pub use check::{Conflict, Coordinate, Placement};
pub use error::Error;
pub use generator::{Difficulty, Generator};
pub use grid::{Grid, Position, CELLS, SIDE};
pub use solver::Solver;

/// Parse a puzzle string and verify its givens are mutually consistent.
pub(crate) fn validated(puzzle: &str) -> Result<Grid, Error> {
    let grid = Grid::from_string(puzzle)?;
    grid.check_givens()?;
    Ok(grid)
}

/// Validate an 81-character puzzle string: length, character set, and
/// mutual consistency of the givens.
pub fn validate(puzzle: &str) -> Result<(), Error> {
    validated(puzzle).map(|_| ())
}

/// Report conflicts for placing `value` at `coordinate` in `puzzle`.
///
/// The coordinate is parsed first, then the value, then the puzzle is
/// fully validated; conflicts come back in fixed row, column, region
/// order.
pub fn check(puzzle: &str, coordinate: &str, value: &str) -> Result<Placement, Error> {
    check::check(puzzle, coordinate, value)
}

/// Solve `puzzle`, returning the completed 81-character string.
///
/// The puzzle is validated first, so inconsistent givens surface as
/// [`Error::UnsolvableGiven`] before any search runs.
pub fn solve(puzzle: &str) -> Result<String, Error> {
    let grid = validated(puzzle)?;
    let solved = Solver::new().solve(&grid)?;
    Ok(solved.to_line())
}

/// Generate a puzzle of the requested difficulty, as an 81-character
/// string with a guaranteed unique solution.
pub fn generate(difficulty: Difficulty) -> String {
    Generator::new().generate(difficulty).to_line()
}
