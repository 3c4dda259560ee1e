use thiserror::Error;

/// Failure modes of the engine's public operations.
///
/// Every error is detected synchronously and reported without a partial
/// result; nothing is retried inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The puzzle string is not exactly 81 characters long.
    #[error("Expected puzzle to be 81 characters long")]
    InvalidLength,
    /// The puzzle string contains a character outside `1`-`9` and `.`.
    #[error("Invalid characters in puzzle")]
    InvalidCharacter,
    /// Two given cells contradict each other before any solving starts.
    #[error("Puzzle givens conflict with each other")]
    UnsolvableGiven,
    /// The search space was exhausted without completing the grid.
    #[error("Puzzle cannot be solved")]
    NoSolution,
    /// The coordinate is not a row letter `a`-`i` followed by a column `1`-`9`.
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    /// The value is not an integer between 1 and 9.
    #[error("Invalid value")]
    InvalidValue,
}
