//! Single-placement conflict reporting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::grid::Position;

/// Board coordinate as callers write it: a row letter `a`-`i`
/// (case-insensitive) followed by a column digit `1`-`9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate(Position);

impl Coordinate {
    /// The zero-based position this coordinate names.
    pub fn position(self) -> Position {
        self.0
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::InvalidCoordinate);
        };
        let row = match letter.to_ascii_lowercase() {
            ch @ 'a'..='i' => ch as usize - 'a' as usize,
            _ => return Err(Error::InvalidCoordinate),
        };
        let col = match digit {
            ch @ '1'..='9' => ch as usize - '1' as usize,
            _ => return Err(Error::InvalidCoordinate),
        };
        Ok(Self(Position::new(row, col)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.0.row as u8) as char, self.0.col + 1)
    }
}

/// One constraint category a placement can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict {
    Row,
    Column,
    Region,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Row => write!(f, "row"),
            Conflict::Column => write!(f, "column"),
            Conflict::Region => write!(f, "region"),
        }
    }
}

/// Outcome of checking one candidate placement.
///
/// Serializes to the service wire shape: `{"valid":true}` or
/// `{"valid":false,"conflicts":[...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<Conflict>,
}

impl Placement {
    fn valid() -> Self {
        Self {
            valid: true,
            conflicts: Vec::new(),
        }
    }

    fn invalid(conflicts: Vec<Conflict>) -> Self {
        Self {
            valid: false,
            conflicts,
        }
    }
}

fn parse_value(s: &str) -> Result<u8, Error> {
    match s.parse::<u8>() {
        Ok(value @ 1..=9) => Ok(value),
        _ => Err(Error::InvalidValue),
    }
}

/// Report which constraint categories placing `value` at `coordinate`
/// would violate, in fixed row, column, region order.
///
/// The coordinate is parsed first, then the value, then the puzzle string
/// is fully validated. The target cell itself is ignored by every
/// predicate, so re-asserting a value already in place is valid unless
/// another peer conflicts.
pub fn check(puzzle: &str, coordinate: &str, value: &str) -> Result<Placement, Error> {
    let coordinate: Coordinate = coordinate.parse()?;
    let value = parse_value(value)?;
    let grid = crate::validated(puzzle)?;
    let pos = coordinate.position();

    let mut conflicts = Vec::new();
    if !grid.row_permits(pos, value) {
        conflicts.push(Conflict::Row);
    }
    if !grid.col_permits(pos, value) {
        conflicts.push(Conflict::Column);
    }
    if !grid.region_permits(pos, value) {
        conflicts.push(Conflict::Region);
    }

    if conflicts.is_empty() {
        Ok(Placement::valid())
    } else {
        Ok(Placement::invalid(conflicts))
    }
}
