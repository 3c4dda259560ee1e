//! Backtracking search and solution counting.

use tracing::debug;

use crate::candidates::{choices, CandidateSet};
use crate::error::Error;
use crate::grid::{Grid, CELLS, EMPTY};

/// Stateless solver; every call works on its own copy of the input grid.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the grid, returning the completed copy.
    ///
    /// Deterministic: cell selection prefers the fewest candidates with
    /// the lowest index breaking ties, and values are tried ascending.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, Error> {
        let mut working = grid.clone();
        if search(&mut working) {
            Ok(working)
        } else {
            debug!("search exhausted without completing the grid");
            Err(Error::NoSolution)
        }
    }

    /// Count completions of the grid, stopping as soon as `limit` is hit.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        count_completions(&mut working, limit)
    }

    /// Exactly one completion exists.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }
}

// ==================== Backtracking search ====================

/// One open decision point: a cell plus the candidates not yet tried.
///
/// The frame stack doubles as the undo log; unwinding a frame resets its
/// cell to empty.
struct Frame {
    index: usize,
    remaining: CandidateSet,
}

/// Pick the empty cell to branch on: fewest candidates per `choices`,
/// lowest index on ties. `None` means the grid is complete.
fn select_cell(grid: &Grid) -> Option<Frame> {
    let mut best: Option<Frame> = None;
    for index in 0..CELLS {
        if grid.at(index) != EMPTY {
            continue;
        }
        let remaining = choices(grid, index);
        let stuck = remaining.is_empty();
        if best.as_ref().map_or(true, |b| remaining.len() < b.remaining.len()) {
            best = Some(Frame { index, remaining });
        }
        if stuck {
            // A dead cell is already the minimum; the branch must fail.
            break;
        }
    }
    best
}

/// Depth-first search over an explicit frame stack. Cells are filled in
/// place and cleared again as frames unwind.
fn search(grid: &mut Grid) -> bool {
    let mut frames: Vec<Frame> = Vec::with_capacity(CELLS);
    'descend: loop {
        let Some(frame) = select_cell(grid) else {
            return true;
        };
        frames.push(frame);
        loop {
            let Some(frame) = frames.last_mut() else {
                return false;
            };
            match frame.remaining.take_lowest() {
                Some(value) => {
                    grid.set(frame.index, value);
                    continue 'descend;
                }
                None => {
                    grid.set(frame.index, EMPTY);
                    frames.pop();
                }
            }
        }
    }
}

/// Count completions depth-first, visiting empty cells in index order and
/// stopping once `count` reaches `limit`.
fn count_completions(grid: &mut Grid, limit: usize) -> usize {
    let mut frames: Vec<Frame> = Vec::with_capacity(CELLS);
    let mut count = 0;
    'descend: loop {
        if let Some(index) = grid.first_empty() {
            frames.push(Frame {
                index,
                remaining: choices(grid, index),
            });
        } else {
            count += 1;
            if count >= limit {
                return count;
            }
            // Fall through and resume from the deepest open frame.
        }
        loop {
            let Some(frame) = frames.last_mut() else {
                return count;
            };
            match frame.remaining.take_lowest() {
                Some(value) => {
                    grid.set(frame.index, value);
                    continue 'descend;
                }
                None => {
                    grid.set(frame.index, EMPTY);
                    frames.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
    const SOLUTION: &str =
        "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

    fn grid(line: &str) -> Grid {
        Grid::from_string(line).unwrap()
    }

    #[test]
    fn solves_the_reference_puzzle() {
        let solved = Solver::new().solve(&grid(PUZZLE)).unwrap();
        assert_eq!(solved.to_line(), SOLUTION);
    }

    #[test]
    fn solving_is_deterministic() {
        let solver = Solver::new();
        let a = solver.solve(&grid(PUZZLE)).unwrap();
        let b = solver.solve(&grid(PUZZLE)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn a_solved_grid_solves_to_itself() {
        let solved = Solver::new().solve(&grid(SOLUTION)).unwrap();
        assert_eq!(solved.to_line(), SOLUTION);
    }

    #[test]
    fn input_grid_is_untouched() {
        let input = grid(PUZZLE);
        let _ = Solver::new().solve(&input).unwrap();
        assert_eq!(input.to_line(), PUZZLE);
    }

    #[test]
    fn reports_no_solution_for_a_dead_grid() {
        // Consistent givens, but a9 ends up with zero candidates.
        let line = format!("12345678.{}......9..{}", ".".repeat(9), ".".repeat(54));
        let dead = grid(&line);
        assert!(dead.check_givens().is_ok());
        assert_eq!(Solver::new().solve(&dead), Err(Error::NoSolution));
    }

    #[test]
    fn counts_stop_at_the_limit() {
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&Grid::empty(), 2), 2);
        assert_eq!(solver.count_solutions(&grid(PUZZLE), 2), 1);
        assert_eq!(solver.count_solutions(&grid(SOLUTION), 2), 1);
    }

    #[test]
    fn uniqueness_oracle() {
        let solver = Solver::new();
        assert!(solver.has_unique_solution(&grid(PUZZLE)));
        assert!(!solver.has_unique_solution(&Grid::empty()));

        // One given row leaves the rest of the grid wide open.
        let line = format!("123456789{}", ".".repeat(72));
        assert!(!solver.has_unique_solution(&grid(&line)));
    }
}
