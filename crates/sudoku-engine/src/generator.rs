//! Solved-grid generation and difficulty-driven hole digging.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::grid::{Grid, Position, CELLS, EMPTY};
use crate::solver::Solver;

/// Requested difficulty of a generated puzzle.
///
/// Difficulty maps to a failure budget for the dig loop, not to a target
/// hole count: harder puzzles tolerate more failed removal attempts and
/// therefore tend to end up with fewer givens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// How many failed removals the dig loop tolerates before stopping.
    /// Successful removals never touch the budget.
    pub fn failure_budget(self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 7,
            Difficulty::Hard => 10,
            Difficulty::Expert => 12,
        }
    }

    /// All difficulty levels, easiest first.
    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Expert => write!(f, "expert"),
        }
    }
}

/// Puzzle generator. Owns its random source so callers can seed it for
/// reproducible output.
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Generator with a fixed seed; the same seed reproduces the same
    /// sequence of grids.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Produce a fully solved random grid.
    pub fn generate_solved(&mut self) -> Grid {
        loop {
            let mut grid = Grid::empty();
            if self.fill(&mut grid) {
                return grid;
            }
            // An empty grid always admits a completion, so this retry is
            // unreachable in practice; fresh shuffles keep it harmless.
        }
    }

    /// Derive a puzzle from a fresh solved grid by digging holes until the
    /// failure budget for `difficulty` runs out. Every kept removal leaves
    /// the puzzle with exactly one solution.
    pub fn generate(&mut self, difficulty: Difficulty) -> Grid {
        let solver = Solver::new();
        let mut grid = self.generate_solved();
        let mut budget = difficulty.failure_budget();

        while budget > 0 {
            let filled: Vec<usize> = grid.filled_cells().collect();
            let index = filled[self.rng.next_index(filled.len())];
            let removed = grid.at(index);
            grid.set(index, EMPTY);
            if solver.count_solutions(&grid, 2) > 1 {
                // Removal opened a second solution: put the value back and
                // spend one failed attempt.
                grid.set(index, removed);
                budget -= 1;
                trace!(index, budget, "removal rejected, uniqueness lost");
            }
        }

        debug!(%difficulty, givens = grid.filled_count(), "generated puzzle");
        grid
    }

    /// Depth-first fill in index order, trying digits in a fresh shuffled
    /// order at every cell and backtracking on dead ends.
    fn fill(&mut self, grid: &mut Grid) -> bool {
        let mut frames: Vec<FillFrame> = Vec::with_capacity(CELLS);
        'descend: loop {
            let Some(index) = grid.first_empty() else {
                return true;
            };
            let mut order = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
            self.shuffle(&mut order);
            frames.push(FillFrame {
                index,
                order,
                next: 0,
            });
            loop {
                let Some(frame) = frames.last_mut() else {
                    return false;
                };
                let pos = Position::from_index(frame.index);
                while frame.next < frame.order.len() {
                    let value = frame.order[frame.next];
                    frame.next += 1;
                    if grid.permits(pos, value) {
                        grid.set(frame.index, value);
                        continue 'descend;
                    }
                }
                grid.set(frame.index, EMPTY);
                frames.pop();
            }
        }
    }

    /// Fisher-Yates with the generator's own random source.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// One open cell of the fill search and the digit order it is working
/// through.
struct FillFrame {
    index: usize,
    order: [u8; 9],
    next: usize,
}

/// Small PCG-style generator, kept in-crate so the engine needs nothing
/// beyond OS entropy for seeding.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        if getrandom::getrandom(&mut seed_bytes).is_err() {
            // Counter fallback keeps distinct generators distinct when the
            // OS source is unavailable.
            static FALLBACK: AtomicU64 = AtomicU64::new(0x9e37_79b9_7f4a_7c15);
            let seed = FALLBACK.fetch_add(0x2545_f491_4f6c_dd1d, Ordering::Relaxed);
            return Self::with_seed(seed);
        }
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound
    }
}
