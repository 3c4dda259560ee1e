//! Basic walk-through of the Sudoku engine API.

use sudoku_engine::{check, solve, validate, Difficulty, Generator, Solver};

fn main() {
    // Generate a puzzle
    println!("Generating a medium difficulty puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate(Difficulty::Medium);

    println!("Generated puzzle:");
    println!("{puzzle}");
    println!("Given cells: {}", puzzle.filled_count());
    println!("Empty cells: {}\n", puzzle.empty_count());

    let line = puzzle.to_line();
    println!("Compact form: {line}\n");

    // Confirm it has exactly one solution, then solve it
    let solver = Solver::new();
    println!("Unique solution: {}\n", solver.has_unique_solution(&puzzle));

    match solver.solve(&puzzle) {
        Ok(solution) => {
            println!("Solution:");
            println!("{solution}");
        }
        Err(err) => println!("No solution found ({err}) - this shouldn't happen for a generated puzzle!"),
    }

    // The string-level API, as the service layer calls it
    println!("--- String-level operations ---\n");
    let fixture = "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
    println!("validate: {:?}", validate(fixture));
    println!("check a1=7: {:?}", check(fixture, "a1", "7"));
    println!("check f8=9: {:?}", check(fixture, "f8", "9"));

    match solve(fixture) {
        Ok(solution) => println!("solve: {solution}"),
        Err(err) => println!("solve failed: {err}"),
    }
}
