//! End-to-end coverage of the four string-level operations, using the
//! service's fixture puzzles.

use sudoku_engine::{
    check, generate, solve, validate, Conflict, Difficulty, Error, Generator, Grid, Solver,
};

const PUZZLE: &str =
    "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
const SOLUTION: &str =
    "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

#[test]
fn validate_then_solve() {
    assert!(validate(PUZZLE).is_ok());
    assert_eq!(solve(PUZZLE).unwrap(), SOLUTION);
}

#[test]
fn solve_rejects_what_validate_rejects() {
    let cases = [
        (&PUZZLE[..80], Error::InvalidLength),
        ("not a puzzle", Error::InvalidCharacter),
    ];
    for (input, expected) in cases {
        assert_eq!(validate(input), Err(expected));
        assert_eq!(solve(input), Err(expected));
    }
}

#[test]
fn unsolvable_inputs_report_the_right_kind() {
    // A doubled given conflicts before any search runs.
    let mut conflicted = String::from("1");
    conflicted.push_str(&PUZZLE[1..]);
    assert_eq!(solve(&conflicted), Err(Error::UnsolvableGiven));

    // Consistent givens that admit no completion exhaust the search.
    let dead = format!("12345678.{}......9..{}", ".".repeat(9), ".".repeat(54));
    assert!(validate(&dead).is_ok());
    assert_eq!(solve(&dead), Err(Error::NoSolution));
}

#[test]
fn check_reports_the_documented_scenarios() {
    let valid = check(PUZZLE, "a1", "7").unwrap();
    assert!(valid.valid);

    let one = check(PUZZLE, "d2", "5").unwrap();
    assert_eq!(one.conflicts.len(), 1);

    let all = check(PUZZLE, "f8", "9").unwrap();
    assert_eq!(
        all.conflicts,
        vec![Conflict::Row, Conflict::Column, Conflict::Region]
    );
}

#[test]
fn check_serializes_to_the_wire_shape() {
    let placement = check(PUZZLE, "f8", "9").unwrap();
    let json = serde_json::to_value(&placement).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "valid": false,
            "conflicts": ["row", "column", "region"],
        })
    );
}

#[test]
fn generated_puzzles_pass_back_through_the_engine() {
    for &difficulty in Difficulty::all_levels() {
        let puzzle = generate(difficulty);
        assert!(validate(&puzzle).is_ok());

        let grid = Grid::from_string(&puzzle).unwrap();
        assert!(Solver::new().has_unique_solution(&grid));

        let solution = solve(&puzzle).unwrap();
        assert!(Grid::from_string(&solution).unwrap().is_solved());
    }
}

#[test]
fn seeded_generation_round_trips_deterministically() {
    let a = Generator::with_seed(2024).generate(Difficulty::Hard);
    let b = Generator::with_seed(2024).generate(Difficulty::Hard);
    assert_eq!(a.to_line(), b.to_line());
    assert_eq!(solve(&a.to_line()).unwrap(), solve(&b.to_line()).unwrap());
}
