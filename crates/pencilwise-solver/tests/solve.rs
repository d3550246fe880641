//! End-to-end solving behavior.

use pencilwise_core::{DigitGrid, House, Position};
use pencilwise_solver::{
    DeductionSolver,
    sample::{Difficulty, SAMPLES},
};
use proptest::prelude::*;

/// This puzzle has no forced single, unique single, or locked pair
/// anywhere in its opening position; cracking it needs branching search.
const NEEDS_SEARCH: [[u8; 9]; 9] = [
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [0, 0, 0, 0, 8, 0, 0, 0, 9],
    [7, 0, 0, 0, 0, 9, 5, 0, 0],
    [0, 1, 0, 4, 0, 0, 3, 0, 6],
    [0, 0, 0, 3, 7, 5, 0, 0, 0],
    [5, 0, 3, 0, 0, 6, 0, 4, 0],
    [0, 0, 4, 9, 0, 0, 0, 0, 5],
    [6, 0, 0, 0, 2, 0, 0, 0, 0],
    [0, 7, 0, 0, 0, 0, 4, 8, 0],
];

#[test]
fn test_easy_sample_solves_completely() {
    let mut grid = DigitGrid::from_values(SAMPLES[0].values);
    assert_eq!(grid.get(Position::new(3, 0)).map(u8::from), Some(9));

    let report = DeductionSolver::new().solve(&mut grid);

    assert!(grid.is_filled());
    assert!(report.passes() <= 81);
    // every house contains 1-9 exactly once
    for house in House::ALL {
        assert!(!grid.house_has_duplicate(house));
    }
    // the givens survived
    for pos in Position::all() {
        let given = SAMPLES[0].values[pos.y() as usize][pos.x() as usize];
        if given != 0 {
            assert_eq!(grid.get(pos).map(u8::from), Some(given));
        }
    }
}

#[test]
fn test_every_sample_halts_within_bounds() {
    for sample in &SAMPLES {
        let mut grid = DigitGrid::from_values(sample.values);
        let before = grid.unknown_count();

        let report = DeductionSolver::new().solve(&mut grid);

        assert!(report.passes() <= 81, "{:?}", sample.difficulty);
        assert!(grid.unknown_count() <= before);
        if grid.is_filled() {
            assert!(grid.is_solved(), "{:?}", sample.difficulty);
        }
    }
}

#[test]
fn test_easy_samples_solve() {
    for sample in SAMPLES.iter().filter(|s| s.difficulty == Difficulty::Easy) {
        let mut grid = DigitGrid::from_values(sample.values);
        DeductionSolver::new().solve(&mut grid);
        assert!(grid.is_solved());
    }
}

#[test]
fn test_search_puzzle_halts_stuck() {
    let mut grid = DigitGrid::from_values(NEEDS_SEARCH);
    let report = DeductionSolver::new().solve(&mut grid);

    assert!(report.passes() <= 81);
    assert!(grid.unknown_count() >= 1);
}

#[test]
fn test_solved_grid_is_a_fixed_point() {
    let mut grid = DigitGrid::from_values(SAMPLES[0].values);
    DeductionSolver::new().solve(&mut grid);
    assert!(grid.is_filled());

    let solved = grid;
    let report = DeductionSolver::new().solve(&mut grid);
    assert_eq!(report.passes(), 0);
    assert_eq!(grid, solved);
}

#[test]
fn test_determinism_on_samples() {
    for sample in &SAMPLES {
        let first = DeductionSolver::new().solve_copy(&DigitGrid::from_values(sample.values));
        let second = DeductionSolver::new().solve_copy(&DigitGrid::from_values(sample.values));
        assert_eq!(first, second);
    }
}

/// An arbitrary scattering of givens, not necessarily consistent.
fn sparse_grids() -> impl Strategy<Value = [[u8; 9]; 9]> {
    proptest::collection::vec((0usize..81, 1u8..=9), 0..=30).prop_map(|givens| {
        let mut values = [[0; 9]; 9];
        for (index, digit) in givens {
            values[index / 9][index % 9] = digit;
        }
        values
    })
}

proptest! {
    #[test]
    fn prop_solving_is_deterministic(values in sparse_grids()) {
        let solver = DeductionSolver::new();
        let first = solver.solve_copy(&DigitGrid::from_values(values));
        let second = solver.solve_copy(&DigitGrid::from_values(values));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_assigned_cells_are_never_reverted(values in sparse_grids()) {
        let input = DigitGrid::from_values(values);
        let output = DeductionSolver::new().solve_copy(&input);

        prop_assert!(output.unknown_count() <= input.unknown_count());
        for pos in Position::all() {
            if let Some(digit) = input.get(pos) {
                prop_assert_eq!(output.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn prop_contradictory_input_cannot_crash(values in sparse_grids()) {
        // Malformed grids (duplicates within a house) are accepted; they
        // only shrink candidate sets and make the engine stall earlier.
        let mut grid = DigitGrid::from_values(values);
        let report = DeductionSolver::new().solve(&mut grid);
        prop_assert!(report.passes() <= 81);
    }
}
