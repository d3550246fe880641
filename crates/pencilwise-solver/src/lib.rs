//! Pure-deduction sudoku solving.
//!
//! This crate implements a solver that fills a 9x9 grid using logical
//! deduction only: no guessing, no backtracking search. Each pass
//! rebuilds the pencil marks of every unknown cell from the grid
//! ([`PencilMarks`]), narrows them with the locked-pair rule, then assigns
//! forced and unique singles, until a pass assigns nothing
//! ([`DeductionSolver`]).
//!
//! Puzzles that require branching search are out of reach by design: the
//! solver halts at its fixed point and hands back the grid with the
//! remaining cells unknown. The caller decides success or failure by
//! scanning for leftover unknown cells.
//!
//! # Examples
//!
//! ```
//! use pencilwise_core::DigitGrid;
//! use pencilwise_solver::{DeductionSolver, sample};
//!
//! let mut grid = DigitGrid::from_values(sample::SAMPLES[0].values);
//! DeductionSolver::new().solve(&mut grid);
//! assert!(grid.is_filled());
//! ```

pub use self::{
    pencil_marks::PencilMarks,
    solver::{DeductionSolver, SolveReport},
};

mod pencil_marks;
pub mod rule;
pub mod sample;
mod solver;
