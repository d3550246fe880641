//! Core data structures for the pencilwise deduction engine.
//!
//! This crate provides the fundamental types for representing a sudoku
//! board and its constraints:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Candidate digit sets ("pencil marks") for a single cell
//! - [`position`]: Structured (x, y) cell coordinates
//! - [`house`]: The 27 units (rows, columns, boxes) that scope every
//!   elimination check
//! - [`grid`]: The 9x9 digit grid, including the external integer
//!   snapshot format and a text format for tests
//!
//! # Examples
//!
//! ```
//! use pencilwise_core::{Digit, DigitGrid, House, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Digit::D5);
//!
//! let row = grid.house_digits(House::Row { y: 4 });
//! assert_eq!(row[4], Some(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};
