//! Per-pass candidate tracking ("pencil marks").

use pencilwise_core::{Digit, DigitGrid, DigitSet, House, Position};

/// The candidate digits of every unknown cell, for one solving pass.
///
/// Pencil marks are rebuilt from scratch at the start of every pass and
/// never persisted across passes. Every unknown cell gets an entry, even
/// when the entry is the empty set: an empty candidate set means the
/// engine is stuck on that cell, not that the computation failed.
///
/// # Examples
///
/// ```
/// use pencilwise_core::{Digit, DigitGrid, Position};
/// use pencilwise_solver::PencilMarks;
///
/// let grid: DigitGrid = "
///     123 456 78_
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()?;
///
/// let marks = PencilMarks::compute(&grid);
/// let candidates = marks.get(Position::new(8, 0)).unwrap();
/// assert_eq!(candidates.as_single(), Some(Digit::D9));
/// # Ok::<(), pencilwise_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PencilMarks {
    cells: [Option<DigitSet>; 81],
}

impl PencilMarks {
    /// Computes the pencil marks for every unknown cell of a grid.
    ///
    /// For each unknown cell, each digit 1-9 is trial-assigned on a
    /// scratch copy of the grid; a digit that creates no duplicate in the
    /// cell's row, column, or box is a valid candidate. This is a total
    /// function: bounded work, no failure modes, and the real grid is
    /// never mutated.
    #[must_use]
    pub fn compute(grid: &DigitGrid) -> Self {
        let mut cells = [None; 81];
        for pos in grid.unknown_positions() {
            let mut candidates = DigitSet::new();
            let mut scratch = *grid;
            for digit in Digit::ALL {
                scratch.set(pos, digit);
                let clean = House::of(pos)
                    .iter()
                    .all(|&house| !scratch.house_has_duplicate(house));
                if clean {
                    candidates.insert(digit);
                }
            }
            cells[pos.index()] = Some(candidates);
        }
        Self { cells }
    }

    /// Returns the candidate set of a cell, or `None` if the cell holds a
    /// digit and therefore has no marks.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<DigitSet> {
        self.cells[pos.index()]
    }

    /// Replaces the candidate set of a cell, discarding whatever the cell
    /// held before.
    pub const fn set(&mut self, pos: Position, candidates: DigitSet) {
        self.cells[pos.index()] = Some(candidates);
    }

    /// Returns an iterator over `(position, candidates)` for every marked
    /// cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, DigitSet)> + '_ {
        Position::all().filter_map(|pos| self.get(pos).map(|set| (pos, set)))
    }

    /// Returns an iterator over `(position, candidates)` for the marked
    /// cells of one house, in unit order.
    pub fn house_marks(&self, house: House) -> impl Iterator<Item = (Position, DigitSet)> + '_ {
        house
            .positions()
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|set| (pos, set)))
    }
}
