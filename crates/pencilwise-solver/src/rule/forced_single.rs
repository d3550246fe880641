//! Forced singles.

use pencilwise_core::DigitGrid;

use crate::PencilMarks;

/// Assigns every cell whose candidate set has exactly one member.
///
/// Returns `true` if any assignment happened. The rule reads the marks as
/// they stood when the pass narrowed them; assignments made here do not
/// refresh the marks of other cells until the next pass recomputes them.
/// Cells with empty candidate sets contribute nothing.
pub fn assign_forced_singles(grid: &mut DigitGrid, marks: &PencilMarks) -> bool {
    let mut changed = false;
    for (pos, candidates) in marks.iter() {
        if let Some(digit) = candidates.as_single() {
            log::trace!("forced single {digit} at {pos}");
            grid.set(pos, digit);
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use pencilwise_core::{Digit, DigitSet, Position};

    use super::*;

    #[test]
    fn test_assigns_single_candidate() {
        let grid: DigitGrid = "
            123 456 78_
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();
        let mut grid = grid;
        let marks = PencilMarks::compute(&grid);

        assert!(assign_forced_singles(&mut grid, &marks));
        assert_eq!(grid.get(Position::new(8, 0)), Some(Digit::D9));
    }

    #[test]
    fn test_no_change_without_singles() {
        let mut grid = DigitGrid::new();
        let marks = PencilMarks::compute(&grid);

        assert!(!assign_forced_singles(&mut grid, &marks));
        assert_eq!(grid, DigitGrid::new());
    }

    #[test]
    fn test_empty_candidate_set_is_skipped() {
        let mut grid = DigitGrid::new();
        let mut marks = PencilMarks::compute(&grid);
        marks.set(Position::new(4, 4), DigitSet::EMPTY);

        assert!(!assign_forced_singles(&mut grid, &marks));
        assert_eq!(grid.get(Position::new(4, 4)), None);
    }
}
