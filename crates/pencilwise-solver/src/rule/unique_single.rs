//! Unique-in-house singles.

use pencilwise_core::{Digit, DigitGrid, DigitSet, House, Position};

use crate::PencilMarks;

/// Assigns digits that are provably placeable in only one cell of a house,
/// even when that cell still lists other candidates.
///
/// For every marked cell, the cell's row, column, and box are checked
/// independently: a candidate digit that no *other* marked cell of the
/// house contains is unique to this cell within that house. When the three
/// checks disagree about which digit is unique, the numerically largest
/// digit found wins. That tie-break has no mathematical justification, but
/// changing it changes solving behavior on grids where two houses disagree,
/// so it is kept as is. A self-consistent puzzle never produces such a
/// disagreement.
///
/// Returns `true` if any assignment happened. Like the forced-single rule,
/// this reads the marks as narrowed at the start of the pass.
pub fn assign_unique_singles(grid: &mut DigitGrid, marks: &PencilMarks) -> bool {
    let mut changed = false;
    for (pos, candidates) in marks.iter() {
        let unique = House::of(pos)
            .into_iter()
            .filter_map(|house| unique_in_house(marks, pos, candidates, house))
            .max();
        if let Some(digit) = unique {
            log::trace!("unique single {digit} at {pos}");
            grid.set(pos, digit);
            changed = true;
        }
    }
    changed
}

/// Returns the largest candidate of the cell that appears in no other
/// marked cell of the house.
fn unique_in_house(
    marks: &PencilMarks,
    pos: Position,
    candidates: DigitSet,
    house: House,
) -> Option<Digit> {
    let mut unique = None;
    for digit in candidates.iter() {
        let elsewhere = marks
            .house_marks(house)
            .any(|(other, other_candidates)| other != pos && other_candidates.contains(digit));
        if !elsewhere {
            // ascending iteration keeps the largest unique digit
            unique = Some(digit);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use pencilwise_core::Digit::*;

    use super::*;

    fn open_marks() -> PencilMarks {
        PencilMarks::compute(&DigitGrid::new())
    }

    fn without(digits: &[Digit]) -> DigitSet {
        let mut set = DigitSet::FULL;
        for &digit in digits {
            set.remove(digit);
        }
        set
    }

    #[test]
    fn test_assigns_digit_unique_to_row() {
        let mut grid = DigitGrid::new();
        let mut marks = open_marks();
        let target = Position::new(3, 2);
        // 6 appears nowhere else in row 2
        for x in 0..9 {
            if x != 3 {
                marks.set(Position::new(x, 2), without(&[D6]));
            }
        }
        // keep 6 plausible elsewhere so only the row check fires
        assert!(assign_unique_singles(&mut grid, &marks));
        assert_eq!(grid.get(target), Some(D6));
    }

    #[test]
    fn test_disagreeing_houses_take_largest_digit() {
        let mut grid = DigitGrid::new();
        let mut marks = open_marks();
        let target = Position::new(0, 0);
        marks.set(target, DigitSet::from_pair(D2, D7));
        // row: 2 is unique to the target, 7 appears elsewhere
        for x in 1..9 {
            marks.set(Position::new(x, 0), without(&[D2]));
        }
        // column: 7 is unique to the target, 2 appears elsewhere
        for y in 1..9 {
            marks.set(Position::new(0, y), without(&[D7]));
        }
        // box: neither digit is unique
        marks.set(Position::new(1, 1), DigitSet::from_pair(D2, D7));
        marks.set(Position::new(2, 2), DigitSet::from_pair(D2, D7));

        assert!(assign_unique_singles(&mut grid, &marks));
        // the row says 2, the column says 7: the larger digit wins
        assert_eq!(grid.get(target), Some(D7));
    }

    #[test]
    fn test_no_change_on_open_marks() {
        let mut grid = DigitGrid::new();
        let marks = open_marks();
        assert!(!assign_unique_singles(&mut grid, &marks));
        assert_eq!(grid, DigitGrid::new());
    }

    #[test]
    fn test_empty_candidate_set_yields_nothing() {
        let mut grid = DigitGrid::new();
        let mut marks = open_marks();
        marks.set(Position::new(4, 4), DigitSet::EMPTY);

        assert!(!assign_unique_singles(&mut grid, &marks));
        assert_eq!(grid.get(Position::new(4, 4)), None);
    }
}
