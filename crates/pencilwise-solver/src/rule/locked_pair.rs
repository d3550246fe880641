//! Locked-pair narrowing.

use pencilwise_core::{Digit, DigitSet, House, Position};
use tinyvec::ArrayVec;

use crate::PencilMarks;

/// Two cells of one house locked to the same two-digit combo.
///
/// Findings are produced and consumed within a single pass; they are never
/// stored across passes.
#[derive(Debug, Clone, Copy, Default)]
struct Finding {
    first: Position,
    second: Position,
    pair: DigitSet,
}

/// Narrows the pencil marks of every locked pair found in the grid.
///
/// This is a deliberately restricted form of the classical naked-pair
/// rule. For a cell C, every unordered two-digit combo of C's candidates
/// is searched for in C's row, column, and box, in that order:
///
/// - Some other cell of the house holding exactly one of the two digits
///   is an exclusivity conflict; the combo is abandoned for that house.
/// - Exactly one other cell holding both digits makes that cell C's
///   partner: both cells' candidate sets are replaced by precisely the
///   combo, discarding any other candidates they held.
/// - More than one such cell is ambiguous and rejects the combo.
///
/// The first house that yields a partner for a cell wins; the remaining
/// houses are not searched. The narrowing touches only the two paired
/// cells and never strips the pair digits from the rest of the house.
/// That limitation bounds the engine's solving power intentionally;
/// completing it into a full naked-pair elimination would change which
/// puzzles the engine can solve.
///
/// All findings are collected against the pre-narrowing marks and applied
/// afterwards, so no finding observes another finding's narrowing within
/// the same pass.
pub fn narrow_locked_pairs(marks: &mut PencilMarks) {
    let mut findings: ArrayVec<[Finding; 81]> = ArrayVec::new();
    for (pos, candidates) in marks.iter() {
        if let Some(finding) = find_pair_for_cell(marks, pos, candidates) {
            findings.push(finding);
        }
    }
    for finding in findings {
        log::trace!(
            "locked pair {:?} at {} / {}",
            finding.pair,
            finding.first,
            finding.second
        );
        marks.set(finding.first, finding.pair);
        marks.set(finding.second, finding.pair);
    }
}

/// Searches for a partner for one cell, trying combos in lexicographic
/// order and, for each combo, the cell's houses in row, column, box
/// order. The search stops at the first house that yields exactly one
/// qualifying partner; remaining houses and combos are not tried.
fn find_pair_for_cell(
    marks: &PencilMarks,
    pos: Position,
    candidates: DigitSet,
) -> Option<Finding> {
    for (i, a) in candidates.iter().enumerate() {
        for b in candidates.iter().skip(i + 1) {
            for house in House::of(pos) {
                if let Some(partner) = find_partner(marks, pos, house, a, b) {
                    return Some(Finding {
                        first: pos,
                        second: partner,
                        pair: DigitSet::from_pair(a, b),
                    });
                }
            }
        }
    }
    None
}

/// Scans the other cells of a house for exactly one cell containing both
/// combo digits, with no cell containing exactly one of them.
fn find_partner(
    marks: &PencilMarks,
    pos: Position,
    house: House,
    a: Digit,
    b: Digit,
) -> Option<Position> {
    let mut partner = None;
    for (other, other_candidates) in marks.house_marks(house) {
        if other == pos {
            continue;
        }
        let has_a = other_candidates.contains(a);
        let has_b = other_candidates.contains(b);
        if has_a != has_b {
            // Exclusivity conflict: one of the digits stands alone in
            // another cell, so the combo is invalid for this house.
            return None;
        }
        if has_a && has_b {
            if partner.is_some() {
                // Ambiguous: more than one possible partner.
                return None;
            }
            partner = Some(other);
        }
    }
    partner
}
