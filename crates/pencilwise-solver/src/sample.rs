//! Bundled sample puzzles.
//!
//! These are fixtures, not part of the solving pipeline. How a puzzle is
//! picked (randomly or otherwise) and presented is the caller's concern.

/// Difficulty class of a bundled sample puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Solvable by forced and unique singles alone.
    Easy,
    /// Requires locked-pair narrowing to keep making progress.
    Medium,
    /// Near the edge of what pure deduction can reach.
    Hard,
    /// Usually leaves the engine stuck with unknown cells remaining.
    VeryHard,
}

/// A bundled sample puzzle: a difficulty tag and the external snapshot
/// format (9x9 integers, `0` meaning unknown).
#[derive(Debug, Clone, Copy)]
pub struct SamplePuzzle {
    /// Difficulty class.
    pub difficulty: Difficulty,
    /// Initial grid values, row-major, `0` for unknown cells.
    pub values: [[u8; 9]; 9],
}

/// The bundled sample puzzles.
pub const SAMPLES: [SamplePuzzle; 9] = [
    SamplePuzzle {
        difficulty: Difficulty::Easy,
        values: [
            [0, 0, 0, 9, 6, 7, 0, 0, 4],
            [3, 1, 0, 0, 0, 2, 8, 0, 0],
            [7, 0, 4, 0, 8, 0, 2, 5, 0],
            [9, 6, 3, 0, 0, 8, 0, 4, 0],
            [2, 0, 0, 7, 0, 9, 0, 0, 3],
            [0, 8, 0, 3, 0, 0, 1, 9, 5],
            [0, 4, 8, 0, 3, 0, 9, 0, 7],
            [0, 0, 2, 0, 0, 0, 0, 3, 1],
            [0, 0, 0, 2, 7, 5, 0, 0, 0],
        ],
    },
    SamplePuzzle {
        difficulty: Difficulty::Easy,
        values: [
            [0, 3, 0, 8, 0, 0, 0, 0, 0],
            [9, 0, 5, 6, 0, 0, 7, 0, 0],
            [0, 0, 1, 0, 9, 3, 2, 0, 0],
            [8, 0, 6, 5, 0, 0, 0, 0, 0],
            [0, 4, 0, 0, 3, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [4, 7, 2, 3, 0, 6, 9, 5, 0],
            [0, 1, 9, 4, 8, 7, 0, 6, 0],
            [3, 6, 8, 2, 5, 9, 0, 1, 0],
        ],
    },
    SamplePuzzle {
        difficulty: Difficulty::Easy,
        values: [
            [1, 5, 0, 0, 0, 0, 9, 2, 4],
            [0, 0, 4, 0, 0, 0, 7, 0, 6],
            [0, 0, 0, 0, 0, 0, 3, 8, 5],
            [0, 0, 0, 0, 0, 0, 1, 0, 0],
            [0, 2, 0, 3, 0, 0, 0, 6, 0],
            [0, 0, 6, 7, 0, 0, 4, 0, 3],
            [0, 0, 2, 4, 0, 0, 5, 3, 1],
            [0, 0, 7, 2, 0, 3, 6, 9, 8],
            [0, 8, 3, 0, 0, 1, 2, 4, 0],
        ],
    },
    SamplePuzzle {
        difficulty: Difficulty::Medium,
        values: [
            [0, 0, 5, 0, 0, 8, 0, 0, 0],
            [0, 0, 0, 0, 6, 0, 0, 0, 4],
            [0, 8, 1, 7, 0, 3, 0, 0, 5],
            [3, 9, 0, 0, 0, 0, 7, 0, 0],
            [0, 2, 0, 0, 0, 0, 0, 4, 0],
            [0, 0, 6, 0, 0, 0, 0, 9, 1],
            [9, 0, 0, 5, 0, 7, 4, 2, 0],
            [6, 0, 0, 0, 3, 0, 0, 0, 0],
            [0, 0, 0, 4, 0, 0, 8, 0, 0],
        ],
    },
    SamplePuzzle {
        difficulty: Difficulty::Medium,
        values: [
            [0, 0, 6, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 5, 9, 4, 0, 0],
            [0, 2, 0, 0, 0, 6, 0, 7, 8],
            [0, 0, 4, 0, 0, 0, 1, 9, 0],
            [5, 1, 0, 0, 0, 0, 0, 3, 0],
            [0, 3, 9, 0, 7, 0, 0, 0, 2],
            [3, 8, 1, 0, 0, 0, 0, 0, 9],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 9, 0, 0, 2, 0, 0, 6, 0],
        ],
    },
    SamplePuzzle {
        difficulty: Difficulty::Medium,
        values: [
            [0, 0, 0, 0, 3, 4, 7, 0, 0],
            [0, 0, 3, 2, 7, 9, 0, 8, 0],
            [0, 0, 0, 5, 0, 0, 0, 0, 0],
            [0, 0, 0, 3, 5, 0, 0, 7, 9],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 9, 0, 8, 1, 0, 0],
            [7, 0, 0, 0, 8, 0, 6, 9, 0],
            [8, 0, 2, 1, 0, 0, 0, 0, 0],
            [0, 0, 5, 0, 0, 0, 0, 4, 0],
        ],
    },
    SamplePuzzle {
        difficulty: Difficulty::Hard,
        values: [
            [4, 7, 0, 0, 2, 0, 0, 0, 8],
            [0, 0, 6, 0, 5, 3, 0, 0, 0],
            [0, 0, 0, 0, 7, 0, 0, 0, 6],
            [0, 0, 5, 0, 0, 0, 6, 1, 0],
            [0, 9, 0, 7, 0, 5, 0, 0, 0],
            [1, 0, 0, 3, 0, 0, 0, 0, 2],
            [0, 6, 0, 9, 0, 0, 0, 2, 0],
            [0, 0, 4, 0, 0, 7, 0, 6, 0],
            [5, 0, 0, 0, 8, 0, 4, 0, 0],
        ],
    },
    SamplePuzzle {
        difficulty: Difficulty::VeryHard,
        values: [
            [5, 0, 0, 3, 6, 0, 0, 0, 0],
            [0, 4, 0, 0, 0, 0, 8, 0, 0],
            [0, 0, 0, 0, 7, 0, 5, 0, 0],
            [0, 2, 0, 0, 5, 0, 0, 0, 7],
            [0, 3, 8, 0, 1, 0, 0, 0, 0],
            [0, 0, 0, 2, 0, 4, 0, 0, 3],
            [7, 0, 0, 0, 0, 0, 3, 9, 0],
            [6, 0, 0, 1, 0, 0, 0, 5, 0],
            [0, 0, 0, 0, 0, 6, 0, 1, 0],
        ],
    },
    SamplePuzzle {
        difficulty: Difficulty::VeryHard,
        values: [
            [0, 0, 0, 0, 0, 0, 0, 3, 0],
            [0, 8, 0, 0, 0, 9, 6, 0, 0],
            [3, 0, 0, 0, 7, 0, 0, 5, 0],
            [0, 0, 0, 4, 9, 0, 0, 0, 0],
            [0, 5, 3, 0, 0, 0, 0, 8, 1],
            [2, 0, 0, 1, 0, 0, 3, 0, 9],
            [8, 0, 0, 0, 0, 0, 0, 0, 7],
            [0, 9, 0, 0, 0, 0, 0, 1, 0],
            [0, 0, 7, 6, 0, 2, 0, 0, 0],
        ],
    },
];

#[cfg(test)]
mod tests {
    use pencilwise_core::{DigitGrid, House};

    use super::*;

    #[test]
    fn test_samples_are_well_formed() {
        for sample in &SAMPLES {
            let grid = DigitGrid::from_values(sample.values);
            assert!(!grid.is_filled());
            for house in House::ALL {
                assert!(!grid.house_has_duplicate(house));
            }
        }
    }

    #[test]
    fn test_difficulty_spread() {
        let easy = SAMPLES
            .iter()
            .filter(|s| s.difficulty == Difficulty::Easy)
            .count();
        assert_eq!(easy, 3);
    }
}
