//! The 27 houses (rows, columns, boxes) of the board.

use crate::Position;

/// A sudoku house: a row, a column, or a 3x3 box.
///
/// Each of the 27 houses groups 9 cells that must together contain the
/// digits 1-9 exactly once. Houses are the scope of every elimination
/// check the engine performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y = 0;
        while y < 9 {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x = 0;
        while x < 9 {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut index = 0;
        while index < 9 {
            boxes[index as usize] = Self::Box { index };
            index += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Returns the three houses containing a position, in row, column,
    /// box order.
    ///
    /// The elimination rules check a cell's houses in exactly this order.
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the 9 positions of this house in unit order: left to right
    /// for rows, top to bottom for columns, row-major within a box.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        let mut i = 0;
        while i < 9 {
            positions[i as usize] = self.position_from_cell_index(i);
            i += 1;
        }
        positions
    }

    /// Returns `true` if the house contains the position.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            House::Row { y } => pos.y() == y,
            House::Column { x } => pos.x() == x,
            House::Box { index } => pos.box_index() == index,
        }
    }
}
