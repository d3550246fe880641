//! The 9x9 digit grid.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Digit, House, Position};

/// A 9x9 grid of digits, with `None` meaning an unknown cell.
///
/// This is the only structure the elimination rules mutate. No structural
/// invariant is enforced on construction: a malformed grid that already
/// repeats a digit within a house is accepted, and its only effect is that
/// candidate computation yields smaller (possibly empty) candidate sets,
/// which can only make the engine get stuck sooner.
///
/// # Examples
///
/// ```
/// use pencilwise_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(4, 4), Digit::D5);
/// assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates a grid with every cell unknown.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from a 9x9 matrix of integers, `0` denoting an
    /// unknown cell. This is the external snapshot format handed in by
    /// the caller.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_values(values: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for pos in Position::all() {
            let value = values[pos.y() as usize][pos.x() as usize];
            if value != 0 {
                grid.set(pos, Digit::from_value(value));
            }
        }
        grid
    }

    /// Returns the grid as a 9x9 matrix of integers, `0` denoting an
    /// unknown cell. Solved cells hold 1-9, unresolved cells stay `0`.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::all() {
            values[pos.y() as usize][pos.x() as usize] =
                self.get(pos).map_or(0, Digit::value);
        }
        values
    }

    /// Returns the digit at a position, or `None` if the cell is unknown.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the digit at a position.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Returns the 9 cell values of a house in unit order.
    #[must_use]
    pub fn house_digits(&self, house: House) -> [Option<Digit>; 9] {
        house.positions().map(|pos| self.get(pos))
    }

    /// Returns `true` if the house contains the same digit twice,
    /// ignoring unknown cells.
    #[must_use]
    pub fn house_has_duplicate(&self, house: House) -> bool {
        let mut seen = [false; 9];
        for digit in self.house_digits(house).into_iter().flatten() {
            let i = usize::from(digit.value() - 1);
            if seen[i] {
                return true;
            }
            seen[i] = true;
        }
        false
    }

    /// Returns an iterator over the positions of unknown cells in
    /// row-major order.
    pub fn unknown_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of unknown cells.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if no cell is unknown.
    ///
    /// This is the caller-side success scan: the engine itself never
    /// reports success or failure, it only hands back the grid.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the grid is filled and every house contains the
    /// digits 1-9 exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_filled() && House::ALL.iter().all(|&house| !self.house_has_duplicate(house))
    }
}

/// Error produced when parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contains a character that is not a digit, a placeholder,
    /// or whitespace.
    #[display("invalid character {_0:?} in grid")]
    InvalidCharacter(#[error(not(source))] char),
    /// The text does not describe exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    /// Parses a grid from text: digits 1-9 fill cells, `.`, `_`, or `0`
    /// mark unknown cells, whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let byte = c as u8;
                    Some(Digit::from_value(byte - b'0'))
                }
                _ => return Err(ParseGridError::InvalidCharacter(c)),
            };
            if count < 81
                && let Some(digit) = digit
            {
                grid.cells[count] = Some(digit);
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    /// Renders the grid in the same text format [`FromStr`] accepts, with
    /// cells grouped in threes per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
