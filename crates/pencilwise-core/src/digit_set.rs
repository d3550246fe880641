//! Candidate digit sets for a single cell.
//!
//! This module provides [`DigitSet`], a bitset over the digits 1-9 used to
//! track which digits remain possible for an unknown cell ("pencil marks").
//!
//! # Examples
//!
//! ```
//! use pencilwise_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::new();
//! candidates.insert(Digit::D1);
//! candidates.insert(Digit::D5);
//! candidates.insert(Digit::D9);
//!
//! assert_eq!(candidates.len(), 3);
//! assert!(candidates.contains(Digit::D5));
//! assert!(!candidates.contains(Digit::D2));
//! ```

use std::fmt;

use crate::Digit;

/// A set of digits 1-9, represented as a 16-bit bitset.
///
/// Bits 0-8 represent digits 1-9 respectively, providing efficient storage
/// and fast membership tests. Iteration always yields digits in ascending
/// order, which the elimination rules rely on for their tie-break behavior.
///
/// # Examples
///
/// ```
/// use pencilwise_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly the two digits of a pair.
    #[must_use]
    pub fn from_pair(a: Digit, b: Digit) -> Self {
        let mut set = Self::new();
        set.insert(a);
        set.insert(b);
        set
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    ///
    /// An unknown cell with an empty candidate set is a valid state: the
    /// engine is stuck on that cell, nothing more.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the single digit in the set, or `None` if the set does not
    /// contain exactly one digit.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.len() != 1 {
            return None;
        }
        self.iter().next()
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        let value = index as u8 + 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl std::iter::FusedIterator for Iter {}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}
