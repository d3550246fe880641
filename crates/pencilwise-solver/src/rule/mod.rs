//! The three elimination rules.
//!
//! Each pass applies the rules once, in a fixed order:
//!
//! 1. [`locked_pair::narrow_locked_pairs`]: narrows pencil marks only,
//!    so it must run before the candidate-reading single finders.
//! 2. [`forced_single::assign_forced_singles`]: writes to the grid.
//! 3. [`unique_single::assign_unique_singles`]: writes to the grid.
//!
//! None of the rules can fail: they operate on whatever candidate and
//! grid state exists and simply produce zero or more assignments.

pub mod forced_single;
pub mod locked_pair;
pub mod unique_single;

pub use self::{
    forced_single::assign_forced_singles, locked_pair::narrow_locked_pairs,
    unique_single::assign_unique_singles,
};
