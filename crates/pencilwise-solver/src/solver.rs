use pencilwise_core::DigitGrid;

use crate::{PencilMarks, rule};

/// Summary of one [`DeductionSolver::solve`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    passes: usize,
}

impl SolveReport {
    /// Returns the number of passes that assigned at least one digit.
    ///
    /// The final pass that assigns nothing and terminates the loop is not
    /// counted. Every counted pass assigns at least one digit and there
    /// are at most 81 unknown cells, so this never exceeds 81.
    #[must_use]
    pub const fn passes(&self) -> usize {
        self.passes
    }
}

/// The deduction loop: repeated elimination passes to a fixed point.
///
/// The solver is a stateless per-call value; it carries nothing between
/// invocations and needs no shared instance. Identical input grids always
/// produce identical output, since no randomness participates in solving.
///
/// The solver never reports success or failure. It hands the grid back
/// when no rule can assign another digit; the caller decides the outcome
/// by scanning for leftover unknown cells, e.g. via
/// [`DigitGrid::is_filled`].
///
/// # Examples
///
/// ```
/// use pencilwise_core::DigitGrid;
/// use pencilwise_solver::DeductionSolver;
///
/// let mut grid: DigitGrid = "
///     ___ 967 __4
///     31_ __2 8__
///     7_4 _8_ 25_
///     963 __8 _4_
///     2__ 7_9 __3
///     _8_ 3__ 195
///     _48 _3_ 9_7
///     __2 ___ _31
///     ___ 275 ___
/// "
/// .parse()?;
///
/// let report = DeductionSolver::new().solve(&mut grid);
/// assert!(grid.is_filled());
/// assert!(report.passes() <= 81);
/// # Ok::<(), pencilwise_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeductionSolver;

impl DeductionSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        DeductionSolver
    }

    /// Runs one elimination pass.
    ///
    /// The pass rebuilds the pencil marks from the current grid, narrows
    /// them with the locked-pair rule, then applies the forced-single and
    /// unique-single rules against the grid. Both single rules read the
    /// same narrowed marks; each owns the marks exclusively while it runs.
    ///
    /// Returns `true` only if a grid assignment occurred. Locked-pair
    /// narrowing alone never counts toward continuation.
    pub fn pass(&self, grid: &mut DigitGrid) -> bool {
        let mut marks = PencilMarks::compute(grid);
        rule::narrow_locked_pairs(&mut marks);
        let forced = rule::assign_forced_singles(grid, &marks);
        let unique = rule::assign_unique_singles(grid, &marks);
        forced || unique
    }

    /// Runs passes until a pass assigns no digit, then returns.
    ///
    /// Terminal outcomes: the grid has no unknown cells left (success), or
    /// unknown cells remain and no rule can make progress (stuck). Either
    /// way the loop halts within at most 81 passes; no iteration cap or
    /// timeout is needed.
    pub fn solve(&self, grid: &mut DigitGrid) -> SolveReport {
        let mut passes = 0;
        while self.pass(grid) {
            passes += 1;
            log::debug!(
                "pass {passes}: {} unknown cells remain",
                grid.unknown_count()
            );
        }
        log::debug!(
            "fixed point after {passes} passes, {} unknown cells",
            grid.unknown_count()
        );
        SolveReport { passes }
    }

    /// Solves a copy of the grid and returns it, leaving the input
    /// untouched. Convenience over [`solve`](Self::solve) for callers
    /// holding an immutable snapshot.
    #[must_use]
    pub fn solve_copy(&self, grid: &DigitGrid) -> DigitGrid {
        let mut copy = *grid;
        let _ = self.solve(&mut copy);
        copy
    }
}
