//! Second layer search
//!
//! Both solvers scan cells in row-major order and, at each cell, try a
//! rightward brick, then a downward brick, then move on without placing.
//! A brick is legal when both cells are free and belong to different
//! reference bricks. The first layer reached with every brick placed is
//! returned, so both solvers give identical answers.

/// Explicit-stack solver with undo on backtrack
pub mod backtrack;
/// Per-direction masks of reference-brick boundaries
pub mod boundary;
/// Memory of search states that cannot complete
pub mod cache;
/// Recursive copy-on-branch solver
pub mod snapshot;

pub use backtrack::{BacktrackingSolver, SearchStats};
pub use snapshot::SnapshotSolver;

use crate::layer::Grid;

/// Finds a second layer for a validated reference layer
pub trait Solver {
    /// Return a complete second layer, or `None` when none exists
    ///
    /// The reference layer is expected to have passed
    /// [`validate`](crate::layer::validate).
    fn solve(&self, reference: &Grid) -> Option<Grid>;
}

/// Solve with the default [`BacktrackingSolver`]
pub fn solve(reference: &Grid) -> Option<Grid> {
    BacktrackingSolver::new().solve(reference)
}

// Empty grids and odd cell counts can never be tiled
pub(crate) fn has_tileable_shape(reference: &Grid) -> bool {
    !reference.is_empty() && reference.len() % 2 == 0
}
