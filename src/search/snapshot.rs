//! Copy-on-branch recursive search
//!
//! Every placement attempt works on its own copy of the second layer, so a
//! failed branch cannot disturb its siblings and no undo is needed. The
//! recursion goes one level deeper per scanned cell; prefer
//! [`BacktrackingSolver`](crate::search::BacktrackingSolver) for large grids.

use crate::layer::{BrickId, Direction, Grid, Placement};
use crate::search::boundary::{BoundaryMask, is_legal};
use crate::search::{Solver, has_tileable_shape};

/// Recursive solver that clones the layer for every placement it tries
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotSolver;

impl SnapshotSolver {
    /// Create a solver
    pub const fn new() -> Self {
        Self
    }
}

impl Solver for SnapshotSolver {
    fn solve(&self, reference: &Grid) -> Option<Grid> {
        if !has_tileable_shape(reference) {
            return None;
        }

        let (rows, cols) = reference.dimensions();
        let search = SnapshotSearch {
            mask: BoundaryMask::new(reference),
            rows,
            cols,
            target: reference.brick_count(),
        };
        search.descend(Grid::empty(rows, cols), 1, 0, 0)
    }
}

struct SnapshotSearch {
    mask: BoundaryMask,
    rows: usize,
    cols: usize,
    target: usize,
}

impl SnapshotSearch {
    fn descend(&self, second: Grid, counter: usize, row: usize, col: usize) -> Option<Grid> {
        let (row, col) = if col == self.cols {
            (row + 1, 0)
        } else {
            (row, col)
        };

        if row == self.rows {
            return (counter - 1 == self.target).then_some(second);
        }

        for direction in Direction::ALL {
            let placement = Placement::new(row, col, direction);
            if !is_legal(&self.mask, &second, &placement) {
                continue;
            }

            let mut branch = second.clone();
            branch.place(&placement, BrickId::try_from(counter).unwrap_or(BrickId::MAX));
            if let Some(found) = self.descend(branch, counter + 1, row, col + 1) {
                return Some(found);
            }
        }

        // Later anchors only reach right and down
        if second.is_free(row, col) {
            return None;
        }
        self.descend(second, counter, row, col + 1)
    }
}
