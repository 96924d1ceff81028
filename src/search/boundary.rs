use bitvec::prelude::*;

use crate::layer::{Direction, Grid, Placement};

/// Precomputed reference-brick boundaries for every anchor and direction
///
/// Bit `row * cols + col` of a direction's mask is set when a brick anchored
/// at (row, col) in that direction stays inside the grid and covers two
/// different reference bricks. Occupancy is not part of the mask.
#[derive(Clone, Debug)]
pub struct BoundaryMask {
    right: BitVec,
    down: BitVec,
    cols: usize,
}

impl BoundaryMask {
    /// Build the masks for a reference layer
    pub fn new(reference: &Grid) -> Self {
        let (rows, cols) = reference.dimensions();
        let mut right = bitvec![0; rows * cols];
        let mut down = bitvec![0; rows * cols];

        for ((row, col), id) in reference.indexed_iter() {
            let index = row * cols + col;
            if reference.get(row, col + 1).is_some_and(|other| other != id) {
                right.set(index, true);
            }
            if reference.get(row + 1, col).is_some_and(|other| other != id) {
                down.set(index, true);
            }
        }

        Self { right, down, cols }
    }

    /// True when the placement crosses a reference boundary
    pub fn crosses(&self, placement: &Placement) -> bool {
        let index = placement.row * self.cols + placement.col;
        let mask = match placement.direction {
            Direction::Right => &self.right,
            Direction::Down => &self.down,
        };
        placement.col < self.cols && mask.get(index).as_deref() == Some(&true)
    }
}

/// Full legality test: crosses a boundary and both cells are free in `second`
pub fn is_legal(mask: &BoundaryMask, second: &Grid, placement: &Placement) -> bool {
    let (row, col) = placement.partner();
    mask.crosses(placement)
        && second.is_free(placement.row, placement.col)
        && second.is_free(row, col)
}

/// True when the placement leaves a free neighbouring cell without any free
/// neighbour of its own across a reference boundary
///
/// Such a cell can never be covered, so the placement cannot lead to a
/// complete layer. Call after the placement has been written to `second`.
pub fn strands_neighbor(reference: &Grid, second: &Grid, placement: &Placement) -> bool {
    placement.cells().into_iter().any(|[row, col]| {
        second
            .neighbors(row, col)
            .any(|(n_row, n_col)| {
                second.is_free(n_row, n_col) && !has_partner(reference, second, n_row, n_col)
            })
    })
}

fn has_partner(reference: &Grid, second: &Grid, row: usize, col: usize) -> bool {
    let id = reference.get(row, col);
    second
        .neighbors(row, col)
        .any(|(n_row, n_col)| second.is_free(n_row, n_col) && reference.get(n_row, n_col) != id)
}
