//! Seeded random reference layers
//!
//! Generation starts from a tiling of 2x2 blocks, each block holding two
//! parallel bricks of random orientation, then applies random flips: any
//! 2x2 window covered by two parallel bricks is re-tiled with the other
//! orientation. Flips keep the grid a valid domino tiling at every step.

use rand::Rng;

use crate::io::configuration::GENERATION_FLIPS_PER_CELL;
use crate::io::error::{Result, invalid_parameter};
use crate::layer::grid::{BrickId, EMPTY, Grid};

/// Generate a random valid reference layer of the given size
///
/// Identifiers are renumbered in row-major order of first appearance, so
/// the top-left brick is always 1.
///
/// # Errors
///
/// Returns an error if either dimension is zero or odd
pub fn random_layer<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    for (parameter, value) in [("rows", rows), ("cols", cols)] {
        if value == 0 || value % 2 != 0 {
            return Err(invalid_parameter(
                parameter,
                &value,
                &"must be a positive even number",
            ));
        }
    }

    let mut grid = block_tiling(rows, cols, rng);

    for _ in 0..rows * cols * GENERATION_FLIPS_PER_CELL {
        let row = rng.random_range(0..rows - 1);
        let col = rng.random_range(0..cols - 1);
        flip_window(&mut grid, row, col);
    }

    Ok(renumber(&grid))
}

fn block_tiling<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::empty(rows, cols);
    let mut next: BrickId = 1;

    for row in (0..rows).step_by(2) {
        for col in (0..cols).step_by(2) {
            let (first, second) = (next, next + 1);
            next += 2;
            if rng.random_bool(0.5) {
                grid.set(row, col, first);
                grid.set(row, col + 1, first);
                grid.set(row + 1, col, second);
                grid.set(row + 1, col + 1, second);
            } else {
                grid.set(row, col, first);
                grid.set(row + 1, col, first);
                grid.set(row, col + 1, second);
                grid.set(row + 1, col + 1, second);
            }
        }
    }

    grid
}

/// Rotate the two parallel bricks covering the window at (row, col)
///
/// Returns false and leaves the grid untouched when the window is not
/// covered by exactly two parallel bricks.
pub fn flip_window(grid: &mut Grid, row: usize, col: usize) -> bool {
    let (Some(top_left), Some(top_right), Some(bottom_left), Some(bottom_right)) = (
        grid.get(row, col),
        grid.get(row, col + 1),
        grid.get(row + 1, col),
        grid.get(row + 1, col + 1),
    ) else {
        return false;
    };

    if top_left == top_right && bottom_left == bottom_right && top_left != bottom_left {
        grid.set(row + 1, col, top_left);
        grid.set(row, col + 1, bottom_left);
        true
    } else if top_left == bottom_left && top_right == bottom_right && top_left != top_right {
        grid.set(row, col + 1, top_left);
        grid.set(row + 1, col, top_right);
        true
    } else {
        false
    }
}

fn renumber(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut mapping: Vec<BrickId> = vec![EMPTY; grid.brick_count() + 1];
    let mut renumbered = Grid::empty(rows, cols);
    let mut next: BrickId = 1;

    for ((row, col), id) in grid.indexed_iter() {
        let Some(slot) = usize::try_from(id).ok().and_then(|id| mapping.get_mut(id)) else {
            continue;
        };
        if *slot == EMPTY {
            *slot = next;
            next += 1;
        }
        renumbered.set(row, col, *slot);
    }

    renumbered
}
