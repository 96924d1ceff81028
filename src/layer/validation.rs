//! Well-formedness checks for reference layers and finished second layers

use std::fmt;

use bitvec::prelude::*;

use crate::io::configuration::{MAX_COLS, MAX_ROWS, MIN_BRICK_ID, MIN_COLS, MIN_ROWS};
use crate::layer::grid::{BrickId, EMPTY, Grid};

/// Accepted range of reference layer dimensions (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Smallest accepted row count
    pub min_rows: usize,
    /// Largest accepted row count
    pub max_rows: usize,
    /// Smallest accepted column count
    pub min_cols: usize,
    /// Largest accepted column count
    pub max_cols: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_rows: MIN_ROWS,
            max_rows: MAX_ROWS,
            min_cols: MIN_COLS,
            max_cols: MAX_COLS,
        }
    }
}

impl Limits {
    /// True when both dimensions fall inside the limits
    pub const fn accepts(&self, rows: usize, cols: usize) -> bool {
        rows >= self.min_rows
            && rows <= self.max_rows
            && cols >= self.min_cols
            && cols <= self.max_cols
    }
}

/// First reason a reference layer was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDefect {
    /// Row or column count is odd
    OddDimensions {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },
    /// Row or column count lies outside the configured limits
    DimensionsOutOfRange {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },
    /// Cell value is not a valid brick identifier for this grid size
    IdOutOfRange {
        /// Cell row
        row: usize,
        /// Cell column
        col: usize,
        /// Offending value
        value: BrickId,
        /// Largest valid identifier
        max: usize,
    },
    /// Cell has no orthogonal neighbour with the same identifier
    Unpaired {
        /// Cell row
        row: usize,
        /// Cell column
        col: usize,
        /// Identifier of the cell
        value: BrickId,
    },
    /// Identifier covers more than two cells
    Overused {
        /// Repeated identifier
        value: BrickId,
    },
}

impl fmt::Display for LayerDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddDimensions { rows, cols } => {
                write!(f, "dimensions {rows}x{cols} are not both even")
            }
            Self::DimensionsOutOfRange { rows, cols } => {
                write!(f, "dimensions {rows}x{cols} are outside the allowed range")
            }
            Self::IdOutOfRange {
                row,
                col,
                value,
                max,
            } => {
                write!(f, "brick {value} at ({row}, {col}) is outside 1..={max}")
            }
            Self::Unpaired { row, col, value } => {
                write!(f, "brick {value} at ({row}, {col}) has no adjacent half")
            }
            Self::Overused { value } => {
                write!(f, "brick {value} covers more than two cells")
            }
        }
    }
}

/// Check a reference layer against the default limits
pub fn validate(grid: &Grid) -> bool {
    validate_with(grid, &Limits::default())
}

/// Check a reference layer against explicit limits
pub fn validate_with(grid: &Grid, limits: &Limits) -> bool {
    check(grid, limits).is_ok()
}

/// Check a reference layer, reporting the first failing rule
///
/// Rules are applied in order: dimensions, identifier range, adjacency of
/// equal identifiers, at most two cells per identifier. Together they imply
/// each identifier covers exactly two adjacent cells.
///
/// # Errors
///
/// Returns the [`LayerDefect`] of the first rule the grid breaks
pub fn check(grid: &Grid, limits: &Limits) -> Result<(), LayerDefect> {
    let (rows, cols) = grid.dimensions();

    if rows % 2 != 0 || cols % 2 != 0 {
        return Err(LayerDefect::OddDimensions { rows, cols });
    }
    if !limits.accepts(rows, cols) {
        return Err(LayerDefect::DimensionsOutOfRange { rows, cols });
    }

    let max = grid.brick_count();
    for ((row, col), value) in grid.indexed_iter() {
        if !id_in_range(value, max) {
            return Err(LayerDefect::IdOutOfRange {
                row,
                col,
                value,
                max,
            });
        }
    }

    for ((row, col), value) in grid.indexed_iter() {
        let paired = grid
            .neighbors(row, col)
            .any(|(n_row, n_col)| grid.get(n_row, n_col) == Some(value));
        if !paired {
            return Err(LayerDefect::Unpaired { row, col, value });
        }
    }

    let mut seen_once = bitvec![0; max];
    let mut seen_twice = bitvec![0; max];
    for (_, value) in grid.indexed_iter() {
        let slot = id_slot(value);
        if seen_twice.get(slot).as_deref() == Some(&true) {
            return Err(LayerDefect::Overused { value });
        }
        if seen_once.get(slot).as_deref() == Some(&true) {
            seen_twice.set(slot, true);
        } else {
            seen_once.set(slot, true);
        }
    }

    Ok(())
}

/// Check that `second` is a complete second layer for `reference`
///
/// Every cell must be covered, every identifier `1..=rows*cols/2` must cover
/// exactly two adjacent cells, and those cells must belong to different
/// reference bricks.
pub fn is_solution(reference: &Grid, second: &Grid) -> bool {
    if reference.dimensions() != second.dimensions()
        || reference.is_empty()
        || reference.len() % 2 != 0
    {
        return false;
    }

    let max = second.brick_count();
    let mut cells: Vec<Option<(usize, usize)>> = vec![None; max];
    let mut complete = bitvec![0; max];

    for ((row, col), value) in second.indexed_iter() {
        if value == EMPTY || !id_in_range(value, max) {
            return false;
        }
        let slot = id_slot(value);
        if complete.get(slot).as_deref() == Some(&true) {
            return false;
        }

        let Some(first) = cells.get_mut(slot) else {
            return false;
        };
        match *first {
            None => *first = Some((row, col)),
            Some((first_row, first_col)) => {
                let adjacent = first_row.abs_diff(row) + first_col.abs_diff(col) == 1;
                if !adjacent || reference.get(first_row, first_col) == reference.get(row, col) {
                    return false;
                }
                complete.set(slot, true);
            }
        }
    }

    complete.all()
}

fn id_in_range(value: BrickId, max: usize) -> bool {
    value >= MIN_BRICK_ID && usize::try_from(value).is_ok_and(|id| id <= max)
}

// Callers have checked `id_in_range` first
fn id_slot(value: BrickId) -> usize {
    usize::try_from(value - MIN_BRICK_ID).unwrap_or(usize::MAX)
}
