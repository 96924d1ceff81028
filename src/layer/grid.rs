//! Rectangular brick grids shared by the reference and second layers
//!
//! Both layers are stored the same way: an `Array2` of brick identifiers where
//! two cells carrying the same identifier form one brick. The identifier
//! [`EMPTY`] marks a cell no brick covers yet.

use ndarray::Array2;

use crate::io::error::{BrickworkError, Result};

/// Identifier of the brick covering a cell
pub type BrickId = i32;

/// Identifier of an unoccupied cell
pub const EMPTY: BrickId = 0;

/// Orientation of a brick relative to its anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Anchor and the cell to its right
    Right,
    /// Anchor and the cell below it
    Down,
}

impl Direction {
    /// Both orientations in search order
    pub const ALL: [Self; 2] = [Self::Right, Self::Down];

    /// Row and column step from the anchor to the partner cell
    pub const fn offset(self) -> (usize, usize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

/// Candidate brick: an anchor cell plus the direction of its second half
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Row of the anchor cell
    pub row: usize,
    /// Column of the anchor cell
    pub col: usize,
    /// Where the second half lies
    pub direction: Direction,
}

impl Placement {
    /// Create a placement anchored at (row, col)
    pub const fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }

    /// Coordinates of the second cell covered by this placement
    pub const fn partner(&self) -> (usize, usize) {
        let (d_row, d_col) = self.direction.offset();
        (self.row + d_row, self.col + d_col)
    }

    /// Both covered cells, anchor first
    pub const fn cells(&self) -> [[usize; 2]; 2] {
        let (row, col) = self.partner();
        [[self.row, self.col], [row, col]]
    }
}

/// Grid of brick identifiers indexed by (row, col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<BrickId>,
}

impl Grid {
    /// Create a grid with every cell unoccupied
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), EMPTY),
        }
    }

    /// Wrap an existing array
    pub const fn from_array(cells: Array2<BrickId>) -> Self {
        Self { cells }
    }

    /// Build a grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not all have the same length
    pub fn from_rows<R: AsRef<[BrickId]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut flat = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(BrickworkError::Parse {
                    line: index + 1,
                    reason: format!("expected {cols} values, found {}", row.len()),
                });
            }
            flat.extend_from_slice(row);
        }

        Array2::from_shape_vec((rows.len(), cols), flat)
            .map(Self::from_array)
            .map_err(|error| BrickworkError::Parse {
                line: 0,
                reason: error.to_string(),
            })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of bricks a complete tiling of this grid holds
    pub fn brick_count(&self) -> usize {
        self.len() / 2
    }

    /// Identifier at (row, col), or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<BrickId> {
        self.cells.get([row, col]).copied()
    }

    /// True when (row, col) is inside the grid and unoccupied
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(EMPTY)
    }

    /// Overwrite the identifier at (row, col); ignored outside the grid
    pub fn set(&mut self, row: usize, col: usize, id: BrickId) {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = id;
        }
    }

    /// Write `id` into both cells of a placement
    pub fn place(&mut self, placement: &Placement, id: BrickId) {
        for [row, col] in placement.cells() {
            self.set(row, col, id);
        }
    }

    /// Clear both cells of a placement
    pub fn clear(&mut self, placement: &Placement) {
        self.place(placement, EMPTY);
    }

    /// In-bounds orthogonal neighbours of (row, col): up, down, left, right
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let (rows, cols) = self.dimensions();
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = (row + 1 < rows).then_some((row + 1, col));
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = (col + 1 < cols).then_some((row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// Iterate every cell as ((row, col), id) in row-major order
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), BrickId)> + '_ {
        self.cells.indexed_iter().map(|(index, &id)| (index, id))
    }

    /// Copy the grid out as row vectors
    pub fn to_rows(&self) -> Vec<Vec<BrickId>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}
