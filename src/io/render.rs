//! ASCII art rendering of a second layer
//!
//! Bricks are enclosed by [`DIFFERENT_BRICKS_SEPARATOR`] and the two halves
//! of the same brick are joined by [`SAME_BRICK_SEPARATOR`]:
//!
//! ```text
//! *******
//! *01*02*
//! *--*--*
//! *01*02*
//! *******
//! ```

use crate::io::configuration::{
    DIFFERENT_BRICKS_SEPARATOR, MIN_NUMBER_WIDTH, SAME_BRICK_SEPARATOR,
};
use crate::layer::Grid;

/// Render a layer as bordered ASCII art
///
/// Numbers are zero padded to a shared width so that columns line up for
/// any brick count.
pub fn render(grid: &Grid) -> String {
    let (rows, cols) = grid.dimensions();
    let width = grid
        .indexed_iter()
        .map(|(_, id)| id.to_string().len())
        .max()
        .unwrap_or(0)
        .max(MIN_NUMBER_WIDTH);

    let line_length = cols * (width + 1) + 1;
    let border = DIFFERENT_BRICKS_SEPARATOR.to_string().repeat(line_length);

    let mut lines = Vec::with_capacity(2 * rows + 1);
    lines.push(border.clone());
    for row in 0..rows {
        lines.push(number_line(grid, row, width));
        if row + 1 < rows {
            lines.push(separator_line(grid, row, width));
        }
    }
    lines.push(border);

    lines.join("\n")
}

fn number_line(grid: &Grid, row: usize, width: usize) -> String {
    let cols = grid.cols();
    let mut line = String::new();
    line.push(DIFFERENT_BRICKS_SEPARATOR);

    for col in 0..cols {
        let id = grid.get(row, col).unwrap_or_default();
        line.push_str(&format!("{id:0width$}"));
        if col + 1 < cols {
            line.push(joint(grid.get(row, col + 1) == Some(id)));
        }
    }

    line.push(DIFFERENT_BRICKS_SEPARATOR);
    line
}

// Row between `row` and `row + 1`
fn separator_line(grid: &Grid, row: usize, width: usize) -> String {
    let cols = grid.cols();
    let mut line = String::new();
    line.push(DIFFERENT_BRICKS_SEPARATOR);

    for col in 0..cols {
        let same = grid.get(row, col) == grid.get(row + 1, col);
        line.push_str(&joint(same).to_string().repeat(width));
        if col + 1 < cols {
            line.push(DIFFERENT_BRICKS_SEPARATOR);
        }
    }

    line.push(DIFFERENT_BRICKS_SEPARATOR);
    line
}

const fn joint(same_brick: bool) -> char {
    if same_brick {
        SAME_BRICK_SEPARATOR
    } else {
        DIFFERENT_BRICKS_SEPARATOR
    }
}
