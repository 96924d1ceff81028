//! PNG export of a second layer with per-brick colours and borders

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{BORDER_PIXELS, CELL_PIXELS};
use crate::io::error::{BrickworkError, Result, WithPath};
use crate::layer::{BrickId, Grid};

/// Colour of brick borders
pub const BORDER_COLOR: [u8; 4] = [32, 32, 32, 255];

/// Fill colours cycled through by brick identifier
pub const PALETTE: [[u8; 4]; 8] = [
    [230, 159, 0, 255],
    [86, 180, 233, 255],
    [0, 158, 115, 255],
    [240, 228, 66, 255],
    [0, 114, 178, 255],
    [213, 94, 0, 255],
    [204, 121, 167, 255],
    [170, 170, 170, 255],
];

/// Fill colour used for a brick
pub fn brick_color(id: BrickId) -> [u8; 4] {
    let index = usize::try_from(id.unsigned_abs()).unwrap_or(0) % PALETTE.len();
    PALETTE.get(index).copied().unwrap_or(BORDER_COLOR)
}

/// Draw a layer, one [`CELL_PIXELS`] square per cell
///
/// A border is drawn along every cell edge that separates two different
/// bricks or lies on the outside of the grid.
pub fn render_image(grid: &Grid) -> RgbaImage {
    let (rows, cols) = grid.dimensions();
    let width = cols as u32 * CELL_PIXELS;
    let height = rows as u32 * CELL_PIXELS;

    RgbaImage::from_fn(width, height, |x, y| {
        let row = (y / CELL_PIXELS) as usize;
        let col = (x / CELL_PIXELS) as usize;
        let (cell_x, cell_y) = (x % CELL_PIXELS, y % CELL_PIXELS);
        let id = grid.get(row, col).unwrap_or_default();

        let differs = |neighbor: Option<(usize, usize)>| {
            neighbor.is_none_or(|(n_row, n_col)| grid.get(n_row, n_col) != Some(id))
        };

        let on_border = (cell_y < BORDER_PIXELS && differs(row.checked_sub(1).map(|r| (r, col))))
            || (cell_y >= CELL_PIXELS - BORDER_PIXELS && differs(Some((row + 1, col))))
            || (cell_x < BORDER_PIXELS && differs(col.checked_sub(1).map(|c| (row, c))))
            || (cell_x >= CELL_PIXELS - BORDER_PIXELS && differs(Some((row, col + 1))));

        Rgba(if on_border {
            BORDER_COLOR
        } else {
            brick_color(id)
        })
    })
}

/// Export a layer as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layer_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    if grid.is_empty() {
        return Err(crate::io::error::invalid_parameter(
            "grid",
            &format!("{}x{}", grid.rows(), grid.cols()),
            &"cannot render an empty grid",
        ));
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    render_image(grid)
        .save(output_path)
        .map_err(|source| BrickworkError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
