//! Plain-text puzzle format
//!
//! The first non-blank line holds the row and column counts; each following
//! non-blank line holds one row of whitespace separated brick identifiers.
//!
//! ```text
//! 2 4
//! 1 1 2 2
//! 3 3 4 4
//! ```

use std::fmt::{Display, Write as _};
use std::path::Path;
use std::str::FromStr;

use crate::io::error::{BrickworkError, Result, WithPath, parse_error};
use crate::layer::{BrickId, Grid};

/// Parse puzzle text into a reference grid
///
/// Only the shape of the text is checked here; whether the grid is a valid
/// reference layer is decided by [`validate`](crate::layer::validate).
///
/// # Errors
///
/// Returns [`BrickworkError::NotANumber`] if a token is not an integer, and
/// [`BrickworkError::Parse`] if the dimension line or a row is missing, a row
/// has the wrong number of values, or text follows the last row
pub fn parse_layer(text: &str) -> Result<Grid> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(parse_error(0, &"input is empty"));
    };
    let dimensions: Vec<usize> = parse_tokens(header, header_line)?;
    let [rows, cols] = dimensions.as_slice() else {
        return Err(parse_error(
            header_line,
            &format!("expected 2 dimensions, found {}", dimensions.len()),
        ));
    };

    let mut grid_rows: Vec<Vec<BrickId>> = Vec::new();
    for _ in 0..*rows {
        let Some((line_number, line)) = lines.next() else {
            return Err(parse_error(
                0,
                &format!("expected {rows} rows, found {}", grid_rows.len()),
            ));
        };
        let values: Vec<BrickId> = parse_tokens(line, line_number)?;
        if values.len() != *cols {
            return Err(parse_error(
                line_number,
                &format!("expected {cols} values, found {}", values.len()),
            ));
        }
        grid_rows.push(values);
    }

    if let Some((line_number, _)) = lines.next() {
        return Err(parse_error(line_number, &"unexpected data after the last row"));
    }

    if grid_rows.is_empty() {
        return Ok(Grid::empty(0, *cols));
    }
    Grid::from_rows(&grid_rows)
}

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse
pub fn read_layer(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).with_path(path, "read puzzle")?;
    parse_layer(&text)
}

/// Write a grid in the puzzle format accepted by [`parse_layer`]
pub fn to_input_text(grid: &Grid) -> String {
    let mut text = format!("{} {}\n", grid.rows(), grid.cols());
    for row in grid.to_rows() {
        let line = row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(text, "{line}");
    }
    text
}

fn parse_tokens<T>(line: &str, line_number: usize) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    line.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|error: T::Err| BrickworkError::NotANumber {
                    line: line_number,
                    token: token.to_string(),
                    reason: error.to_string(),
                })
        })
        .collect()
}
