//! Two-layer brickwork solver
//!
//! Given a grid already tiled by 1x2 bricks, find a second tiling of the same
//! grid in which every brick covers cells of two different bricks of the
//! first. The search is an exhaustive backtracking scan with a fixed branch
//! order, so the answer for a given layer is always the same.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Brick grids, validation and random layer generation
pub mod layer;
/// Backtracking search for the second layer
pub mod search;

pub use io::error::{BrickworkError, Result};
pub use layer::{Grid, validate};
pub use search::{Solver, solve};
