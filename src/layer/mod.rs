//! Brick layers and their well-formedness rules
//!
//! This module contains layer-related functionality including:
//! - The grid type shared by reference and second layers
//! - Reference layer validation and solution verification
//! - Seeded generation of random reference layers

/// Random reference layer generation
pub mod generate;
/// Brick grid storage, directions and placements
pub mod grid;
/// Reference layer validation and second layer verification
pub mod validation;

pub use grid::{BrickId, Direction, EMPTY, Grid, Placement};
pub use validation::{LayerDefect, Limits, check, is_solution, validate, validate_with};
