//! Input/output operations and error handling

/// Command-line interface and puzzle orchestration
pub mod cli;
/// Limits, rendering constants and defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// PNG export of solved layers
pub mod image;
/// Plain-text puzzle parsing and writing
pub mod input;
/// Progress display for batch processing
pub mod progress;
/// ASCII art rendering of solved layers
pub mod render;
