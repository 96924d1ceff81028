//! Solver limits, rendering constants and runtime configuration defaults

// Reference layer dimension limits
/// Smallest accepted number of rows
pub const MIN_ROWS: usize = 2;
/// Largest accepted number of rows
pub const MAX_ROWS: usize = 100;
/// Smallest accepted number of columns
pub const MIN_COLS: usize = 2;
/// Largest accepted number of columns
pub const MAX_COLS: usize = 100;

/// Smallest brick identifier a reference layer may use
pub const MIN_BRICK_ID: i32 = 1;

// ASCII rendering
/// Border drawn around and between different bricks
pub const DIFFERENT_BRICKS_SEPARATOR: char = '*';
/// Joint drawn between the two halves of one brick
pub const SAME_BRICK_SEPARATOR: char = '-';
/// Minimum printed width of a brick number (zero padded)
pub const MIN_NUMBER_WIDTH: usize = 2;

// PNG rendering
/// Side length of one cell in pixels
pub const CELL_PIXELS: u32 = 16;
/// Width of brick borders in pixels
pub const BORDER_PIXELS: u32 = 2;

// Search observation
/// Placements between two progress callbacks
pub const PROGRESS_REPORT_INTERVAL: u64 = 4096;

// Search memory
/// Most failed search states remembered by one search
pub const FAILURE_CACHE_CAPACITY: usize = 1 << 18;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible layer generation
pub const DEFAULT_SEED: u64 = 42;

/// Random flips applied per cell when generating a layer
pub const GENERATION_FLIPS_PER_CELL: usize = 4;

// Output settings
/// Extension of puzzle input files
pub const INPUT_EXTENSION: &str = "txt";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

// User-facing messages
/// Printed when the reference layer fails validation
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input!";
/// Printed when a puzzle token is not an integer
pub const NOT_A_NUMBER_MESSAGE: &str = "Part of the input contains something that is not a number!";
/// Printed when a search result fails verification against its reference
pub const UNVERIFIED_MESSAGE: &str = "The search produced a layer that does not fit the input!";
/// Printed when the search finds no second layer
pub const NO_SOLUTION_MESSAGE: &str = "There is no solution!";
/// Printed before a rendered solution
pub const RESULT_HEADER: &str = "The result is:";
