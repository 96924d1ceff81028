//! Tests for solver limits and rendering constants

#[cfg(test)]
mod tests {
    use brickwork::io::configuration::{
        DEFAULT_SEED, DIFFERENT_BRICKS_SEPARATOR, FAILURE_CACHE_CAPACITY, INPUT_EXTENSION,
        INVALID_INPUT_MESSAGE, MAX_COLS, MAX_ROWS, MIN_BRICK_ID, MIN_COLS, MIN_NUMBER_WIDTH,
        MIN_ROWS, NO_SOLUTION_MESSAGE, OUTPUT_SUFFIX, PROGRESS_REPORT_INTERVAL, RESULT_HEADER,
        SAME_BRICK_SEPARATOR,
    };

    // Tests dimension limits span 2 to 100 in both directions
    // Verified by changing the upper limit
    #[test]
    fn test_dimension_limits() {
        assert_eq!((MIN_ROWS, MAX_ROWS), (2, 100));
        assert_eq!((MIN_COLS, MAX_COLS), (2, 100));
        assert_eq!(MIN_BRICK_ID, 1);
    }

    // Tests limits are even so every accepted size can be tiled
    // Verified by setting an odd maximum
    #[test]
    fn test_limits_are_even() {
        for limit in [MIN_ROWS, MAX_ROWS, MIN_COLS, MAX_COLS] {
            assert_eq!(limit % 2, 0);
        }
    }

    // Tests rendering separators and padding
    // Verified by swapping the separators
    #[test]
    fn test_rendering_constants() {
        assert_eq!(DIFFERENT_BRICKS_SEPARATOR, '*');
        assert_eq!(SAME_BRICK_SEPARATOR, '-');
        assert_eq!(MIN_NUMBER_WIDTH, 2);
    }

    // Tests user-facing messages
    // Verified by editing message text
    #[test]
    fn test_messages() {
        assert_eq!(INVALID_INPUT_MESSAGE, "Invalid input!");
        assert_eq!(NO_SOLUTION_MESSAGE, "There is no solution!");
        assert_eq!(RESULT_HEADER, "The result is:");
    }

    // Tests file naming and search defaults
    // Verified by changing default values
    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(INPUT_EXTENSION, "txt");
        assert_eq!(OUTPUT_SUFFIX, "_result");
        assert!(PROGRESS_REPORT_INTERVAL > 0);
        assert!(FAILURE_CACHE_CAPACITY > 0);
    }
}
