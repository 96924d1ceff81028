//! Error types and context management for puzzle processing

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all operational failures
///
/// A rejected reference layer or an unsolvable puzzle are normal outcomes
/// and never surface here.
#[derive(Debug)]
pub enum BrickworkError {
    /// Puzzle text could not be read as a grid of integers
    Parse {
        /// 1-based input line, 0 when no single line is at fault
        line: usize,
        /// Description of what was wrong
        reason: String,
    },

    /// Puzzle text holds a token that is not an integer
    NotANumber {
        /// 1-based input line
        line: usize,
        /// Offending token
        token: String,
        /// Reason reported by the integer parser
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for BrickworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line: 0, reason } => {
                write!(f, "Malformed input: {reason}")
            }
            Self::Parse { line, reason } => {
                write!(f, "Malformed input on line {line}: {reason}")
            }
            Self::NotANumber {
                line,
                token,
                reason,
            } => {
                write!(
                    f,
                    "Malformed input on line {line}: '{token}' is not a number: {reason}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for BrickworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, BrickworkError>;

/// Attaches the path and operation to failed file system calls
pub trait WithPath<T> {
    /// Convert an I/O failure into [`BrickworkError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| BrickworkError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for BrickworkError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BrickworkError {
    BrickworkError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parse error for a given input line
pub fn parse_error(line: usize, reason: &impl ToString) -> BrickworkError {
    BrickworkError::Parse {
        line,
        reason: reason.to_string(),
    }
}

/// Create an error for a target path that cannot be processed
pub fn io_error(path: &Path, msg: &str) -> BrickworkError {
    BrickworkError::InvalidParameter {
        parameter: "target",
        value: path.display().to_string(),
        reason: msg.to_string(),
    }
}
