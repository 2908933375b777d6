//! Respan error types.
//!
//! All errors are typed and provide root cause information.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for respan operations.
#[derive(Error, Debug)]
pub enum RespanError {
    /// Requested line range falls outside the document.
    #[error(
        "line range {start}..={end} is out of bounds in {}: file has {line_count} line(s)",
        .file.display()
    )]
    OutOfRange {
        /// The file the range was applied to.
        file: PathBuf,
        /// Requested start line (1-based, inclusive).
        start: usize,
        /// Requested end line (1-based, inclusive).
        end: usize,
        /// Number of lines actually present in the file.
        line_count: usize,
    },

    /// I/O error during file operations.
    #[error("I/O error for path {}: {source}", .path.display())]
    Io {
        /// The file path that caused the I/O error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl RespanError {
    /// Attach the offending path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RespanError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable identifier for structured (JSON) error output.
    pub fn kind(&self) -> &'static str {
        match self {
            RespanError::OutOfRange { .. } => "OutOfRange",
            RespanError::Io { .. } => "Io",
        }
    }

    /// Path of the file involved, when known.
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            RespanError::OutOfRange { file, .. } => Some(file),
            RespanError::Io { path, .. } => Some(path),
        }
    }
}

/// Result type alias for respan operations.
pub type Result<T> = std::result::Result<T, RespanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_bounds_and_count() {
        let err = RespanError::OutOfRange {
            file: PathBuf::from("demo.txt"),
            start: 4,
            end: 4,
            line_count: 3,
        };
        let message = err.to_string();
        assert!(
            message.contains("4..=4"),
            "message should name the range: {}",
            message
        );
        assert!(
            message.contains("3 line(s)"),
            "message should name the line count: {}",
            message
        );
        assert!(
            message.contains("demo.txt"),
            "message should name the file: {}",
            message
        );
    }

    #[test]
    fn test_kind_identifiers_are_stable() {
        let oor = RespanError::OutOfRange {
            file: PathBuf::from("f"),
            start: 1,
            end: 1,
            line_count: 0,
        };
        assert_eq!(oor.kind(), "OutOfRange");

        let io = RespanError::io(
            "f",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(io.kind(), "Io");
    }
}
