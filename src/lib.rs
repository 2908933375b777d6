//! Respan: atomic line-range replacement for text files.
//!
//! This library reads a text file into a terminator-preserving line buffer,
//! splices a replacement block over an inclusive 1-based line range, and
//! commits the result with an atomic write (temp file + fsync + rename), so
//! no reader of the target path ever observes a partially written file.

#![warn(missing_docs)]
// env_logger is used by src/main.rs (binary), not this library
#![expect(unused_crate_dependencies)]

pub mod cli;
pub mod document;
pub mod error;
pub mod replace;

/// Re-export common error types for convenience.
pub use error::{RespanError, Result};

/// Re-export the document model for convenience.
pub use document::{Document, LineRange};

/// Re-export the replacement operations for convenience.
pub use replace::{preview_replace, replace_lines, PreviewReport, ReplaceSummary, ReplacementBlock};

/// Respan version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
