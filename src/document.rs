//! Terminator-preserving document model.
//!
//! A [`Document`] holds the target file as an ordered sequence of lines,
//! each line keeping whatever terminator it had on disk; the final line may
//! lack one. A line ends at `\n`, so a `\r\n` pair travels with its line,
//! and a lone `\r` is not a terminator.

use crate::error::{RespanError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Inclusive 1-based line range to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// First line to replace (1-based, inclusive).
    pub start: usize,
    /// Last line to replace (1-based, inclusive).
    pub end: usize,
}

impl LineRange {
    /// Create a new range.
    ///
    /// Bounds are checked against a concrete document at splice time, not
    /// here, so that the error can report the document's actual line count.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A text file loaded as terminator-preserving lines.
///
/// Constructed fresh from disk on every invocation; there is no cross-call
/// caching.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    /// Read a document from disk.
    ///
    /// The whole file is loaded into memory and split into lines that keep
    /// their original terminators.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RespanError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: split_keep_ends(&text),
        })
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Borrow the lines for inspection.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Validate `range` against this document.
    ///
    /// Fails with [`RespanError::OutOfRange`] when `start < 1`,
    /// `end < start`, or `end` exceeds the line count.
    pub fn check_range(&self, range: LineRange) -> Result<()> {
        if range.start < 1 || range.end < range.start || range.end > self.lines.len() {
            return Err(RespanError::OutOfRange {
                file: self.path.clone(),
                start: range.start,
                end: range.end,
                line_count: self.lines.len(),
            });
        }
        Ok(())
    }

    /// Remove the closed interval covered by `range` and insert
    /// `replacement` lines in its place.
    ///
    /// Lines before `start` and after `end` keep their relative order and
    /// their bytes.
    pub fn splice(&mut self, range: LineRange, replacement: &[String]) -> Result<()> {
        self.check_range(range)?;
        // 1-based inclusive -> 0-based half-open
        self.lines
            .splice(range.start - 1..range.end, replacement.iter().cloned());
        Ok(())
    }

    /// Serialize the document back to a single byte buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.concat().into_bytes()
    }
}

/// Split text into lines, each keeping its trailing `\n` (and any `\r`
/// directly before it). The final element may lack a terminator.
fn split_keep_ends(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}
