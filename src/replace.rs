//! Line-range replacement with atomic commit.
//!
//! The spliced document is staged to a temporary file in the target's
//! directory, fsynced, then promoted over the original with a rename. An
//! observer of the target path sees either the old content or the new
//! content, never a partial write. Concurrent replacements of the same path
//! are last-rename-wins; callers needing multi-writer safety must add
//! external locking.

use crate::document::{Document, LineRange};
use crate::error::{RespanError, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replacement content, normalized to one terminator per line.
///
/// Lines supplied without a trailing terminator get exactly one `\n`
/// appended; lines that already end in one are left untouched, so supplying
/// pre-terminated lines never produces blank-line duplication.
#[derive(Debug, Clone, Default)]
pub struct ReplacementBlock {
    lines: Vec<String>,
}

impl ReplacementBlock {
    /// Build a block from a single string, splitting on line-terminator
    /// boundaries.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(normalize_line).collect(),
        }
    }

    /// Build a block from a sequence of line strings.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|line| normalize_line(line.as_ref()))
                .collect(),
        }
    }

    /// Borrow the normalized lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines the block inserts.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true when the block inserts nothing.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Append exactly one `\n` unless the line already ends with a terminator.
fn normalize_line(line: &str) -> String {
    if line.ends_with('\n') {
        line.to_string()
    } else {
        format!("{}\n", line)
    }
}

/// Result summary for a committed replacement.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceSummary {
    /// Path of the rewritten file.
    pub file: PathBuf,
    /// SHA-256 of the content before the splice.
    pub before_hash: String,
    /// SHA-256 of the content after the splice.
    pub after_hash: String,
    /// Number of lines removed by the splice.
    pub lines_removed: usize,
    /// Number of lines inserted by the splice.
    pub lines_added: usize,
}

/// Preview metadata describing a splice that has not been committed.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewReport {
    /// The file that would be rewritten.
    pub file: String,
    /// 1-based line number where the change begins.
    pub line_start: usize,
    /// 1-based line number where the change ends.
    pub line_end: usize,
    /// Number of lines added by the splice.
    pub lines_added: usize,
    /// Number of lines removed by the splice.
    pub lines_removed: usize,
    /// Number of bytes inserted.
    pub bytes_added: usize,
    /// Number of bytes removed.
    pub bytes_removed: usize,
}

/// Replace lines `range.start..=range.end` of `path` with `block`.
///
/// This function:
/// 1. Reads the file fully, preserving each line's terminator
/// 2. Validates the range against the file's line count
/// 3. Splices the normalized block over the range in memory
/// 4. Writes to a temp file in the target's directory, fsyncs, atomic rename
///
/// On any failure before the final rename the original file is untouched.
///
/// # Arguments
/// * `path` - Path to the file to rewrite
/// * `range` - Inclusive 1-based line range to remove
/// * `block` - Replacement lines spliced in at the range's position
///
/// # Returns
/// * `Ok(ReplaceSummary)` - SHA-256 hashes before/after plus line counts
/// * `Err(RespanError)` - Out-of-range request or underlying I/O failure
pub fn replace_lines(
    path: &Path,
    range: LineRange,
    block: &ReplacementBlock,
) -> Result<ReplaceSummary> {
    let mut doc = Document::read(path)?;
    let before_hash = compute_hash(&doc.to_bytes());

    doc.splice(range, block.lines())?;
    let lines_removed = range.end - range.start + 1;

    log::debug!(
        "replacing lines {}..={} in {} (-{} +{} lines)",
        range.start,
        range.end,
        path.display(),
        lines_removed,
        block.len()
    );

    let new_bytes = doc.to_bytes();
    let after_hash = compute_hash(&new_bytes);

    let temp_path = stage_temp(path, &new_bytes)?;
    promote(&temp_path, path)?;

    Ok(ReplaceSummary {
        file: path.to_path_buf(),
        before_hash,
        after_hash,
        lines_removed,
        lines_added: block.len(),
    })
}

/// Compute the effect of a replacement without writing anything.
pub fn preview_replace(
    path: &Path,
    range: LineRange,
    block: &ReplacementBlock,
) -> Result<PreviewReport> {
    let doc = Document::read(path)?;
    doc.check_range(range)?;

    let removed = &doc.lines()[range.start - 1..range.end];
    let bytes_removed = removed.iter().map(String::len).sum();
    let bytes_added = block.lines().iter().map(String::len).sum();

    Ok(PreviewReport {
        file: path.to_string_lossy().into_owned(),
        line_start: range.start,
        line_end: range.end,
        lines_added: block.len(),
        lines_removed: removed.len(),
        bytes_added,
        bytes_removed,
    })
}

/// Compute SHA-256 hash of file contents.
fn compute_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Write `content` to a staging file next to `target`.
///
/// The staging file lives in the target's directory so the later rename
/// stays on one filesystem.
fn stage_temp(target: &Path, content: &[u8]) -> Result<PathBuf> {
    let temp_path = temp_path_for(target)?;
    let mut temp_file = File::create(&temp_path).map_err(|e| RespanError::io(&temp_path, e))?;
    temp_file
        .write_all(content)
        .map_err(|e| RespanError::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| RespanError::io(&temp_path, e))?;
    Ok(temp_path)
}

/// Promote the staging file over the target with an atomic rename.
fn promote(temp_path: &Path, target: &Path) -> Result<()> {
    std::fs::rename(temp_path, target).map_err(|e| RespanError::io(target, e))
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let dir = target.parent().ok_or_else(|| {
        RespanError::io(
            target,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "target has no parent directory",
            ),
        )
    })?;
    let name = target.file_name().and_then(|n| n.to_str()).unwrap_or("tmp");
    Ok(dir.join(format!(".{}.respan.tmp", name)))
}
