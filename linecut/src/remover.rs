//! Line-range removal against a file on disk.
//!
//! A removal is a single read, rewrite, write sequence:
//!
//! 1. [`Removal::load`] reads the whole file as UTF-8 and releases the handle.
//! 2. [`Removal::plan`] validates every range once, rewrites the buffer in
//!    memory and keeps the first and last line each range deletes, for
//!    diagnostics.
//! 3. [`PlannedRemoval::commit`] overwrites the file.
//!
//! Nothing is written unless every check passes. The file is not locked
//! between the read and the write, so a concurrent edit in that window is
//! lost.

use crate::error::{RemoveError, Result};
use crate::guard::Guards;
use crate::lines::LineBuffer;
use crate::range::LineRange;
use crate::rewriter::LineRangeRewriter;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads `path` fully as UTF-8 lines.
///
/// # Errors
///
/// [`RemoveError::FileNotFound`], [`RemoveError::Encoding`] or [`RemoveError::Io`].
pub fn read_lines(path: &Path) -> Result<LineBuffer> {
    let bytes = fs::read(path).map_err(|e| RemoveError::from_io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|source| RemoveError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LineBuffer::parse(&text))
}

/// Overwrites `path` with `lines`, terminators unchanged.
///
/// # Errors
///
/// [`RemoveError::Io`] if the file cannot be written.
pub fn write_lines(path: &Path, lines: &LineBuffer) -> Result<()> {
    fs::write(path, lines.to_string()).map_err(|e| RemoveError::from_io(path, e))
}

/// Removes `range` from the file at `path` and writes the result back.
///
/// ```no_run
/// use linecut::range::LineRange;
/// use linecut::remover::remove_lines;
/// use std::path::Path;
///
/// let report = remove_lines(Path::new("page.svelte"), LineRange::new(472, 658)?)?;
/// assert!(report.written);
/// # Ok::<(), linecut::RemoveError>(())
/// ```
///
/// # Errors
///
/// Any [`RemoveError`]; the file is unchanged on error.
pub fn remove_lines(path: &Path, range: LineRange) -> Result<RemovalReport> {
    let mut removal = Removal::load(path)?;
    removal.add(range, Guards::none());
    removal.commit(false)
}

/// The first and last line a range deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Boundary {
    /// Range being removed.
    #[serde(flatten)]
    pub range: LineRange,
    /// Text of line `start`, trailing whitespace trimmed.
    pub first_line: String,
    /// Text of line `end - 1`, trailing whitespace trimmed.
    pub last_line: String,
}

/// Outcome of a removal.
#[derive(Debug, Clone, Serialize)]
pub struct RemovalReport {
    /// File that was edited.
    pub path: PathBuf,
    /// Ranges removed, in the order they were added.
    pub ranges: Vec<Boundary>,
    /// Line count before the edit.
    pub lines_before: usize,
    /// Line count after the edit.
    pub lines_after: usize,
    /// False for a dry run.
    pub written: bool,
}

/// A loaded file with the ranges to remove from it.
#[derive(Debug)]
pub struct Removal {
    path: PathBuf,
    source: LineBuffer,
    ranges: Vec<(LineRange, Guards)>,
}

impl Removal {
    /// Reads the file at `path`.
    ///
    /// # Errors
    ///
    /// See [`read_lines`].
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_lines(path, read_lines(path)?))
    }

    /// Wraps lines that were already read from `path`.
    #[must_use]
    pub fn from_lines(path: &Path, source: LineBuffer) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
            ranges: Vec::new(),
        }
    }

    /// Target file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines as read.
    #[must_use]
    pub fn source(&self) -> &LineBuffer {
        &self.source
    }

    /// Number of queued ranges.
    #[must_use]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Queues a range, numbered against the file as read.
    pub fn add(&mut self, range: LineRange, guards: Guards) {
        self.ranges.push((range, guards));
    }

    /// Validates every range and its guards, then rewrites the buffer.
    ///
    /// # Errors
    ///
    /// [`RemoveError::IndexOutOfRange`], [`RemoveError::BoundaryMismatch`] or
    /// [`RemoveError::OverlappingRanges`].
    pub fn plan(self) -> Result<PlannedRemoval> {
        let len = self.source.len();
        let mut boundaries = Vec::with_capacity(self.ranges.len());
        for (range, guards) in &self.ranges {
            range.check_bounds(len)?;
            guards.check(&self.source, *range)?;
            boundaries.push(Boundary {
                range: *range,
                first_line: display(&self.source, range.start(), len)?,
                last_line: display(&self.source, range.last(), len)?,
            });
        }

        let mut rewriter = LineRangeRewriter::new(self.source);
        rewriter.add_ranges(self.ranges.into_iter().map(|(range, _)| range));
        Ok(PlannedRemoval {
            path: self.path,
            boundaries,
            lines_before: len,
            result: rewriter.apply()?,
        })
    }

    /// Plans the removal and, unless `dry_run`, overwrites the file.
    ///
    /// # Errors
    ///
    /// Any validation error from [`Removal::plan`], or [`RemoveError::Io`]
    /// from the write.
    pub fn commit(self, dry_run: bool) -> Result<RemovalReport> {
        self.plan()?.commit(dry_run)
    }
}

fn display(source: &LineBuffer, index: usize, len: usize) -> Result<String> {
    source
        .display_line(index)
        .map(str::to_owned)
        .ok_or(RemoveError::IndexOutOfRange { index, len })
}

/// A validated removal, rewritten in memory but not yet written.
#[derive(Debug)]
pub struct PlannedRemoval {
    path: PathBuf,
    boundaries: Vec<Boundary>,
    lines_before: usize,
    result: LineBuffer,
}

impl PlannedRemoval {
    /// First and last line of each range, in the order they were added.
    #[must_use]
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Lines left after the removal.
    #[must_use]
    pub fn result(&self) -> &LineBuffer {
        &self.result
    }

    /// Overwrites the file unless `dry_run`.
    ///
    /// # Errors
    ///
    /// [`RemoveError::Io`] if the file cannot be written.
    pub fn commit(self, dry_run: bool) -> Result<RemovalReport> {
        if !dry_run {
            write_lines(&self.path, &self.result)?;
        }
        Ok(RemovalReport {
            path: self.path,
            ranges: self.boundaries,
            lines_before: self.lines_before,
            lines_after: self.result.len(),
            written: !dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_temp(content: &[u8]) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.svelte");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_boundaries_report_trimmed_lines() {
        let (_dir, path) = write_temp(b"a\n  b  \nc\t\nd\n");
        let mut removal = Removal::load(&path).unwrap();
        removal.add(LineRange::new(1, 3).unwrap(), Guards::none());

        let planned = removal.plan().unwrap();
        let boundaries = planned.boundaries();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].first_line, "  b");
        assert_eq!(boundaries[0].last_line, "c");
    }

    #[test]
    fn test_plan_rewrites_in_memory_only() {
        let (_dir, path) = write_temp(b"a\nb\nc\nd\n");
        let mut removal = Removal::load(&path).unwrap();
        removal.add(LineRange::new(0, 1).unwrap(), Guards::none());
        removal.add(LineRange::new(2, 3).unwrap(), Guards::none());

        let planned = removal.plan().unwrap();
        assert_eq!(planned.result().to_string(), "b\nd\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\nd\n");

        let report = planned.commit(false).unwrap();
        assert_eq!(report.ranges.len(), 2);
        assert_eq!(report.ranges[1].first_line, "c");
        assert_eq!((report.lines_before, report.lines_after), (4, 2));
        assert_eq!(fs::read_to_string(&path).unwrap(), "b\nd\n");
    }

    #[test]
    fn test_plan_guard_failure_reports_before_any_rewrite() {
        let (_dir, path) = write_temp(b"a\nb\nc\n");
        let mut removal = Removal::load(&path).unwrap();
        removal.add(
            LineRange::new(0, 2).unwrap(),
            Guards::compile(Some("^x$"), None).unwrap(),
        );

        assert!(matches!(
            removal.plan(),
            Err(RemoveError::BoundaryMismatch { line: 1, .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_dry_run_leaves_file_alone() {
        let (_dir, path) = write_temp(b"a\nb\nc\n");
        let mut removal = Removal::load(&path).unwrap();
        removal.add(LineRange::new(0, 2).unwrap(), Guards::none());

        let report = removal.commit(true).unwrap();
        assert!(!report.written);
        assert_eq!(report.lines_before, 3);
        assert_eq!(report.lines_after, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let (_dir, path) = write_temp(&[b'o', b'k', b'\n', 0xff, 0xfe, b'\n']);
        assert!(matches!(
            Removal::load(&path),
            Err(RemoveError::Encoding { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        assert!(matches!(
            remove_lines(&path, LineRange::new(0, 1).unwrap()),
            Err(RemoveError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_report_serializes_flat_ranges() {
        let (_dir, path) = write_temp(b"a\nb\nc\n");
        let report = remove_lines(&path, LineRange::new(1, 2).unwrap()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ranges"][0]["start"], 1);
        assert_eq!(json["ranges"][0]["end"], 2);
        assert_eq!(json["ranges"][0]["first_line"], "b");
        assert_eq!(json["lines_after"], 2);
        assert_eq!(json["written"], true);
    }
}
