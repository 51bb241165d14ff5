//! Half-open line ranges.

use crate::error::{RemoveError, Result};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// A zero-based, half-open `[start, end)` range of line indices.
///
/// Construction guarantees `start < end`; whether `end` fits a particular
/// file is checked with [`LineRange::check_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Creates a range from zero-based `start` (inclusive) and `end` (exclusive).
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::EmptyRange`] when `start >= end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start >= end {
            return Err(RemoveError::EmptyRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from one-based, inclusive line numbers, the way an
    /// editor shows them. `from_one_based(473, 658)` is `[472, 658)`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::InvalidNotation`] for line 0 and
    /// [`RemoveError::EmptyRange`] when `last < first`.
    pub fn from_one_based(first: usize, last: usize) -> Result<Self> {
        if first == 0 || last == 0 {
            return Err(RemoveError::InvalidNotation(format!("{first}-{last}")));
        }
        Self::new(first - 1, last)
    }

    /// Zero-based first index removed.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Zero-based exclusive end.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Zero-based index of the last line removed.
    #[must_use]
    pub const fn last(&self) -> usize {
        self.end - 1
    }

    /// Number of lines covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Checks if this range shares at least one line with `other`.
    /// Adjacent ranges do not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Verifies that both boundary lines exist in a file of `len` lines.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::IndexOutOfRange`] naming `start` if it is past
    /// the end, otherwise naming `end - 1`.
    pub fn check_bounds(&self, len: usize) -> Result<()> {
        if self.start >= len {
            return Err(RemoveError::IndexOutOfRange {
                index: self.start,
                len,
            });
        }
        if self.end > len {
            return Err(RemoveError::IndexOutOfRange {
                index: self.last(),
                len,
            });
        }
        Ok(())
    }

    /// The range as a std `Range`.
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Formats as one-based inclusive `FIRST-LAST`, the inverse of [`FromStr`].
impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start + 1, self.end)
    }
}

/// Parses one-based inclusive `FIRST-LAST` (or a single `LINE`).
impl FromStr for LineRange {
    type Err = RemoveError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RemoveError::InvalidNotation(s.to_owned());
        let (first, last) = match s.trim().split_once('-') {
            Some((a, b)) => (a.trim(), b.trim()),
            None => (s.trim(), s.trim()),
        };
        let first: usize = first.parse().map_err(|_| invalid())?;
        let last: usize = last.parse().map_err(|_| invalid())?;
        Self::from_one_based(first, last)
    }
}
