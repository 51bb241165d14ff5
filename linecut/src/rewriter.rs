//! Line-range rewriter.
//!
//! Applies several line removals to one buffer, all expressed against the
//! buffer's original numbering. Ranges are validated up front and removed
//! from the bottom of the file upwards so earlier indices stay valid.
//!
//! # Usage
//!
//! ```
//! use linecut::lines::LineBuffer;
//! use linecut::range::LineRange;
//! use linecut::rewriter::LineRangeRewriter;
//!
//! let buf = LineBuffer::parse("a\nb\nc\nd\ne\n");
//! let mut rewriter = LineRangeRewriter::new(buf);
//! rewriter.add_range(LineRange::new(1, 3).expect("valid range"));
//! let fixed = rewriter.apply().expect("should apply");
//! assert_eq!(fixed.into_text(), "a\nd\ne\n");
//! ```

use crate::error::{RemoveError, Result};
use crate::lines::LineBuffer;
use crate::range::LineRange;

/// Removes a set of non-overlapping line ranges from a buffer.
#[derive(Debug, Clone)]
pub struct LineRangeRewriter {
    /// Original lines
    source: LineBuffer,
    /// Pending removals, in insertion order
    ranges: Vec<LineRange>,
}

impl LineRangeRewriter {
    /// Create a new rewriter for the given buffer
    #[must_use]
    pub fn new(source: LineBuffer) -> Self {
        Self {
            source,
            ranges: Vec::new(),
        }
    }

    /// The buffer being rewritten
    #[must_use]
    pub fn source(&self) -> &LineBuffer {
        &self.source
    }

    /// Add a range to the pending list
    pub fn add_range(&mut self, range: LineRange) {
        self.ranges.push(range);
    }

    /// Add multiple ranges
    pub fn add_ranges(&mut self, ranges: impl IntoIterator<Item = LineRange>) {
        self.ranges.extend(ranges);
    }

    /// Get the number of pending ranges
    #[must_use]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Number of lines that `apply` will remove
    #[must_use]
    pub fn lines_removed(&self) -> usize {
        self.ranges.iter().map(LineRange::len).sum()
    }

    /// Validate ranges without applying them
    ///
    /// # Errors
    /// Returns error if a range is out of bounds or two ranges overlap
    pub fn validate(&self) -> Result<()> {
        let len = self.source.len();
        for range in &self.ranges {
            range.check_bounds(len)?;
        }

        for i in 0..self.ranges.len() {
            for j in (i + 1)..self.ranges.len() {
                if self.ranges[i].overlaps(&self.ranges[j]) {
                    return Err(RemoveError::OverlappingRanges {
                        first: i,
                        second: j,
                    });
                }
            }
        }

        Ok(())
    }

    /// Apply all removals and return the remaining lines
    ///
    /// # Errors
    /// Returns error if a range is out of bounds or two ranges overlap
    pub fn apply(self) -> Result<LineBuffer> {
        self.validate()?;

        let mut result = self.source;
        let mut sorted = self.ranges;

        // Highest start first
        sorted.sort_by(|a, b| b.start().cmp(&a.start()));

        for range in sorted {
            result.drain(range.as_range());
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> LineBuffer {
        LineBuffer::parse(&lines.iter().map(|l| format!("{l}\n")).collect::<String>())
    }

    fn range(start: usize, end: usize) -> LineRange {
        LineRange::new(start, end).unwrap()
    }

    #[test]
    fn test_single_removal() {
        let mut rewriter = LineRangeRewriter::new(buffer(&["a", "b", "c", "d", "e"]));
        rewriter.add_range(range(1, 3));

        let result = rewriter.apply().expect("should apply");
        assert_eq!(result.into_text(), "a\nd\ne\n");
    }

    #[test]
    fn test_multiple_ranges_use_original_numbering() {
        let mut rewriter = LineRangeRewriter::new(buffer(&["0", "1", "2", "3", "4", "5", "6"]));
        // Added top-down; still refer to the original indices.
        rewriter.add_range(range(1, 2));
        rewriter.add_range(range(4, 6));

        assert_eq!(rewriter.lines_removed(), 3);
        let result = rewriter.apply().expect("should apply");
        assert_eq!(result.into_text(), "0\n2\n3\n6\n");
    }

    #[test]
    fn test_matches_sequential_bottom_up_removal() {
        let source = buffer(&["a", "b", "c", "d", "e", "f", "g", "h"]);

        let mut batch = LineRangeRewriter::new(source.clone());
        batch.add_ranges([range(0, 2), range(3, 4), range(6, 8)]);
        let batched = batch.apply().unwrap();

        let mut sequential = source;
        for r in [range(6, 8), range(3, 4), range(0, 2)] {
            let mut step = LineRangeRewriter::new(sequential);
            step.add_range(r);
            sequential = step.apply().unwrap();
        }

        assert_eq!(batched, sequential);
        assert_eq!(batched.into_text(), "c\nf\n");
    }

    #[test]
    fn test_overlapping_ranges_error() {
        let mut rewriter = LineRangeRewriter::new(buffer(&["a", "b", "c", "d"]));
        rewriter.add_range(range(0, 3));
        rewriter.add_range(range(2, 4));

        let result = rewriter.apply();
        assert!(matches!(
            result,
            Err(RemoveError::OverlappingRanges {
                first: 0,
                second: 1
            })
        ));
    }

    #[test]
    fn test_adjacent_ranges_allowed() {
        let mut rewriter = LineRangeRewriter::new(buffer(&["a", "b", "c", "d"]));
        rewriter.add_range(range(0, 2));
        rewriter.add_range(range(2, 4));

        let result = rewriter.apply().expect("should apply");
        assert!(result.is_empty());
    }

    #[test]
    fn test_out_of_bounds_error() {
        let mut rewriter = LineRangeRewriter::new(buffer(&["a", "b"]));
        rewriter.add_range(range(1, 5));

        let result = rewriter.apply();
        assert!(matches!(
            result,
            Err(RemoveError::IndexOutOfRange { index: 4, len: 2 })
        ));
    }

    #[test]
    fn test_no_ranges_is_identity() {
        let source = LineBuffer::parse("keep\r\nme");
        let rewriter = LineRangeRewriter::new(source.clone());
        assert_eq!(rewriter.range_count(), 0);
        assert_eq!(rewriter.apply().unwrap(), source);
    }
}
