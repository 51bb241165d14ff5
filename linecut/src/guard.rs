//! Boundary guards: patterns the first and last removed lines must match.
//!
//! A removal with hardcoded indices silently deletes the wrong lines once the
//! file has moved on. Guards turn that into a [`RemoveError::BoundaryMismatch`]
//! before anything is written.

use crate::error::{RemoveError, Result};
use crate::lines::LineBuffer;
use crate::range::LineRange;
use regex::Regex;

/// Compiled guard patterns for one range.
#[derive(Debug, Clone, Default)]
pub struct Guards {
    first: Option<Regex>,
    last: Option<Regex>,
}

impl Guards {
    /// No guards.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Compiles the optional first/last line patterns.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::InvalidPattern`] if either pattern fails to compile.
    pub fn compile(first: Option<&str>, last: Option<&str>) -> Result<Self> {
        Ok(Self {
            first: first.map(compile_pattern).transpose()?,
            last: last.map(compile_pattern).transpose()?,
        })
    }

    /// True when neither boundary is guarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }

    /// Checks the boundary lines of `range` in `lines`.
    ///
    /// The range must already be within bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::BoundaryMismatch`] for the first guard that fails.
    pub fn check(&self, lines: &LineBuffer, range: LineRange) -> Result<()> {
        check_line(self.first.as_ref(), lines, range.start())?;
        check_line(self.last.as_ref(), lines, range.last())
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| RemoveError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

fn check_line(pattern: Option<&Regex>, lines: &LineBuffer, index: usize) -> Result<()> {
    let Some(re) = pattern else {
        return Ok(());
    };
    let text = lines
        .display_line(index)
        .ok_or(RemoveError::IndexOutOfRange {
            index,
            len: lines.len(),
        })?;
    if re.is_match(text) {
        Ok(())
    } else {
        Err(RemoveError::BoundaryMismatch {
            line: index + 1,
            pattern: re.as_str().to_owned(),
            text: text.to_owned(),
        })
    }
}
