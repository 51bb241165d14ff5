//! In-memory model of a text file as a sequence of lines.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`, the same endings a text-mode
//! reader recognizes. Each line keeps its own terminator, so joining the
//! lines back together reproduces the original text byte for byte. The final
//! line may have no terminator at all.

use std::fmt;
use std::ops::Range;

/// A text file split into lines that retain their line endings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Splits `text` into lines. A line ends after `\n`, after `\r\n`, or
    /// after a `\r` not followed by `\n`.
    ///
    /// ```
    /// use linecut::lines::LineBuffer;
    ///
    /// let buf = LineBuffer::parse("a\r\nb\rc\nd");
    /// assert_eq!(buf.len(), 4);
    /// assert_eq!(buf.line(0), Some("a\r\n"));
    /// assert_eq!(buf.line(1), Some("b\r"));
    /// assert_eq!(buf.line(3), Some("d"));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut lines = Vec::new();
        let mut line_start = 0;
        let mut i = 0;
        while i < bytes.len() {
            let line_end = match bytes[i] {
                b'\n' => Some(i + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(i + 2),
                b'\r' => Some(i + 1),
                _ => None,
            };
            match line_end {
                Some(end) => {
                    // Both terminators are ASCII, so `end` is a char boundary.
                    lines.push(text[line_start..end].to_owned());
                    line_start = end;
                    i = end;
                }
                None => i += 1,
            }
        }
        if line_start < bytes.len() {
            lines.push(text[line_start..].to_owned());
        }
        Self { lines }
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True for an empty file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Raw line at `index`, terminator included.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Line at `index` with trailing whitespace (and the terminator) trimmed,
    /// as shown in diagnostics.
    #[must_use]
    pub fn display_line(&self, index: usize) -> Option<&str> {
        self.line(index).map(str::trim_end)
    }

    /// Iterates over raw lines.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Removes the lines in `range` in place.
    ///
    /// Callers validate the range first; see [`crate::range::LineRange::check_bounds`].
    pub(crate) fn drain(&mut self, range: Range<usize>) {
        self.lines.drain(range);
    }

    /// Joins the lines back into one string.
    #[must_use]
    pub fn into_text(self) -> String {
        self.lines.concat()
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
