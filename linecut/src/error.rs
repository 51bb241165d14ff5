//! Error types for line-range removal.

use std::io;
use std::path::PathBuf;

/// Errors raised while reading, rewriting, or writing a text file.
#[derive(Debug, thiserror::Error)]
pub enum RemoveError {
    /// The target file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// A boundary line index is not a valid index into the file.
    #[error("Line index {index} out of range for file with {len} lines")]
    IndexOutOfRange {
        /// Zero-based index that was accessed.
        index: usize,
        /// Number of lines in the file.
        len: usize,
    },

    /// `start` is not strictly below `end`.
    #[error("Empty line range: start {start} must be less than end {end}")]
    EmptyRange {
        /// Zero-based start index.
        start: usize,
        /// Zero-based exclusive end index.
        end: usize,
    },

    /// Two ranges given to one rewrite overlap.
    #[error("Overlapping line ranges at indices {first} and {second}")]
    OverlappingRanges {
        /// Index of the first range in the rewrite.
        first: usize,
        /// Index of the second range in the rewrite.
        second: usize,
    },

    /// The file content is not valid UTF-8.
    #[error("File {} is not valid UTF-8", path.display())]
    Encoding {
        /// File that failed to decode.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A boundary line does not match its guard pattern.
    #[error("Line {line} does not match expected pattern `{pattern}`: {text}")]
    BoundaryMismatch {
        /// One-based line number that was checked.
        line: usize,
        /// Guard pattern.
        pattern: String,
        /// Actual line text (trailing whitespace trimmed).
        text: String,
    },

    /// A guard pattern is not a valid regular expression.
    #[error("Invalid guard pattern `{pattern}`")]
    InvalidPattern {
        /// Pattern as written.
        pattern: String,
        /// Regex compile error.
        #[source]
        source: regex::Error,
    },

    /// No preset or configured job has this name.
    #[error("Unknown job `{0}`")]
    UnknownJob(String),

    /// A job path resolves outside the project root.
    #[error("Path {} is outside of {}", path.display(), root.display())]
    OutsideRoot {
        /// Resolved job path.
        path: PathBuf,
        /// Project root.
        root: PathBuf,
    },

    /// A one-based `FIRST-LAST` line notation could not be parsed.
    #[error("Invalid line notation `{0}` (expected FIRST-LAST, one-based)")]
    InvalidNotation(String),

    /// Any other I/O failure.
    #[error("I/O error on {}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl RemoveError {
    /// Maps an I/O error on `path` to `FileNotFound` or `Io`.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Result alias for line-range removal.
pub type Result<T> = std::result::Result<T, RemoveError>;
