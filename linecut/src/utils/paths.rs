//! Path utilities for linecut.
//!
//! - Cross-platform path normalization for display
//! - Containment of job paths inside the project root

use crate::error::{RemoveError, Result};
use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use linecut::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\v2\\+page.svelte")), "v2/+page.svelte");
/// assert_eq!(normalize_display_path(Path::new("./src/app.html")), "src/app.html");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Validates that an existing path is contained within `root`.
///
/// # Errors
///
/// Returns [`RemoveError::FileNotFound`] if either path cannot be resolved,
/// or [`RemoveError::OutsideRoot`] if the path lies outside the root.
pub fn validate_path_within_root(path: &Path, root: &Path) -> Result<PathBuf> {
    let canonical_path = path
        .canonicalize()
        .map_err(|e| RemoveError::from_io(path, e))?;
    let canonical_root = root
        .canonicalize()
        .map_err(|e| RemoveError::from_io(root, e))?;

    if canonical_path.starts_with(&canonical_root) {
        Ok(canonical_path)
    } else {
        Err(RemoveError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })
    }
}

/// Resolves a job path against the project root and checks containment.
///
/// Relative paths are joined onto `root`; absolute paths are used as-is but
/// must still resolve inside it.
///
/// # Errors
///
/// See [`validate_path_within_root`].
pub fn resolve_job_path(path: &Path, root: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    validate_path_within_root(&joined, root)
}
