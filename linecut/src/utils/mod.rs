//! Utilities module for linecut.

mod paths;

pub use paths::{normalize_display_path, resolve_job_path, validate_path_within_root};
