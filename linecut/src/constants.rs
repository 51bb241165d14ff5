//! Shared constants.

/// Name of the per-project configuration file.
pub const CONFIG_FILENAME: &str = ".linecut.toml";

/// Message printed after a file has been rewritten.
pub const SUCCESS_MESSAGE: &str = "Successfully removed lines.";

/// Target of the built-in presets, relative to the project root.
pub const PROFILE_PAGE: &str = "v2/src/routes/profile/+page.svelte";
