use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

/// Default configuration written by `init`
pub const DEFAULT_CONFIG: &str = r#"
[linecut]
dry_run = false            # Preview only, never write
verbose = false            # [VERBOSE] diagnostics on stderr
# root = "."               # Project root for job paths (relative to this file)

# Named jobs, runnable with `linecut run NAME`.
# A job with the name of a preset (section, reviews, offers) replaces it.
#
# [[linecut.jobs]]
# name = "offers"
# path = "v2/src/routes/profile/+page.svelte"
# lines = "888-996"        # One-based, inclusive (or: start = 887, end = 996)
# expect_first = "Offers"  # Regex the first removed line must match
# expect_last = "</div>"   # Regex the last removed line must match
"#;

/// Executes the init command in the current directory.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// This is primarily used for testing.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    let config_path = root.join(CONFIG_FILENAME);

    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
        return Ok(());
    }

    let mut file = fs::File::create(&config_path)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    writeln!(file, "{}", DEFAULT_CONFIG.trim())?;
    writeln!(
        writer,
        "  • Created {CONFIG_FILENAME} with default configuration."
    )?;
    Ok(())
}
