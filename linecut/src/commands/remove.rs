//! `remove` command.

use crate::guard::Guards;
use crate::output;
use crate::range::LineRange;
use crate::remover::{Removal, RemovalReport};
use crate::utils::normalize_display_path;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Options for a removal
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveOptions {
    /// Dry-run mode (show what would change)
    pub dry_run: bool,
    /// Print a JSON report instead of text
    pub json: bool,
    /// Verbose output on stderr
    pub verbose: bool,
}

/// Remove `range` from the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the range or guards do not
/// fit the file, or the write fails. The file is unchanged on error.
pub fn run_remove<W: Write>(
    path: &Path,
    range: LineRange,
    guards: Guards,
    options: RemoveOptions,
    writer: &mut W,
) -> Result<RemovalReport> {
    let mut removal = Removal::load(path)
        .with_context(|| format!("Failed to read {}", normalize_display_path(path)))?;
    removal.add(range, guards);
    let report = execute_removal(removal, options, writer)?;
    if options.json {
        output::print_json(writer, &report)?;
    }
    Ok(report)
}

/// Validate, print boundaries, write, and print the outcome.
///
/// With `options.json` set nothing is printed; the caller serializes the
/// returned report.
///
/// # Errors
///
/// Returns an error if validation, guards or the write fail.
pub fn execute_removal<W: Write>(
    removal: Removal,
    options: RemoveOptions,
    writer: &mut W,
) -> Result<RemovalReport> {
    let display = normalize_display_path(removal.path());
    if options.verbose {
        eprintln!(
            "[VERBOSE] {display}: {} lines read, {} range(s) queued",
            removal.source().len(),
            removal.range_count()
        );
    }

    let planned = removal.plan()?;
    if !options.json {
        for boundary in planned.boundaries() {
            output::print_boundary(writer, boundary)?;
        }
    }

    let report = planned
        .commit(options.dry_run)
        .with_context(|| format!("Failed to rewrite {display}"))?;

    if options.verbose {
        eprintln!(
            "[VERBOSE] {display}: {} -> {} lines{}",
            report.lines_before,
            report.lines_after,
            if report.written { "" } else { " (not written)" }
        );
    }
    if !options.json {
        output::print_outcome(writer, &report)?;
    }
    Ok(report)
}
