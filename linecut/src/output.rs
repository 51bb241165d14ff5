use crate::constants::SUCCESS_MESSAGE;
use crate::job::JobSet;
use crate::remover::{Boundary, RemovalReport};
use crate::utils::normalize_display_path;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use std::io::Write;

/// Print the first and last line a range deletes.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_boundary(writer: &mut impl Write, boundary: &Boundary) -> std::io::Result<()> {
    writeln!(
        writer,
        "Line {}: {}",
        boundary.range.start() + 1,
        boundary.first_line
    )?;
    writeln!(
        writer,
        "Line {}: {}",
        boundary.range.end(),
        boundary.last_line
    )
}

/// Print the closing line of a removal.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_outcome(writer: &mut impl Write, report: &RemovalReport) -> std::io::Result<()> {
    if report.written {
        writeln!(writer, "{}", SUCCESS_MESSAGE.green())
    } else {
        writeln!(
            writer,
            "{} {} lines would be removed from {} ({} -> {} lines).",
            "[DRY-RUN]".yellow(),
            report.lines_before - report.lines_after,
            normalize_display_path(&report.path),
            report.lines_before,
            report.lines_after
        )
    }
}

/// Print a removal report as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json<T: serde::Serialize>(writer: &mut impl Write, value: &T) -> anyhow::Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Print the available jobs as a table.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_job_table(writer: &mut impl Write, jobs: &JobSet) -> std::io::Result<()> {
    if jobs.is_empty() {
        return writeln!(writer, "No jobs defined.");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Lines").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

    for job in jobs.iter() {
        table.add_row(vec![
            Cell::new(&job.name),
            Cell::new(normalize_display_path(&job.path)),
            Cell::new(job.range.to_string()),
            Cell::new(job.origin.to_string()),
        ]);
    }

    writeln!(writer, "{table}")
}
