//! `list` command.

use crate::job::{Job, JobSet};
use crate::output;

use anyhow::Result;
use std::io::Write;

/// Print the available jobs.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn run_list<W: Write>(jobs: &JobSet, json: bool, writer: &mut W) -> Result<()> {
    if json {
        let all: Vec<&Job> = jobs.iter().collect();
        output::print_json(writer, &all)?;
    } else {
        output::print_job_table(writer, jobs)?;
    }
    Ok(())
}
