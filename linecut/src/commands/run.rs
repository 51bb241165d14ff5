//! `run` command: execute named jobs.

use super::remove::{execute_removal, RemoveOptions};
use crate::job::{Job, JobSet};
use crate::output;
use crate::remover::{Removal, RemovalReport};
use crate::utils::{normalize_display_path, resolve_job_path};

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Run the named jobs against files under `root`.
///
/// Jobs are grouped by target file. Each file is read once and all of its
/// jobs are removed in one rewrite, numbered against the file as read.
/// Files are processed in the order their first job was named; a failure
/// stops the run, leaving files already processed rewritten.
///
/// # Errors
///
/// Returns an error for an unknown job, a path outside `root`, or any
/// removal failure.
pub fn run_jobs<W: Write>(
    names: &[String],
    jobs: &JobSet,
    root: &Path,
    options: RemoveOptions,
    writer: &mut W,
) -> Result<Vec<RemovalReport>> {
    let groups = group_by_file(names, jobs, root)?;

    let mut reports = Vec::with_capacity(groups.len());
    for (path, group) in groups {
        if options.verbose {
            let listed: Vec<&str> = group.iter().map(|j| j.name.as_str()).collect();
            eprintln!(
                "[VERBOSE] Running {} on {}",
                listed.join(", "),
                normalize_display_path(&path)
            );
        }

        let mut removal = Removal::load(&path)
            .with_context(|| format!("Failed to read {}", normalize_display_path(&path)))?;
        for job in group {
            let guards = job
                .guards()
                .with_context(|| format!("Invalid guard in job `{}`", job.name))?;
            removal.add(job.range, guards);
        }
        reports.push(execute_removal(removal, options, writer)?);
    }

    if options.json {
        output::print_json(writer, &reports)?;
    }
    Ok(reports)
}

fn group_by_file<'a>(
    names: &[String],
    jobs: &'a JobSet,
    root: &Path,
) -> Result<Vec<(PathBuf, Vec<&'a Job>)>> {
    let mut groups: Vec<(PathBuf, Vec<&Job>)> = Vec::new();
    for name in names {
        let job = jobs.get(name)?;
        let path = resolve_job_path(&job.path, root)
            .with_context(|| format!("Cannot resolve file for job `{name}`"))?;
        match groups.iter_mut().find(|(p, _)| *p == path) {
            Some((_, group)) => group.push(job),
            None => groups.push((path, vec![job])),
        }
    }
    Ok(groups)
}
