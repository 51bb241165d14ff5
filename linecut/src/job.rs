//! Named removal jobs.
//!
//! A job pins a file, a line range and optional boundary guards under a
//! name, so a one-off edit can be replayed with `linecut run NAME`.

use crate::error::{RemoveError, Result};
use crate::guard::Guards;
use crate::range::LineRange;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where a job definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobOrigin {
    /// Compiled into the binary.
    Preset,
    /// Read from `.linecut.toml`.
    Config,
}

impl fmt::Display for JobOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset => f.write_str("preset"),
            Self::Config => f.write_str("config"),
        }
    }
}

/// A named line-range removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    /// Job name.
    pub name: String,
    /// Target file, usually relative to the project root.
    pub path: PathBuf,
    /// Lines to remove.
    pub range: LineRange,
    /// Pattern the first removed line must match.
    pub expect_first: Option<String>,
    /// Pattern the last removed line must match.
    pub expect_last: Option<String>,
    /// Definition source.
    pub origin: JobOrigin,
}

impl Job {
    /// Compiles this job's guards.
    ///
    /// # Errors
    ///
    /// [`RemoveError::InvalidPattern`] for a malformed pattern.
    pub fn guards(&self) -> Result<Guards> {
        Guards::compile(self.expect_first.as_deref(), self.expect_last.as_deref())
    }
}

/// The jobs available to `run` and `list`: presets overlaid with config.
#[derive(Debug, Clone, Default)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    /// Starts from the built-in presets.
    #[must_use]
    pub fn with_presets() -> Self {
        Self {
            jobs: crate::presets::builtin_jobs(),
        }
    }

    /// Adds `job`, replacing any existing job with the same name in place.
    pub fn insert(&mut self, job: Job) {
        if let Some(existing) = self.jobs.iter_mut().find(|j| j.name == job.name) {
            *existing = job;
        } else {
            self.jobs.push(job);
        }
    }

    /// Looks up a job by name.
    ///
    /// # Errors
    ///
    /// [`RemoveError::UnknownJob`] if there is none.
    pub fn get(&self, name: &str) -> Result<&Job> {
        self.jobs
            .iter()
            .find(|j| j.name == name)
            .ok_or_else(|| RemoveError::UnknownJob(name.to_owned()))
    }

    /// Jobs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    /// Number of jobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when no jobs are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Extend<Job> for JobSet {
    fn extend<I: IntoIterator<Item = Job>>(&mut self, iter: I) {
        for job in iter {
            self.insert(job);
        }
    }
}
