use crate::range::LineRange;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.linecut.toml):
  Create this file in your project root to define named jobs.

  [linecut]
  dry_run = false            # Preview only, never write
  verbose = false            # [VERBOSE] diagnostics on stderr
  root = \".\"                 # Project root for job paths

  [[linecut.jobs]]
  name = \"offers\"
  path = \"v2/src/routes/profile/+page.svelte\"
  lines = \"888-996\"          # One-based, inclusive
  expect_first = \"Offers\"    # Optional guard on the first removed line
";

/// How the lines to remove are specified.
#[derive(Args, Debug, Default, Clone)]
#[group(required = true, multiple = true)]
pub struct RangeArgs {
    /// Zero-based index of the first line to remove.
    #[arg(long, requires = "end")]
    pub start: Option<usize>,

    /// Zero-based exclusive end index.
    #[arg(long, requires = "start")]
    pub end: Option<usize>,

    /// One-based inclusive range, e.g. 473-658 (same as --start 472 --end 658).
    #[arg(long, short = 'l', conflicts_with_all = ["start", "end"])]
    pub lines: Option<LineRange>,
}

/// Boundary guards checked before writing.
#[derive(Args, Debug, Default, Clone)]
pub struct GuardArgs {
    /// Regex the first removed line must match.
    #[arg(long, value_name = "REGEX")]
    pub expect_first: Option<String>,

    /// Regex the last removed line must match.
    #[arg(long, value_name = "REGEX")]
    pub expect_last: Option<String>,
}

/// Options shared by commands that edit files.
#[derive(Args, Debug, Default, Clone)]
pub struct WriteOptions {
    /// Show what would be removed without writing.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output a JSON report instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "linecut - remove a range of lines from a text file in place",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Commands,

    /// Enable verbose output on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Remove a range of lines from one file
    Remove {
        /// File to edit in place.
        path: PathBuf,

        /// Lines to remove.
        #[command(flatten)]
        range: RangeArgs,

        /// Boundary guards.
        #[command(flatten)]
        guards: GuardArgs,

        /// Write options.
        #[command(flatten)]
        options: WriteOptions,
    },
    /// Run named jobs (presets or from .linecut.toml)
    Run {
        /// Job names. Jobs on the same file are all numbered against the file
        /// as read before this run.
        #[arg(required = true)]
        jobs: Vec<String>,

        /// Project root for job paths (defaults to the config file's directory).
        #[arg(long)]
        root: Option<PathBuf>,

        /// Write options.
        #[command(flatten)]
        options: WriteOptions,
    },
    /// List available jobs
    List {
        /// Output JSON.
        #[arg(long)]
        json: bool,
    },
    /// Create a default .linecut.toml in the current directory
    Init,
}

impl RangeArgs {
    /// Resolves the flags into a range.
    ///
    /// # Errors
    ///
    /// [`crate::RemoveError::EmptyRange`] for `start >= end`, or
    /// [`crate::RemoveError::InvalidNotation`] if nothing was given.
    pub fn to_range(&self) -> crate::error::Result<LineRange> {
        match (self.lines, self.start, self.end) {
            (Some(range), _, _) => Ok(range),
            (None, Some(start), Some(end)) => LineRange::new(start, end),
            _ => Err(crate::error::RemoveError::InvalidNotation(String::new())),
        }
    }
}
