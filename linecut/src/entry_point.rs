use crate::cli::{Cli, Commands};
use crate::commands::RemoveOptions;
use crate::config::Config;
use crate::guard::Guards;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

/// Runs linecut with the given arguments (without the program name).
///
/// # Errors
///
/// Returns an error if the command fails. Usage errors are printed to stderr
/// and reported as exit code 1 instead.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run linecut with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["linecut".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    let config_start = match &cli_var.command {
        Commands::Remove { path, .. } => path.as_path(),
        Commands::Run {
            root: Some(root), ..
        } => root.as_path(),
        _ => Path::new("."),
    };
    let config = Config::load_from_path(config_start);
    let verbose = cli_var.verbose || config.linecut.verbose.unwrap_or(false);
    let config_dry_run = config.linecut.dry_run.unwrap_or(false);

    if verbose {
        eprintln!("[VERBOSE] linecut v{}", env!("CARGO_PKG_VERSION"));
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Using config {}", path.display()),
            None => eprintln!("[VERBOSE] No config file found, using defaults"),
        }
        eprintln!("[VERBOSE] Executing subcommand: {:?}", cli_var.command);
    }

    match cli_var.command {
        Commands::Remove {
            path,
            range,
            guards,
            options,
        } => {
            let range = range.to_range()?;
            let guards = Guards::compile(
                guards.expect_first.as_deref(),
                guards.expect_last.as_deref(),
            )?;
            crate::commands::run_remove(
                &path,
                range,
                guards,
                RemoveOptions {
                    dry_run: options.dry_run || config_dry_run,
                    json: options.json,
                    verbose,
                },
                writer,
            )?;
        }
        Commands::Run {
            jobs,
            root,
            options,
        } => {
            let job_set = config.jobs().context("Invalid job in configuration")?;
            let root = match root.or_else(|| config.project_root()) {
                Some(root) => root,
                None => std::env::current_dir().context("Failed to get current directory")?,
            };
            if verbose {
                eprintln!("[VERBOSE] Project root: {}", root.display());
            }
            crate::commands::run_jobs(
                &jobs,
                &job_set,
                &root,
                RemoveOptions {
                    dry_run: options.dry_run || config_dry_run,
                    json: options.json,
                    verbose,
                },
                writer,
            )?;
        }
        Commands::List { json } => {
            let job_set = config.jobs().context("Invalid job in configuration")?;
            crate::commands::run_list(&job_set, json, writer)?;
        }
        Commands::Init => {
            crate::commands::run_init(writer)?;
        }
    }

    Ok(0)
}
