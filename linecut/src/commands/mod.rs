//! Commands module - CLI subcommand implementations.

mod init;
mod list;
mod remove;
mod run;

// Re-export all public items
pub use init::{run_init, run_init_in, DEFAULT_CONFIG};
pub use list::run_list;
pub use remove::{execute_removal, run_remove, RemoveOptions};
pub use run::run_jobs;
