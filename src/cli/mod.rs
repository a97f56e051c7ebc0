//! cli
//!
//! Command-line interface layer for relnote.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and construct the forge
//! - Delegate to the changelog pipeline
//!
//! The CLI layer is thin: all generation logic lives in
//! [`crate::changelog`], and all network access goes through
//! [`crate::forge`].

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    commands::dispatch(cli.command, cli.config.as_deref(), verbosity).await
}
