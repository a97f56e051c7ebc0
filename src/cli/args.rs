//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use an explicit configuration file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Relnote - Generate a grouped changelog between two tags and publish it
/// as a release
#[derive(Parser, Debug)]
#[command(name = "relnote")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this configuration file instead of searching standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the changelog and publish it as a release
    #[command(
        long_about = "Generate the changelog and publish it as a release.\n\n\
            Walks the commit history from --tag back to --prev-tag, looks up \
            the pull request associated with each commit, groups the unique \
            requests into configured sections by label, and publishes the \
            rendered body as a release on the tag.\n\n\
            The history between the two tags must be linear; a merge commit \
            in range fails the run rather than producing an incomplete \
            changelog.",
        after_help = "\
EXAMPLES:
    # Publish a draft release for v1.2.0 with changes since v1.1.0
    relnote publish --tag v1.2.0 --prev-tag v1.1.0 --owner myorg --repo myrepo

    # Publish immediately (not a draft), with an explicit title
    relnote publish --tag v1.2.0 --prev-tag v1.1.0 --no-draft --title 'Spring release'"
    )]
    Publish(PublishArgs),

    /// Generate the changelog and print it without publishing
    #[command(
        long_about = "Generate the changelog and print it without publishing.\n\n\
            Runs the same pipeline as 'publish' but writes the title and body \
            to stdout instead of creating a release. Useful for checking the \
            output before cutting a release. A token is optional for public \
            repositories."
    )]
    Preview(PreviewArgs),
}

/// Range and repository selection shared by publish and preview.
#[derive(Args, Debug)]
pub struct SelectionArgs {
    /// Tag the release is being cut for
    #[arg(long, value_name = "TAG")]
    pub tag: String,

    /// Previous release tag; marks the end of the range (exclusive)
    #[arg(long = "prev-tag", value_name = "TAG")]
    pub prev_tag: String,

    /// Release title (defaults to the tag name)
    #[arg(long)]
    pub title: Option<String>,

    /// Repository owner; overrides the configuration file
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name; overrides the configuration file
    #[arg(long)]
    pub repo: Option<String>,

    /// API token; falls back to the GITHUB_TOKEN environment variable
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

/// Arguments for the publish command.
#[derive(Args, Debug)]
pub struct PublishArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Publish as a draft release
    #[arg(long, conflicts_with = "no_draft")]
    pub draft: bool,

    /// Publish immediately instead of as a draft
    #[arg(long)]
    pub no_draft: bool,

    /// Mark the release as a prerelease
    #[arg(long, conflicts_with = "no_prerelease")]
    pub prerelease: bool,

    /// Mark the release as a full release
    #[arg(long)]
    pub no_prerelease: bool,
}

impl PublishArgs {
    /// Draft override from the flag pair, `None` when neither was given.
    pub fn draft_override(&self) -> Option<bool> {
        flag_pair(self.draft, self.no_draft)
    }

    /// Prerelease override from the flag pair, `None` when neither was given.
    pub fn prerelease_override(&self) -> Option<bool> {
        flag_pair(self.prerelease, self.no_prerelease)
    }
}

/// Arguments for the preview command.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Collapse a `--x` / `--no-x` flag pair into an override.
fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
