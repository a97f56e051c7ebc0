//! cli::commands
//!
//! Command handlers. Each command resolves configuration, constructs the
//! forge, and delegates to the changelog pipeline; none of them contain
//! pipeline logic.

mod preview;
mod publish;

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::cli::args::{Command, SelectionArgs};
use crate::core::config::{Config, Overrides};
use crate::forge::github::GitHubForge;
use crate::ui::output::Verbosity;

/// Dispatch a parsed command.
pub async fn dispatch(
    command: Command,
    config_path: Option<&Path>,
    verbosity: Verbosity,
) -> Result<()> {
    match command {
        Command::Publish(args) => publish::publish(args, config_path, verbosity).await,
        Command::Preview(args) => preview::preview(args, config_path, verbosity).await,
    }
}

/// Load the configuration file and merge it with CLI overrides.
fn resolve_config(
    config_path: Option<&Path>,
    selection: &SelectionArgs,
    draft: Option<bool>,
    prerelease: Option<bool>,
) -> Result<Config> {
    let file = Config::load(config_path)?;
    let config = Config::resolve(
        file,
        Overrides {
            title: selection.title.clone(),
            owner: selection.owner.clone(),
            repo: selection.repo.clone(),
            draft,
            prerelease,
        },
    )?;
    Ok(config)
}

/// Construct the GitHub forge from resolved configuration.
fn build_forge(config: &Config, token: Option<String>) -> Result<GitHubForge> {
    let owner = config
        .owner
        .clone()
        .ok_or_else(|| anyhow!("repository owner not set; pass --owner or set it in relnote.toml"))?;
    let repo = config
        .repo
        .clone()
        .ok_or_else(|| anyhow!("repository name not set; pass --repo or set it in relnote.toml"))?;

    Ok(match token {
        Some(token) => GitHubForge::new(token, owner, repo),
        None => GitHubForge::unauthenticated(owner, repo),
    })
}
