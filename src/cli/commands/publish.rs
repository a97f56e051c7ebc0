//! publish command - Generate the changelog and publish it as a release

use anyhow::{Context, Result};

use crate::changelog;
use crate::cli::args::PublishArgs;
use crate::cli::commands::{build_forge, resolve_config};
use crate::forge::{CreateReleaseRequest, Forge};
use crate::ui::output::{self, Verbosity};

/// Generate the changelog for the requested range and publish it.
pub async fn publish(
    args: PublishArgs,
    config_path: Option<&std::path::Path>,
    verbosity: Verbosity,
) -> Result<()> {
    let config = resolve_config(
        config_path,
        &args.selection,
        args.draft_override(),
        args.prerelease_override(),
    )?;

    let token = args
        .selection
        .token
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .context("no API token; pass --token or set GITHUB_TOKEN")?;

    let forge = build_forge(&config, Some(token))?;

    output::debug(
        format!(
            "generating changelog for {}..{}",
            args.selection.prev_tag, args.selection.tag
        ),
        verbosity,
    );

    let release = changelog::generate(
        &forge,
        &args.selection.tag,
        &args.selection.prev_tag,
        &config,
    )
    .await?;

    let published = forge
        .create_release(CreateReleaseRequest {
            tag: args.selection.tag.clone(),
            title: release.title,
            body: release.body,
            draft: config.draft,
            prerelease: config.prerelease,
        })
        .await?;

    output::success(format!("created release: {}", published.url), verbosity);
    Ok(())
}
