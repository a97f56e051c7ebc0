//! preview command - Generate the changelog and print it without publishing

use anyhow::Result;

use crate::changelog;
use crate::cli::args::PreviewArgs;
use crate::cli::commands::{build_forge, resolve_config};
use crate::ui::output::{self, Verbosity};

/// Generate the changelog for the requested range and print it.
///
/// A token is optional: anonymous reads work for public repositories at a
/// reduced rate limit.
pub async fn preview(
    args: PreviewArgs,
    config_path: Option<&std::path::Path>,
    verbosity: Verbosity,
) -> Result<()> {
    let config = resolve_config(config_path, &args.selection, None, None)?;

    let token = args
        .selection
        .token
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok());
    if token.is_none() {
        output::debug("no token; using anonymous API access", verbosity);
    }

    let forge = build_forge(&config, token)?;

    let release = changelog::generate(
        &forge,
        &args.selection.tag,
        &args.selection.prev_tag,
        &config,
    )
    .await?;

    println!("{}", release.title);
    println!();
    println!("{}", release.body);
    Ok(())
}
