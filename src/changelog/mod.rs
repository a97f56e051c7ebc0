//! changelog
//!
//! The changelog generation pipeline.
//!
//! # Architecture
//!
//! Six stages, strictly sequential, each consuming the previous stage's
//! output:
//!
//! 1. [`walk`] - ordered commits between the two tags
//! 2. [`resolve`] - per-commit change-request lookups, in bounded batches
//! 3. [`dedupe`] - collapse repeated requests, first-seen order
//! 4. [`classify`] - assign each request to a configured section
//! 5. [`sort`] - order each section by merge recency
//! 6. [`render`] - assemble the release body
//!
//! The only internal concurrency is the bounded fan-out inside the
//! resolver. All aggregation happens strictly after the fetches for a
//! stage have completed, so no stage needs a lock.
//!
//! # Failure
//!
//! Every failure propagates synchronously to the caller; no stage
//! swallows or downgrades an error, and nothing retries. A partial
//! changelog is never produced.

pub mod classify;
pub mod dedupe;
pub mod render;
pub mod resolve;
pub mod sort;
pub mod walk;

pub use classify::{classify, classify_one, Grouped, UNCLASSIFIED};
pub use dedupe::dedupe;
pub use render::{render, render_line};
pub use resolve::{resolve, Associated, LOOKUP_BATCH_SIZE};
pub use sort::{merge_recency, sort_group, sort_groups};
pub use walk::walk;

use thiserror::Error;

use crate::core::config::Config;
use crate::core::types::CommitId;
use crate::forge::{Forge, ForgeError};

/// Errors from the changelog pipeline.
///
/// All are fatal: the run is marked failed with the error's message, and
/// re-running the whole pipeline is the only recovery.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A commit in range has more than one parent (a merge commit).
    ///
    /// Surfaced with the offending parents so an operator can diagnose
    /// the history instead of receiving a silently incomplete changelog.
    #[error(
        "non-linear history at commit {commit}: expected a single parent, found: {}",
        join_ids(.parents)
    )]
    NonLinearHistory {
        /// The offending commit.
        commit: CommitId,
        /// Its parents.
        parents: Vec<CommitId>,
    },

    /// The chain ran out of parents before reaching the boundary.
    ///
    /// Usually means the boundary tag is not an ancestor of the start tag.
    #[error("boundary commit {boundary} is not reachable from {last}")]
    BoundaryUnreachable {
        /// The boundary that was never encountered.
        boundary: CommitId,
        /// The last commit visited before the chain was exhausted.
        last: CommitId,
    },

    /// Start and boundary are the same commit; there is nothing to walk.
    ///
    /// Callers special-case this into the no-changes outcome before
    /// walking; reaching the walker with equal commits is an error.
    #[error("start and boundary tags point at the same commit")]
    SameCommit,

    /// A forge lookup failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] ForgeError),
}

fn join_ids(ids: &[CommitId]) -> String {
    ids.iter()
        .map(CommitId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A generated release: title and rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Release title.
    pub title: String,
    /// Rendered changelog body.
    pub body: String,
}

/// Generate the release for the range `boundary_tag..start_tag`.
///
/// Resolves both tags, then runs the six-stage pipeline. When both tags
/// point at the same commit the pipeline is skipped entirely and the body
/// is the configured no-changes message.
///
/// The title comes from the configuration, falling back to the start tag
/// name.
pub async fn generate(
    forge: &dyn Forge,
    start_tag: &str,
    boundary_tag: &str,
    config: &Config,
) -> Result<Release, ChangelogError> {
    let title = config
        .title
        .clone()
        .unwrap_or_else(|| start_tag.to_string());

    let start = forge.resolve_tag(start_tag).await?;
    let boundary = forge.resolve_tag(boundary_tag).await?;

    if start == boundary {
        return Ok(Release {
            title,
            body: config.no_changes_message.clone(),
        });
    }

    let commits = walk(forge, &start, &boundary).await?;
    let associated = resolve(forge, &commits).await?;
    let unique = dedupe(&associated);
    let grouped = sort_groups(classify(unique, &config.sections));

    Ok(Release {
        title,
        body: render(config, &grouped),
    })
}
