//! changelog::resolve
//!
//! Association resolver: maps each commit to its change-requests.
//!
//! # Batching
//!
//! Lookups are issued in fixed-size batches: requests within a batch run
//! concurrently, and the next batch is not admitted until every request in
//! the current one has settled. This caps the number of in-flight calls
//! against the forge's abuse limits at [`LOOKUP_BATCH_SIZE`] at any
//! instant.
//!
//! # Failure
//!
//! Any single failed lookup fails the whole resolution. A silently
//! incomplete changelog is worse than a failed run that can be safely
//! re-triggered, so there is no partial success and no retry.

use futures::future::join_all;

use super::ChangelogError;
use crate::core::types::{ChangeRequest, Commit};
use crate::forge::Forge;

/// Maximum association lookups in flight at once.
pub const LOOKUP_BATCH_SIZE: usize = 10;

/// A commit paired with the change-requests found for it.
///
/// Zero requests is normal (a commit pushed without a request); more than
/// one is kept as-is and left to the deduplicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Associated {
    /// The commit that was looked up.
    pub commit: Commit,
    /// Change-requests associated with it, in forge order.
    pub requests: Vec<ChangeRequest>,
}

/// Resolve change-request associations for every commit, in order.
pub async fn resolve(
    forge: &dyn Forge,
    commits: &[Commit],
) -> Result<Vec<Associated>, ChangelogError> {
    resolve_batched(forge, commits, LOOKUP_BATCH_SIZE).await
}

/// Resolve with an explicit batch size (exposed for tests).
///
/// Each lookup writes to its own slot, so the output order matches the
/// input order regardless of completion order within a batch.
pub async fn resolve_batched(
    forge: &dyn Forge,
    commits: &[Commit],
    batch_size: usize,
) -> Result<Vec<Associated>, ChangelogError> {
    let batch_size = batch_size.max(1);
    let mut associated = Vec::with_capacity(commits.len());

    for batch in commits.chunks(batch_size) {
        let lookups = batch.iter().map(|commit| forge.requests_for_commit(&commit.id));
        let settled = join_all(lookups).await;

        for (commit, result) in batch.iter().zip(settled) {
            associated.push(Associated {
                commit: commit.clone(),
                requests: result?,
            });
        }
    }

    Ok(associated)
}
