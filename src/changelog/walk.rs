//! changelog::walk
//!
//! History walker: the first pipeline stage.
//!
//! Produces the ordered list of commits strictly between a start commit
//! and a boundary commit — start included, boundary excluded, newest
//! first. The walk assumes a linear history: a merge commit in range is an
//! unrecoverable anomaly, because silently picking one parent would
//! produce an incomplete changelog with no signal to the operator.

use super::ChangelogError;
use crate::core::types::{Commit, CommitId};
use crate::forge::Forge;

/// Walk the commit chain from `start` back to (but excluding) `boundary`.
///
/// Each step is a round-trip to the forge; nothing is cached across runs.
///
/// # Errors
///
/// - [`ChangelogError::SameCommit`] if `start == boundary`; callers must
///   special-case this into the no-changes outcome before calling
/// - [`ChangelogError::NonLinearHistory`] if a visited commit has more
///   than one parent
/// - [`ChangelogError::BoundaryUnreachable`] if the chain runs out of
///   parents before reaching the boundary
pub async fn walk(
    forge: &dyn Forge,
    start: &CommitId,
    boundary: &CommitId,
) -> Result<Vec<Commit>, ChangelogError> {
    if start == boundary {
        return Err(ChangelogError::SameCommit);
    }

    let mut commits = Vec::new();
    let mut cursor = forge.get_commit(start).await?;

    loop {
        if cursor.parents.len() > 1 {
            return Err(ChangelogError::NonLinearHistory {
                commit: cursor.id.clone(),
                parents: cursor.parents.clone(),
            });
        }

        let Some(parent) = cursor.parents.first().cloned() else {
            return Err(ChangelogError::BoundaryUnreachable {
                boundary: boundary.clone(),
                last: cursor.id,
            });
        };

        commits.push(cursor);
        if parent == *boundary {
            return Ok(commits);
        }
        cursor = forge.get_commit(&parent).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::mock::MockForge;

    fn id(s: &str) -> CommitId {
        CommitId::new(s)
    }

    #[tokio::test]
    async fn walks_start_to_boundary_exclusive() {
        let forge = MockForge::new();
        forge.seed_linear_history(&["c1", "c2", "c3", "c4"]);

        let commits = walk(&forge, &id("c4"), &id("c1")).await.unwrap();

        let ids: Vec<_> = commits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c4", "c3", "c2"]);
    }

    #[tokio::test]
    async fn single_step_range() {
        let forge = MockForge::new();
        forge.seed_linear_history(&["c1", "c2"]);

        let commits = walk(&forge, &id("c2"), &id("c1")).await.unwrap();

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id, id("c2"));
    }

    #[tokio::test]
    async fn same_commit_is_an_error() {
        let forge = MockForge::new();
        forge.seed_linear_history(&["c1"]);

        let err = walk(&forge, &id("c1"), &id("c1")).await.unwrap_err();
        assert!(matches!(err, ChangelogError::SameCommit));
    }

    #[tokio::test]
    async fn merge_commit_fails_with_parent_list() {
        let forge = MockForge::new();
        forge.seed_linear_history(&["c1", "c2"]);
        forge.add_commit(Commit::new("m1", vec![id("c2"), id("other")]));

        let err = walk(&forge, &id("m1"), &id("c1")).await.unwrap_err();
        match err {
            ChangelogError::NonLinearHistory { commit, parents } => {
                assert_eq!(commit, id("m1"));
                assert_eq!(parents, vec![id("c2"), id("other")]);
            }
            other => panic!("expected NonLinearHistory, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn exhausted_chain_is_boundary_unreachable() {
        let forge = MockForge::new();
        forge.seed_linear_history(&["c1", "c2", "c3"]);

        // "zz" is not an ancestor of c3; the walk bottoms out at the root.
        let err = walk(&forge, &id("c3"), &id("zz")).await.unwrap_err();
        match err {
            ChangelogError::BoundaryUnreachable { boundary, last } => {
                assert_eq!(boundary, id("zz"));
                assert_eq!(last, id("c1"));
            }
            other => panic!("expected BoundaryUnreachable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_commit_propagates_lookup_error() {
        let forge = MockForge::new();

        let err = walk(&forge, &id("ghost"), &id("c1")).await.unwrap_err();
        assert!(matches!(err, ChangelogError::Lookup(_)));
    }
}
