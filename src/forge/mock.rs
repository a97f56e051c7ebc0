//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! The mock forge provides a deterministic implementation of the `Forge`
//! trait for use in tests. It stores a seeded history in memory, records
//! every operation for verification, and allows configuring failure
//! scenarios.
//!
//! # Example
//!
//! ```
//! use relnote::forge::mock::MockForge;
//! use relnote::forge::Forge;
//! use relnote::core::types::CommitId;
//!
//! # tokio_test::block_on(async {
//! let forge = MockForge::new();
//!
//! // c1 is the root; c3 is the newest commit.
//! forge.seed_linear_history(&["c1", "c2", "c3"]);
//! forge.add_tag("v1.0.0", "c1");
//! forge.add_tag("v1.1.0", "c3");
//!
//! let id = forge.resolve_tag("v1.1.0").await.unwrap();
//! assert_eq!(id, CommitId::new("c3"));
//!
//! let commit = forge.get_commit(&id).await.unwrap();
//! assert_eq!(commit.parents, vec![CommitId::new("c2")]);
//! # });
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{CreateReleaseRequest, Forge, ForgeError, PublishedRelease};
use crate::core::types::{ChangeRequest, Commit, CommitId};

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockForge {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockForgeInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockForgeInner {
    /// Tag name → commit id.
    tags: HashMap<String, CommitId>,
    /// Stored commits by id.
    commits: HashMap<CommitId, Commit>,
    /// Change-requests associated with each commit.
    requests: HashMap<CommitId, Vec<ChangeRequest>>,
    /// Releases created so far.
    releases: Vec<CreateReleaseRequest>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail resolve_tag with the given error.
    ResolveTag(ForgeError),
    /// Fail get_commit with the given error.
    GetCommit(ForgeError),
    /// Fail requests_for_commit with the given error.
    RequestsForCommit(ForgeError),
    /// Fail create_release with the given error.
    CreateRelease(ForgeError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    ResolveTag { tag: String },
    GetCommit { id: CommitId },
    RequestsForCommit { id: CommitId },
    CreateRelease { tag: String },
}

impl MockForge {
    /// Create a new empty mock forge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a linear commit chain.
    ///
    /// Ids are ordered oldest first: the first id becomes the root commit
    /// (no parents) and each subsequent commit's single parent is the one
    /// before it.
    pub fn seed_linear_history(&self, ids: &[&str]) {
        let mut inner = self.inner.lock().unwrap();
        let mut parent: Option<CommitId> = None;
        for id in ids {
            let id = CommitId::new(*id);
            let parents = parent.take().map(|p| vec![p]).unwrap_or_default();
            inner
                .commits
                .insert(id.clone(), Commit::new(id.clone(), parents));
            parent = Some(id);
        }
    }

    /// Add a single commit (for non-linear fixtures).
    pub fn add_commit(&self, commit: Commit) {
        let mut inner = self.inner.lock().unwrap();
        inner.commits.insert(commit.id.clone(), commit);
    }

    /// Point a tag at a commit.
    pub fn add_tag(&self, tag: &str, commit_id: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.tags.insert(tag.to_string(), CommitId::new(commit_id));
    }

    /// Associate change-requests with a commit.
    ///
    /// Commits without an association resolve to no requests; calling this
    /// twice for the same commit appends.
    pub fn associate(&self, commit_id: &str, requests: Vec<ChangeRequest>) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .requests
            .entry(CommitId::new(commit_id))
            .or_default()
            .extend(requests);
    }

    /// Configure a failure scenario.
    pub fn fail_on(&self, fail: FailOn) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = Some(fail);
    }

    /// Get the recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Get the releases created so far.
    pub fn releases(&self) -> Vec<CreateReleaseRequest> {
        self.inner.lock().unwrap().releases.clone()
    }
}

#[async_trait]
impl Forge for MockForge {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn resolve_tag(&self, tag: &str) -> Result<CommitId, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::ResolveTag {
            tag: tag.to_string(),
        });

        if let Some(FailOn::ResolveTag(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        inner
            .tags
            .get(tag)
            .cloned()
            .ok_or_else(|| ForgeError::NotFound(format!("tag {}", tag)))
    }

    async fn get_commit(&self, id: &CommitId) -> Result<Commit, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .operations
            .push(MockOperation::GetCommit { id: id.clone() });

        if let Some(FailOn::GetCommit(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        inner
            .commits
            .get(id)
            .cloned()
            .ok_or_else(|| ForgeError::NotFound(format!("commit {}", id)))
    }

    async fn requests_for_commit(
        &self,
        id: &CommitId,
    ) -> Result<Vec<ChangeRequest>, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .operations
            .push(MockOperation::RequestsForCommit { id: id.clone() });

        if let Some(FailOn::RequestsForCommit(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner.requests.get(id).cloned().unwrap_or_default())
    }

    async fn create_release(
        &self,
        request: CreateReleaseRequest,
    ) -> Result<PublishedRelease, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::CreateRelease {
            tag: request.tag.clone(),
        });

        if let Some(FailOn::CreateRelease(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let id = inner.releases.len() as u64 + 1;
        let url = format!("https://mock.forge/releases/{}", request.tag);
        inner.releases.push(request);
        Ok(PublishedRelease { id, url })
    }
}
