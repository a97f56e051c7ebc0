//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`CommitId`] - Opaque commit identifier (SHA)
//! - [`Commit`] - A commit with its parent links
//! - [`ChangeRequest`] - A merged-change record fetched from the forge
//! - [`Section`] - A named changelog bucket defined by qualifying labels
//!
//! # Identity
//!
//! A `ChangeRequest` is identified by its `number`; two records with the
//! same number are the same logical request regardless of how (or how many
//! times) they were fetched.
//!
//! # Examples
//!
//! ```
//! use relnote::core::types::{CommitId, Section};
//!
//! let id = CommitId::new("abc123def4567890abc123def4567890abc12345");
//! assert_eq!(id.short(), "abc123d");
//!
//! let section = Section::new("Features", ["feat", "enhancement"]);
//! assert!(section.matches("feat"));
//! assert!(!section.matches("bug"));
//! ```

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque commit identifier.
///
/// Commit ids are treated as opaque strings: the forge hands them out and
/// the walker hands them back. No hex validation is applied, so test
/// fixtures can use readable ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Create a new commit id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get an abbreviated form of the id.
    ///
    /// Returns the first 7 characters, or the full id if shorter.
    pub fn short(&self) -> &str {
        if self.0.len() > 7 {
            &self.0[..7]
        } else {
            &self.0
        }
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A commit node in version history.
///
/// Immutable once fetched; exists only for the duration of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The commit id.
    pub id: CommitId,
    /// Parent commit ids, in order.
    pub parents: Vec<CommitId>,
}

impl Commit {
    /// Create a commit with the given id and parents.
    pub fn new(id: impl Into<CommitId>, parents: Vec<CommitId>) -> Self {
        Self {
            id: id.into(),
            parents,
        }
    }
}

/// A merged-change record (pull request) fetched from the forge.
///
/// Identity is `number`: the deduplication stage collapses records that
/// share one. The snapshot is immutable after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// Request number (unique key within a repository).
    pub number: u64,
    /// Request title.
    pub title: String,
    /// Web URL for viewing the request.
    pub url: String,
    /// Labels, in the order the forge reports them.
    pub labels: Vec<String>,
    /// When the request was merged, if known.
    pub merged_at: Option<DateTime<Utc>>,
}

impl ChangeRequest {
    /// The label used for classification: the first label, or the empty
    /// label when the request carries none.
    pub fn first_label(&self) -> &str {
        self.labels.first().map(String::as_str).unwrap_or("")
    }
}

/// A named changelog bucket defined by a set of qualifying labels.
///
/// Sections come from configuration and are never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section title (unique within a configuration).
    pub title: String,
    /// Labels that route a request into this section.
    pub labels: BTreeSet<String>,
}

impl Section {
    /// Create a section from a title and labels.
    pub fn new<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a label routes into this section.
    pub fn matches(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}
