//! forge::traits
//!
//! Forge trait definition for interacting with remote hosting services.
//!
//! # Design
//!
//! The `Forge` trait is async because forge operations involve network I/O.
//! All methods return `Result` to handle API errors gracefully. The
//! changelog pipeline only ever talks to the forge through this trait, so
//! tests run against [`MockForge`] without touching the network.
//!
//! [`MockForge`]: crate::forge::mock::MockForge
//!
//! # Example
//!
//! ```ignore
//! use relnote::forge::{CreateReleaseRequest, Forge};
//!
//! async fn publish(forge: &dyn Forge, body: String) -> Result<(), ForgeError> {
//!     let release = forge.create_release(CreateReleaseRequest {
//!         tag: "v1.2.0".to_string(),
//!         title: "v1.2.0".to_string(),
//!         body,
//!         draft: true,
//!         prerelease: false,
//!     }).await?;
//!     println!("created release: {}", release.url);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::{ChangeRequest, Commit, CommitId};

/// Errors from forge operations.
///
/// These error types map to common failure modes when interacting
/// with remote hosting services like GitHub.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Request to create a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReleaseRequest {
    /// Tag the release is attached to.
    pub tag: String,
    /// Release title.
    pub title: String,
    /// Release body (the rendered changelog).
    pub body: String,
    /// Create as a draft release.
    pub draft: bool,
    /// Mark as a prerelease.
    pub prerelease: bool,
}

/// A release created on the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedRelease {
    /// Release id assigned by the forge.
    pub id: u64,
    /// Web URL for viewing the release.
    pub url: String,
}

/// The Forge trait for interacting with remote hosting services.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, ForgeError>`. Callers should handle:
/// - `AuthRequired` / `AuthFailed`: Provide or fix the token
/// - `NotFound`: Resource doesn't exist (bad tag, bad commit id)
/// - `RateLimited`: Back off and re-run
/// - `ApiError`: Display error message to user
/// - `NetworkError`: Check connectivity
///
/// The changelog core never retries: a failed call fails the run, and the
/// invoking harness re-triggers the whole pipeline if desired.
#[async_trait]
pub trait Forge: Send + Sync {
    /// Get the forge name (e.g., "github").
    fn name(&self) -> &'static str;

    /// Resolve a tag name to the commit id it points at.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the tag doesn't exist
    async fn resolve_tag(&self, tag: &str) -> Result<CommitId, ForgeError>;

    /// Fetch a single commit with its parent links.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the commit doesn't exist
    async fn get_commit(&self, id: &CommitId) -> Result<Commit, ForgeError>;

    /// List the change-requests associated with a commit.
    ///
    /// Returns an empty vector when no request references the commit;
    /// multiple associated requests are all returned.
    async fn requests_for_commit(&self, id: &CommitId)
        -> Result<Vec<ChangeRequest>, ForgeError>;

    /// Create a release.
    ///
    /// # Errors
    ///
    /// - `AuthRequired` / `AuthFailed` if the token is missing or invalid
    /// - `ApiError` with status 422 if validation fails (e.g., a release
    ///   for the tag already exists)
    async fn create_release(
        &self,
        request: CreateReleaseRequest,
    ) -> Result<PublishedRelease, ForgeError>;
}
