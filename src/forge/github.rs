//! forge::github
//!
//! GitHub forge implementation using the REST API.
//!
//! # Design
//!
//! This module implements the `Forge` trait for GitHub:
//! - `GET git/ref/tags/{tag}` to resolve a tag to an object id
//! - `GET git/commits/{sha}` to fetch a commit with its parents
//! - `GET commits/{sha}/pulls` to list associated pull requests
//! - `POST releases` to publish the rendered changelog
//!
//! # Authentication
//!
//! A personal access token (or Actions token) is sent as a bearer token.
//! Reads against public repositories work without one, at a much lower
//! rate limit, so the token is optional; release creation always needs it
//! and fails with `AuthRequired` otherwise.
//!
//! # Rate Limiting
//!
//! GitHub has rate limits. This implementation returns
//! `ForgeError::RateLimited` when limits are hit and does not retry —
//! re-running the whole pipeline is the caller's responsibility.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::traits::{CreateReleaseRequest, Forge, ForgeError, PublishedRelease};
use crate::core::types::{ChangeRequest, Commit, CommitId};

/// Default GitHub API base URL.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "relnote-cli";

/// GitHub forge implementation.
///
/// # Example
///
/// ```
/// use relnote::forge::github::GitHubForge;
/// use relnote::forge::Forge;
///
/// let forge = GitHubForge::new("ghp_xxx", "octocat", "hello-world");
/// assert_eq!(forge.name(), "github");
/// ```
pub struct GitHubForge {
    /// HTTP client for making requests
    client: Client,
    /// Bearer token; `None` for anonymous reads
    token: Option<String>,
    /// Repository owner (user or organization)
    owner: String,
    /// Repository name
    repo: String,
    /// API base URL (configurable for GitHub Enterprise and tests)
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubForge")
            .field("has_token", &self.token.is_some())
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitHubForge {
    /// Create a new GitHub forge with a token.
    ///
    /// # Arguments
    ///
    /// * `token` - Personal access token or Actions token
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    pub fn new(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            token: Some(token.into()),
            owner: owner.into(),
            repo: repo.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create a forge without a token.
    ///
    /// Reads against public repositories work anonymously; release
    /// creation will fail with `AuthRequired`.
    pub fn unauthenticated(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: None,
            owner: owner.into(),
            repo: repo.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create a forge with a custom API base URL.
    ///
    /// Use this for GitHub Enterprise installations
    /// (e.g., `https://github.example.com/api/v3`) or tests.
    pub fn with_api_base(
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            token: Some(token.into()),
            owner: owner.into(),
            repo: repo.into(),
            api_base: api_base.into(),
        }
    }

    /// Get the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Check if this forge has a token.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build common headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers
    }

    /// Build URL for a repository endpoint.
    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_base, self.owner, self.repo, path
        )
    }

    /// Issue a GET request and parse the JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ForgeError> {
        let response = self
            .client
            .get(url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            Err(Self::error_for(response, status).await)
        }
    }

    /// Map an error response from the API.
    async fn error_for(response: Response, status: StatusCode) -> ForgeError {
        // Secondary rate limits answer 403 with a Retry-After header.
        let retry_after = response.headers().contains_key("Retry-After");

        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("Invalid or expired token".into()),
            StatusCode::FORBIDDEN if retry_after => ForgeError::RateLimited,
            StatusCode::FORBIDDEN => {
                ForgeError::AuthFailed(format!("Permission denied: {}", message))
            }
            StatusCode::NOT_FOUND => ForgeError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
            _ if status.is_server_error() => ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("GitHub server error: {}", message),
            },
            _ => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl Forge for GitHubForge {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn resolve_tag(&self, tag: &str) -> Result<CommitId, ForgeError> {
        let url = self.repo_url(&format!("git/ref/tags/{}", tag));
        let reference: GitRefResponse = self.get_json(&url).await?;
        Ok(CommitId::new(reference.object.sha))
    }

    async fn get_commit(&self, id: &CommitId) -> Result<Commit, ForgeError> {
        let url = self.repo_url(&format!("git/commits/{}", id));
        let commit: GitCommitResponse = self.get_json(&url).await?;
        Ok(commit.into())
    }

    async fn requests_for_commit(
        &self,
        id: &CommitId,
    ) -> Result<Vec<ChangeRequest>, ForgeError> {
        let url = self.repo_url(&format!("commits/{}/pulls", id));
        let pulls: Vec<GitHubPullRequestItem> = self.get_json(&url).await?;
        Ok(pulls.into_iter().map(Into::into).collect())
    }

    async fn create_release(
        &self,
        request: CreateReleaseRequest,
    ) -> Result<PublishedRelease, ForgeError> {
        if self.token.is_none() {
            return Err(ForgeError::AuthRequired);
        }

        let url = self.repo_url("releases");
        let body = CreateReleaseBody {
            tag_name: &request.tag,
            name: &request.title,
            body: &request.body,
            draft: request.draft,
            prerelease: request.prerelease,
        };

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let release: GitHubReleaseResponse = self.handle_response(response).await?;
        Ok(release.into())
    }
}

// --------------------------------------------------------------------------
// API Request/Response Types
// --------------------------------------------------------------------------

/// Request body for creating a release.
#[derive(Serialize)]
struct CreateReleaseBody<'a> {
    tag_name: &'a str,
    name: &'a str,
    body: &'a str,
    draft: bool,
    prerelease: bool,
}

/// GitHub error response format.
#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

/// GitHub ref response format (`git/ref/tags/{tag}`).
#[derive(Deserialize)]
struct GitRefResponse {
    object: GitRefObject,
}

/// The object a ref points at.
#[derive(Deserialize)]
struct GitRefObject {
    sha: String,
}

/// GitHub commit response format (`git/commits/{sha}`).
#[derive(Deserialize)]
struct GitCommitResponse {
    sha: String,
    parents: Vec<GitParent>,
}

/// A parent link in a commit response.
#[derive(Deserialize)]
struct GitParent {
    sha: String,
}

impl From<GitCommitResponse> for Commit {
    fn from(commit: GitCommitResponse) -> Self {
        Commit {
            id: CommitId::new(commit.sha),
            parents: commit.parents.into_iter().map(|p| CommitId::new(p.sha)).collect(),
        }
    }
}

/// GitHub pull request list item (`commits/{sha}/pulls`).
///
/// Only the fields the changelog needs are parsed.
#[derive(Deserialize)]
struct GitHubPullRequestItem {
    number: u64,
    title: String,
    html_url: String,
    labels: Vec<GitHubLabel>,
    merged_at: Option<DateTime<Utc>>,
}

/// A label on a pull request.
#[derive(Deserialize)]
struct GitHubLabel {
    name: String,
}

impl From<GitHubPullRequestItem> for ChangeRequest {
    fn from(item: GitHubPullRequestItem) -> Self {
        ChangeRequest {
            number: item.number,
            title: item.title,
            url: item.html_url,
            labels: item.labels.into_iter().map(|l| l.name).collect(),
            merged_at: item.merged_at,
        }
    }
}

/// GitHub release response format.
#[derive(Deserialize)]
struct GitHubReleaseResponse {
    id: u64,
    html_url: String,
}

impl From<GitHubReleaseResponse> for PublishedRelease {
    fn from(release: GitHubReleaseResponse) -> Self {
        PublishedRelease {
            id: release.id,
            url: release.html_url,
        }
    }
}
