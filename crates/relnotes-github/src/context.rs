//! Invocation context shared by every API call

use crate::error::GitHubError;

/// Default GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Immutable per-run configuration: where to talk to, which repository,
/// which commit to start from and which credential to present.
#[derive(Clone, PartialEq, Eq)]
pub struct Context {
    api_url: String,
    repository: String,
    sha: String,
    token: String,
}

impl Context {
    /// Build a context, validating the repository identifier and sha
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidRepository` unless `repository` is exactly
    /// two non-empty `/`-separated segments, and `GitHubError::InvalidSha` if
    /// `sha` is empty.
    pub fn new(
        api_url: impl Into<String>,
        repository: impl Into<String>,
        sha: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, GitHubError> {
        let repository = repository.into();
        if !Self::is_valid_repository(&repository) {
            return Err(GitHubError::InvalidRepository { repository });
        }

        let sha = sha.into();
        if sha.trim().is_empty() {
            return Err(GitHubError::InvalidSha);
        }

        let api_url = api_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            api_url,
            repository,
            sha,
            token: token.into(),
        })
    }

    /// Check that a repository identifier has the `owner/name` shape
    #[must_use]
    pub fn is_valid_repository(repository: &str) -> bool {
        let mut parts = repository.split('/');
        matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        )
    }

    /// API base URL, without a trailing slash
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Repository identifier (`owner/name`)
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Commit the traversal starts from
    #[must_use]
    pub fn sha(&self) -> &str {
        &self.sha
    }

    /// Access token presented on every request
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// `<api_url>/repos/<owner>/<name>` followed by `path`
    #[must_use]
    pub fn repo_url(&self, path: &str) -> String {
        format!("{}/repos/{}{}", self.api_url, self.repository, path)
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("api_url", &self.api_url)
            .field("repository", &self.repository)
            .field("sha", &self.sha)
            .field("token", &"<redacted>")
            .finish()
    }
}
