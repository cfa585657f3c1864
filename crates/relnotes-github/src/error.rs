// Copyright (c) 2026 - present relnotes contributors
// SPDX-License-Identifier: MIT

//! Error types for relnotes-github

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The server answered with a non-2xx status
    #[error("GitHub returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        /// The URL that was requested
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON, or did not fit the expected record
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body decoded but had the wrong overall shape
    #[error("Unexpected payload from {endpoint}: expected {expected}")]
    UnexpectedPayload {
        /// Endpoint description, e.g. `commits`
        endpoint: &'static str,
        /// What shape was expected, e.g. `an array`
        expected: &'static str,
    },

    /// Repository identifier is not of the form `owner/name`
    #[error("Invalid repository identifier: {repository} (expected owner/name)")]
    InvalidRepository {
        /// The rejected identifier
        repository: String,
    },

    /// Commit identifier is empty
    #[error("Commit sha must not be empty")]
    InvalidSha,

    /// Pagination reached the configured page cap before the history ended
    #[error("Pagination stopped after {limit} pages; raise the page limit to continue")]
    PageLimitExceeded {
        /// The configured cap
        limit: usize,
    },
}

impl GitHubError {
    /// HTTP status carried by this error, if it came from a response
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error is a 404 response
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_status_exposed() {
        let err = GitHubError::Status {
            status: 500,
            url: "https://api.github.com/x".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = GitHubError::Status {
            status: 404,
            url: "https://api.github.com/x".to_string(),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        assert_eq!(GitHubError::InvalidSha.status(), None);
        assert_eq!(GitHubError::PageLimitExceeded { limit: 3 }.status(), None);
    }

    #[test]
    fn test_display_mentions_status_and_url() {
        let err = GitHubError::Status {
            status: 502,
            url: "https://example.test/repos/a/b".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("https://example.test/repos/a/b"));
    }
}
