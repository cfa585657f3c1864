//! Payload records
//!
//! Only the fields this crate reads are typed. Everything else GitHub sends is
//! kept in an opaque `extra` map and passed through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A commit as returned by the commits endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit SHA (40 hex characters); identity of the record
    pub sha: String,
    /// Git-level commit data
    #[serde(default)]
    pub commit: CommitData,
    /// Remaining fields (author, committer, parents, urls, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `commit` object nested in a [`CommitRecord`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitData {
    /// Full commit message, possibly multi-line
    #[serde(default)]
    pub message: Option<String>,
    /// Remaining fields (author, committer, tree, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CommitRecord {
    /// Commit message, or the empty string if GitHub sent none
    #[must_use]
    pub fn message(&self) -> &str {
        self.commit.message.as_deref().unwrap_or("")
    }

    /// Check that a SHA is a 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }
}

/// A published release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Git tag the release points at
    pub tag_name: String,
    /// Release title
    #[serde(default)]
    pub name: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A pull request associated with a commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    #[serde(default)]
    pub title: String,
    /// Browser URL
    #[serde(default)]
    pub html_url: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use similar_asserts::assert_eq;

    #[test]
    fn test_commit_record_keeps_unknown_fields() {
        let value = json!({
            "sha": "167c690247d0933acde636d72352bcd67e33724b",
            "commit": {"message": "Fix bug\nmore detail", "author": {"name": "octo"}},
            "parents": [{"sha": "c460aeb7fb2d109c17e43de0ce681faec0b7374d"}],
        });
        let record: CommitRecord = serde_json::from_value(value).expect("decode");
        assert_eq!(record.message(), "Fix bug\nmore detail");
        assert!(record.extra.contains_key("parents"));
        assert!(record.commit.extra.contains_key("author"));
    }

    #[test]
    fn test_commit_record_without_commit_object() {
        let record: CommitRecord =
            serde_json::from_value(json!({"sha": "abc"})).expect("decode");
        assert_eq!(record.message(), "");
    }

    #[test]
    fn test_commit_record_null_message() {
        let record: CommitRecord =
            serde_json::from_value(json!({"sha": "abc", "commit": {"message": null}}))
                .expect("decode");
        assert_eq!(record.message(), "");
    }

    #[test]
    fn test_commit_record_requires_sha() {
        let result: Result<CommitRecord, _> =
            serde_json::from_value(json!({"commit": {"message": "x"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_is_valid_sha() {
        assert!(CommitRecord::is_valid_sha(
            "167c690247d0933acde636d72352bcd67e33724b"
        ));
        assert!(!CommitRecord::is_valid_sha("167c690"));
        assert!(!CommitRecord::is_valid_sha(
            "167c690247d0933acde636d72352bcd67e33724g"
        ));
    }

    #[test]
    fn test_release_decode() {
        let release: Release = serde_json::from_value(json!({
            "tag_name": "v1.2.0",
            "name": "1.2.0",
            "draft": false,
        }))
        .expect("decode");
        assert_eq!(release.tag_name, "v1.2.0");
        assert_eq!(release.name.as_deref(), Some("1.2.0"));
        assert_eq!(release.extra.get("draft"), Some(&json!(false)));
    }

    #[test]
    fn test_pull_request_decode() {
        let pr: PullRequest = serde_json::from_value(json!({
            "number": 42,
            "title": "Add pagination",
            "html_url": "https://github.com/octo/hello/pull/42",
            "state": "closed",
        }))
        .expect("decode");
        assert_eq!(pr.number, 42);
        assert_eq!(pr.title, "Add pagination");
        assert_eq!(pr.extra.get("state"), Some(&json!("closed")));
    }
}
