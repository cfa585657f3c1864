//! One-line commit formatting for release notes

use crate::error::GitHubError;
use crate::records::CommitRecord;

/// Number of SHA characters shown in a summary line
pub const SHORT_SHA_LEN: usize = 8;

/// First line of the commit message; empty if there is no message
#[must_use]
pub fn commit_title(commit: &CommitRecord) -> &str {
    commit.message().split('\n').next().unwrap_or("")
}

/// `- [<short sha>] <title>`
#[must_use]
pub fn commit_summary(commit: &CommitRecord) -> String {
    let short = commit.sha.get(..SHORT_SHA_LEN).unwrap_or(&commit.sha);
    format!("- [{short}] {}", commit_title(commit))
}

/// Summary lines for a stream of commits, stopping at the first error
///
/// # Errors
///
/// Returns the first error produced by `commits`.
pub fn commit_summaries<I>(commits: I) -> Result<Vec<String>, GitHubError>
where
    I: IntoIterator<Item = Result<CommitRecord, GitHubError>>,
{
    commits
        .into_iter()
        .map(|commit| commit.map(|c| commit_summary(&c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CommitData;
    use similar_asserts::assert_eq;

    fn commit(sha: &str, message: Option<&str>) -> CommitRecord {
        CommitRecord {
            sha: sha.to_string(),
            commit: CommitData {
                message: message.map(str::to_string),
                ..Default::default()
            },
            extra: Default::default(),
        }
    }

    #[test]
    fn test_summary() {
        let c = commit(
            "167c690247d0933acde636d72352bcd67e33724b",
            Some("Fix bug\nmore detail"),
        );
        assert_eq!(commit_summary(&c), "- [167c6902] Fix bug");
    }

    #[test]
    fn test_title_single_line() {
        let c = commit("abc", Some("Simple message"));
        assert_eq!(commit_title(&c), "Simple message");
    }

    #[test]
    fn test_title_missing_message() {
        let c = commit("abc", None);
        assert_eq!(commit_title(&c), "");
    }

    #[test]
    fn test_title_keeps_carriage_return() {
        let c = commit("abc", Some("Windows line\r\nbody"));
        assert_eq!(commit_title(&c), "Windows line\r");
    }

    #[test]
    fn test_summary_short_sha_input() {
        let c = commit("abc", Some("Tiny"));
        assert_eq!(commit_summary(&c), "- [abc] Tiny");
    }

    #[test]
    fn test_summaries_stop_at_error() {
        let items = vec![
            Ok(commit("1111111111", Some("one"))),
            Err(GitHubError::InvalidSha),
            Ok(commit("2222222222", Some("two"))),
        ];
        assert!(commit_summaries(items).is_err());
    }

    #[test]
    fn test_summaries_in_order() {
        let items = vec![
            Ok(commit("1111111111", Some("one"))),
            Ok(commit("2222222222", Some("two\nbody"))),
        ];
        assert_eq!(
            commit_summaries(items).expect("summaries"),
            vec!["- [11111111] one".to_string(), "- [22222222] two".to_string()]
        );
    }
}
