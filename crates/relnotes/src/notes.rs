//! Drafting the release-notes body
//!
//! Resolves the base commit, walks the range and renders it in the requested
//! output format.

use relnotes_github::{
    ApiClient, CommitRecord, GitHubError, PullRequest, Transport, commit_summary,
};
use serde_json::json;
use tracing::info;

use crate::config::OutputFormat;

/// Everything that goes into one release-notes body
#[derive(Debug, Clone, PartialEq)]
pub struct Notes {
    /// Exclusive lower bound used for the walk
    pub base: Option<String>,
    /// Commits in the range, newest first
    pub commits: Vec<CommitRecord>,
    /// Pull requests associated with the head commit, if requested
    pub pulls: Vec<PullRequest>,
}

impl Notes {
    /// Collect the notes for the client's context
    ///
    /// # Errors
    ///
    /// Fails on the first transport or decode error; nothing is retried.
    pub fn collect<T: Transport>(
        api: &ApiClient<T>,
        base: Option<&str>,
        with_pulls: bool,
    ) -> Result<Self, GitHubError> {
        let base = api.resolve_base(base)?;
        let commits = api
            .walk(base.as_deref())?
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            count = commits.len(),
            base = base.as_deref().unwrap_or("<none>"),
            "Collected commits"
        );

        let pulls = if with_pulls {
            api.fetch_related_prs()?
        } else {
            Vec::new()
        };

        Ok(Self {
            base,
            commits,
            pulls,
        })
    }

    /// Render the notes
    #[must_use]
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Markdown => self.render_markdown(),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_markdown(&self) -> String {
        let mut lines: Vec<String> = self.commits.iter().map(commit_summary).collect();
        if !self.pulls.is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push("Pull requests:".to_string());
            lines.extend(
                self.pulls
                    .iter()
                    .map(|pr| format!("- #{} {}", pr.number, pr.title)),
            );
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        let value = json!({
            "base": self.base,
            "commits": self.commits.iter().map(|c| json!({
                "sha": c.sha,
                "summary": commit_summary(c),
                "record": c,
            })).collect::<Vec<_>>(),
            "pulls": self.pulls,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relnotes_github::records::CommitData;
    use similar_asserts::assert_eq;

    fn commit(sha: &str, message: &str) -> CommitRecord {
        CommitRecord {
            sha: sha.to_string(),
            commit: CommitData {
                message: Some(message.to_string()),
                ..Default::default()
            },
            extra: Default::default(),
        }
    }

    fn pull(number: u64, title: &str) -> PullRequest {
        PullRequest {
            number,
            title: title.to_string(),
            html_url: None,
            extra: Default::default(),
        }
    }

    fn sample() -> Notes {
        Notes {
            base: Some("c460aeb7fb2d109c17e43de0ce681faec0b7374d".to_string()),
            commits: vec![
                commit("167c690247d0933acde636d72352bcd67e33724b", "Fix bug\nmore"),
                commit("1945ab9c752534e733c38ba0109dc3b741f0a6eb", "Add feature"),
            ],
            pulls: Vec::new(),
        }
    }

    #[test]
    fn test_markdown() {
        assert_eq!(
            sample().render(OutputFormat::Markdown),
            "- [167c6902] Fix bug\n- [1945ab9c] Add feature"
        );
    }

    #[test]
    fn test_markdown_with_pulls() {
        let mut notes = sample();
        notes.pulls = vec![pull(42, "Pagination")];
        assert_eq!(
            notes.render(OutputFormat::Markdown),
            "- [167c6902] Fix bug\n- [1945ab9c] Add feature\n\nPull requests:\n- #42 Pagination"
        );
    }

    #[test]
    fn test_markdown_empty() {
        let notes = Notes {
            base: None,
            commits: Vec::new(),
            pulls: Vec::new(),
        };
        assert_eq!(notes.render(OutputFormat::Markdown), "");
    }

    #[test]
    fn test_json() {
        let rendered = sample().render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["base"], "c460aeb7fb2d109c17e43de0ce681faec0b7374d");
        assert_eq!(value["commits"][0]["summary"], "- [167c6902] Fix bug");
        assert_eq!(value["commits"][1]["record"]["commit"]["message"], "Add feature");
        assert_eq!(value["pulls"], json!([]));
    }
}
