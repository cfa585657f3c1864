//! Configuration for the relnotes binary
//!
//! Every option can come from the command line or from the environment
//! variables GitHub Actions already sets for a workflow step.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use relnotes_github::context::DEFAULT_API_URL;
use relnotes_github::{Context, GitHubError, PaginationOptions};

/// Draft release notes from the commits since the last GitHub release
#[derive(Parser, Debug, Clone)]
#[command(name = "relnotes")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Repository as `owner/name`
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Commit to generate notes for (newest commit of the range)
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: String,

    /// Access token sent as `Authorization: token <value>`
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Exclusive lower bound of the range
    ///
    /// Defaults to the commit of the most recent published release. Without
    /// any release the whole history reachable from `--sha` is used.
    #[arg(long)]
    pub base: Option<String>,

    /// Give up after this many pages of commits instead of walking forever
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Also list the pull requests associated with `--sha`
    #[arg(long, default_value = "false")]
    pub pulls: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout carries only the notes.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How the notes are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `- [sha] title` line per commit
    #[default]
    Markdown,
    /// A JSON document with the base, commits and pull requests
    Json,
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository is not `owner/name`
    /// - `--max-pages` or `--timeout` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Context::is_valid_repository(&self.repository) {
            return Err(ConfigError::InvalidRepository(self.repository.clone()));
        }
        if self.max_pages == Some(0) {
            return Err(ConfigError::ZeroPageLimit);
        }
        if self.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Build the immutable API context
    ///
    /// # Errors
    ///
    /// Returns `GitHubError` if the repository or sha is rejected.
    pub fn context(&self) -> Result<Context, GitHubError> {
        Context::new(&self.api_url, &self.repository, &self.sha, &self.token)
    }

    /// Pagination limits derived from `--max-pages`
    #[must_use]
    pub fn pagination(&self) -> PaginationOptions {
        PaginationOptions {
            max_pages: self.max_pages,
        }
    }

    /// Request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository is not `owner/name`
    #[error("Repository must be owner/name, got: {0}")]
    InvalidRepository(String),

    /// `--max-pages 0` would never yield a page
    #[error("--max-pages must be at least 1")]
    ZeroPageLimit,

    /// `--timeout 0` would fail every request
    #[error("--timeout must be at least 1 second")]
    ZeroTimeout,
}
