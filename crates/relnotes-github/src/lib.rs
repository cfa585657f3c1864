// Copyright (c) 2026 - present relnotes contributors
// SPDX-License-Identifier: MIT

//! relnotes-github: commit-range traversal over the GitHub REST API
//!
//! This library crate finds the commits between the most recent release and a
//! given commit, following `Link: rel="next"` pagination lazily so that no
//! page past the base commit is ever requested.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use relnotes_github::{ApiClient, Context, HttpTransport, commit_summary};
//!
//! let ctx = Context::new(
//!     "https://api.github.com",
//!     "octo/hello",
//!     "167c690247d0933acde636d72352bcd67e33724b",
//!     "ghp_token",
//! )
//! .expect("valid context");
//! let api = ApiClient::new(ctx, HttpTransport::new(Duration::from_secs(30)).expect("client"));
//!
//! let base = api.resolve_base(None).expect("base lookup");
//! for commit in api.walk(base.as_deref()).expect("first page") {
//!     println!("{}", commit_summary(&commit.expect("commit")));
//! }
//! ```

pub mod api;
pub mod context;
pub mod error;
pub mod format;
pub mod history;
pub mod link;
pub mod paginate;
pub mod records;
pub mod response;
pub mod testing;
pub mod transport;

pub use api::{ApiClient, LatestRelease};
pub use context::Context;
pub use error::GitHubError;
pub use format::{commit_summaries, commit_summary, commit_title};
pub use history::CommitHistory;
pub use link::LinkMap;
pub use paginate::{Pages, PaginationOptions, paginate};
pub use records::{CommitRecord, PullRequest, Release};
pub use response::NormalizedResponse;
pub use transport::{HttpTransport, RawResponse, Request, Transport};
