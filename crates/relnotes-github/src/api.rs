// Copyright (c) 2026 - present relnotes contributors
// SPDX-License-Identifier: MIT

//! Endpoint accessors
//!
//! Each accessor builds a [`Request`] against
//! `<api_url>/repos/<owner>/<name>`, sends it with the context's token, and
//! normalizes the response.

use tracing::{debug, info, warn};

use crate::context::Context;
use crate::error::GitHubError;
use crate::history::CommitHistory;
use crate::paginate::{Pages, PaginationOptions};
use crate::records::{CommitRecord, PullRequest, Release};
use crate::response::NormalizedResponse;
use crate::transport::{Request, Transport};

/// Outcome of the most-recent-release lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LatestRelease {
    /// The repository has at least one published release
    Found(Release),
    /// The repository has no releases (empty list or 404)
    Empty,
}

impl LatestRelease {
    /// Convert into an `Option`
    #[must_use]
    pub fn into_option(self) -> Option<Release> {
        match self {
            Self::Found(release) => Some(release),
            Self::Empty => None,
        }
    }
}

/// GitHub API accessors bound to one [`Context`] and [`Transport`]
#[derive(Debug)]
pub struct ApiClient<T: Transport> {
    ctx: Context,
    transport: T,
    pagination: PaginationOptions,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client with unbounded pagination
    pub fn new(ctx: Context, transport: T) -> Self {
        Self {
            ctx,
            transport,
            pagination: PaginationOptions::default(),
        }
    }

    /// Set pagination limits
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationOptions) -> Self {
        self.pagination = pagination;
        self
    }

    /// The context this client was built with
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The underlying transport
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, path: &str) -> Request {
        Request::get(self.ctx.repo_url(path)).token(self.ctx.token())
    }

    fn send(&self, request: &Request) -> Result<NormalizedResponse, GitHubError> {
        debug!(url = %request.target(), "Requesting");
        NormalizedResponse::from_raw(self.transport.get(request)?)
    }

    /// Pull requests associated with the context's commit
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors.
    pub fn fetch_related_prs(&self) -> Result<Vec<PullRequest>, GitHubError> {
        let request = self.request(&format!("/commits/{}/pulls", self.ctx.sha()));
        self.send(&request)?.decode_list("commit pulls")
    }

    /// The most recently published release
    ///
    /// A 404 is reported as [`LatestRelease::Empty`], not as an error.
    ///
    /// # Errors
    ///
    /// Propagates every other transport error and decode errors.
    pub fn fetch_most_recent_release(&self) -> Result<LatestRelease, GitHubError> {
        let request = self.request("/releases").query("per_page", "1");
        let response = match self.send(&request) {
            Ok(response) => response,
            Err(err) if err.is_not_found() => {
                info!(repository = %self.ctx.repository(), "No releases found");
                return Ok(LatestRelease::Empty);
            }
            Err(err) => return Err(err),
        };

        let releases: Vec<Release> = response.decode_list("releases")?;
        match releases.into_iter().next() {
            Some(release) => {
                debug!(tag = %release.tag_name, "Most recent release");
                Ok(LatestRelease::Found(release))
            }
            None => {
                info!(repository = %self.ctx.repository(), "No releases found");
                Ok(LatestRelease::Empty)
            }
        }
    }

    /// Detail of the context's commit
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors.
    pub fn fetch_commit(&self) -> Result<CommitRecord, GitHubError> {
        self.commit_at(self.ctx.sha())
    }

    /// Detail of the commit a ref (sha, branch or tag) points at
    ///
    /// The ref is percent-encoded into a single path segment.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors.
    pub fn commit_at(&self, reference: &str) -> Result<CommitRecord, GitHubError> {
        let request = self.request(&format!("/commits/{}", urlencoding::encode(reference)));
        self.send(&request)?.decode()
    }

    /// First page of the commit listing starting at the context's commit
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors.
    pub fn list_commits(&self) -> Result<NormalizedResponse, GitHubError> {
        let request = self.request("/commits").query("sha", self.ctx.sha());
        self.send(&request)
    }

    /// Every page of the commit listing, fetched lazily
    ///
    /// The first page is fetched immediately.
    ///
    /// # Errors
    ///
    /// Propagates errors from fetching the first page.
    pub fn commit_pages(&self) -> Result<Pages<'_, T>, GitHubError> {
        let first = self.list_commits()?;
        Ok(Pages::new(&self.ctx, &self.transport, first, self.pagination))
    }

    /// Commits reachable from the context's commit, newest first, stopping
    /// before `base`
    ///
    /// # Errors
    ///
    /// Propagates errors from fetching the first page.
    pub fn walk(&self, base: Option<&str>) -> Result<CommitHistory<'_, T>, GitHubError> {
        Ok(CommitHistory::new(self.commit_pages()?, base))
    }

    /// Pick the base commit for a release-notes run
    ///
    /// An explicit base wins. Otherwise the most recent release's tag is
    /// resolved to a commit; no release means no base.
    ///
    /// The history walk compares shas by string equality, so an explicit base
    /// that is not a full 40-character sha only matches an identical string.
    /// Such a base is logged at warn level and used as given.
    ///
    /// A draft release whose tag has not been pushed yet makes the tag lookup
    /// fail with a 404. That error is returned as is and aborts the run; pass
    /// an explicit base to skip the lookup.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode errors from the lookups.
    pub fn resolve_base(&self, explicit: Option<&str>) -> Result<Option<String>, GitHubError> {
        if let Some(base) = explicit {
            if !CommitRecord::is_valid_sha(base) {
                warn!(%base, "Base is not a full 40-character sha; it only matches an identical sha");
            }
            return Ok(Some(base.to_string()));
        }

        match self.fetch_most_recent_release()? {
            LatestRelease::Found(release) => {
                let commit = self.commit_at(&release.tag_name)?;
                info!(tag = %release.tag_name, sha = %commit.sha, "Using most recent release as base");
                Ok(Some(commit.sha))
            }
            LatestRelease::Empty => Ok(None),
        }
    }
}
