// Copyright (c) 2026 - present relnotes contributors
// SPDX-License-Identifier: MIT

//! Lazy `Link: rel="next"` pagination
//!
//! [`Pages`] starts from an already-fetched first page and follows `next`
//! links one at a time, only when the consumer asks for another page. The
//! absence of a `next` relation is the only end-of-stream signal; an empty
//! body does not stop iteration.

use tracing::debug;

use crate::context::Context;
use crate::error::GitHubError;
use crate::response::NormalizedResponse;
use crate::transport::{Request, Transport};

/// Pagination limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Maximum number of pages to yield, first page included
    ///
    /// `None` follows `next` links until they run out.
    pub max_pages: Option<usize>,
}

impl PaginationOptions {
    /// No page cap
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Stop with `GitHubError::PageLimitExceeded` instead of fetching page `n + 1`
    #[must_use]
    pub fn max_pages(n: usize) -> Self {
        Self { max_pages: Some(n) }
    }
}

/// Iterator over a paginated listing
///
/// Yields `Ok(page)` for each page in link order. After the first error the
/// iterator is fused and yields `None`.
pub struct Pages<'a, T: Transport + ?Sized> {
    ctx: &'a Context,
    transport: &'a T,
    options: PaginationOptions,
    first: Option<NormalizedResponse>,
    next_url: Option<String>,
    yielded: usize,
    done: bool,
}

impl<'a, T: Transport + ?Sized> Pages<'a, T> {
    /// Start paginating from `first`
    ///
    /// Nothing is fetched until the second call to `next()`.
    pub fn new(
        ctx: &'a Context,
        transport: &'a T,
        first: NormalizedResponse,
        options: PaginationOptions,
    ) -> Self {
        Self {
            ctx,
            transport,
            options,
            first: Some(first),
            next_url: None,
            yielded: 0,
            done: false,
        }
    }

    /// Number of pages yielded so far
    #[must_use]
    pub fn pages_yielded(&self) -> usize {
        self.yielded
    }

    fn emit(&mut self, page: NormalizedResponse) -> Option<Result<NormalizedResponse, GitHubError>> {
        self.next_url = page.next_url().map(str::to_string);
        self.yielded += 1;
        Some(Ok(page))
    }

    fn fail(&mut self, err: GitHubError) -> Option<Result<NormalizedResponse, GitHubError>> {
        self.done = true;
        self.next_url = None;
        Some(Err(err))
    }
}

impl<T: Transport + ?Sized> Iterator for Pages<'_, T> {
    type Item = Result<NormalizedResponse, GitHubError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(first) = self.first.take() {
            return self.emit(first);
        }

        let Some(url) = self.next_url.take() else {
            self.done = true;
            return None;
        };

        if let Some(limit) = self.options.max_pages {
            if self.yielded >= limit {
                return self.fail(GitHubError::PageLimitExceeded { limit });
            }
        }

        debug!(page = self.yielded + 1, %url, "Following next link");
        let request = Request::get(url).token(self.ctx.token());
        let page = self
            .transport
            .get(&request)
            .and_then(NormalizedResponse::from_raw);
        match page {
            Ok(page) => self.emit(page),
            Err(err) => self.fail(err),
        }
    }
}

impl<T: Transport + ?Sized> std::iter::FusedIterator for Pages<'_, T> {}

/// Paginate from an already-normalized first response
pub fn paginate<'a, T: Transport + ?Sized>(
    ctx: &'a Context,
    transport: &'a T,
    first: NormalizedResponse,
    options: PaginationOptions,
) -> Pages<'a, T> {
    Pages::new(ctx, transport, first, options)
}
