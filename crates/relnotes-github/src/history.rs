// Copyright (c) 2026 - present relnotes contributors
// SPDX-License-Identifier: MIT

//! Commit range traversal
//!
//! [`CommitHistory`] flattens the pages of a commit listing into a single
//! stream of [`CommitRecord`]s, newest first, and stops just before the base
//! commit. Pages are pulled from the underlying [`Pages`] iterator only when
//! the current page is used up, so the page after the one holding the base
//! is never requested.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::GitHubError;
use crate::paginate::Pages;
use crate::records::CommitRecord;
use crate::transport::Transport;

/// Lazy stream of the commits between a head and an optional base
///
/// Yields `Ok(commit)` in API order. Iteration ends when the base commit is
/// reached (it is not yielded), when the history runs out, or after the first
/// error.
pub struct CommitHistory<'a, T: Transport + ?Sized> {
    pages: Pages<'a, T>,
    buffer: VecDeque<CommitRecord>,
    base: Option<String>,
    done: bool,
}

impl<'a, T: Transport + ?Sized> CommitHistory<'a, T> {
    /// Walk `pages`, stopping before `base`
    pub fn new(pages: Pages<'a, T>, base: Option<&str>) -> Self {
        Self {
            pages,
            buffer: VecDeque::new(),
            base: base.map(str::to_string),
            done: false,
        }
    }

    /// Number of pages consumed so far
    #[must_use]
    pub fn pages_consumed(&self) -> usize {
        self.pages.pages_yielded()
    }

    fn is_base(&self, commit: &CommitRecord) -> bool {
        self.base.as_deref() == Some(commit.sha.as_str())
    }
}

impl<T: Transport + ?Sized> Iterator for CommitHistory<'_, T> {
    type Item = Result<CommitRecord, GitHubError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(commit) = self.buffer.pop_front() {
                if self.is_base(&commit) {
                    debug!(sha = %commit.sha, "Reached base commit");
                    self.done = true;
                    self.buffer.clear();
                    return None;
                }
                return Some(Ok(commit));
            }

            match self.pages.next()? {
                Ok(page) => match page.decode_list::<CommitRecord>("commits") {
                    Ok(commits) => {
                        debug!(count = commits.len(), "Commit page");
                        self.buffer.extend(commits);
                    }
                    Err(err) => {
                        self.done = true;
                        return Some(Err(err));
                    }
                },
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<T: Transport + ?Sized> std::iter::FusedIterator for CommitHistory<'_, T> {}
