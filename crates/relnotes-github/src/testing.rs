//! In-memory transport for tests
//!
//! [`MockTransport`] serves canned responses keyed by the full request target
//! (URL plus query string) and records every request it receives, so tests can
//! assert exactly which pages were fetched and in what order.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::GitHubError;
use crate::transport::{RawResponse, Request, Transport};

/// Canned-response transport
///
/// Unknown targets answer with 404, matching what GitHub does for a missing
/// resource.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<HashMap<String, RawResponse>>,
    requests: RefCell<Vec<Request>>,
}

impl MockTransport {
    /// Create an empty mock
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for `target`
    pub fn respond(&self, target: &str, response: RawResponse) {
        self.responses
            .borrow_mut()
            .insert(target.to_string(), response);
    }

    /// Serve an empty body with the given status for `target`
    pub fn respond_status(&self, target: &str, status: u16) {
        let mut response = RawResponse::ok("");
        response.status = status;
        self.respond(target, response);
    }

    /// All requests received, in order
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    /// Targets of all requests received, in order
    #[must_use]
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(Request::target).collect()
    }

    /// Number of requests received
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    fn get(&self, request: &Request) -> Result<RawResponse, GitHubError> {
        self.requests.borrow_mut().push(request.clone());

        let target = request.target();
        let response = self
            .responses
            .borrow()
            .get(&target)
            .cloned()
            .ok_or_else(|| GitHubError::Status {
                status: 404,
                url: target.clone(),
            })?;
        response.error_for_status(&target)
    }
}
