// Copyright (c) 2026 - present relnotes contributors
// SPDX-License-Identifier: MIT

//! HTTP transport seam
//!
//! Everything above this module works with [`Request`] descriptors and
//! [`RawResponse`] values. [`HttpTransport`] is the production implementation
//! over a blocking `reqwest` client; tests substitute
//! [`MockTransport`](crate::testing::MockTransport).

use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;

use crate::error::GitHubError;

/// User agent sent with every request; GitHub rejects requests without one
pub const USER_AGENT: &str = concat!("relnotes/", env!("CARGO_PKG_VERSION"));

/// Description of a GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Absolute URL, possibly already carrying a query string
    pub url: String,
    /// Extra request headers
    pub headers: Vec<(String, String)>,
    /// Query parameters appended to `url`
    pub query: Vec<(String, String)>,
}

impl Request {
    /// A GET for `url` with no headers or query parameters
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Add a request header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Attach the `Authorization: token <value>` credential
    #[must_use]
    pub fn token(self, token: &str) -> Self {
        self.header("Authorization", format!("token {token}"))
    }

    /// The URL with query parameters appended, unencoded
    ///
    /// Used for logging and as the lookup key in the mock transport.
    #[must_use]
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{sep}{query}", self.url)
    }
}

/// Response as delivered by the transport, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, names lower-cased
    pub headers: HashMap<String, String>,
    /// Response body text
    pub body: String,
}

impl RawResponse {
    /// A 200 response with the given body and no headers
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Add a header, lower-casing its name
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convert a non-2xx response into `GitHubError::Status`
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::Status` carrying the status and `url`.
    pub fn error_for_status(self, url: &str) -> Result<Self, GitHubError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(GitHubError::Status {
                status: self.status,
                url: url.to_string(),
            })
        }
    }
}

/// Capability to perform a GET request
///
/// Implementations must report non-2xx statuses as `GitHubError::Status` so
/// callers can special-case individual codes.
pub trait Transport {
    /// Perform the request and return the raw response
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::Status` for non-2xx responses and
    /// `GitHubError::Http` when no response was received.
    fn get(&self, request: &Request) -> Result<RawResponse, GitHubError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &Request) -> Result<RawResponse, GitHubError> {
        (**self).get(request)
    }
}

/// Blocking `reqwest` transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given request timeout
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::Http` if the client cannot be built (for example,
    /// when no TLS backend is available).
    pub fn new(timeout: Duration) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| GitHubError::Http {
                url: String::new(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, request: &Request) -> Result<RawResponse, GitHubError> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        let http_err = |source| GitHubError::Http {
            url: request.url.clone(),
            source,
        };
        let response = builder.send().map_err(http_err)?;

        let status = response.status();
        let headers = collect_headers(response.headers());
        let body = response.text().map_err(http_err)?;

        into_raw(status, headers, body, &request.target())
    }
}

/// Copy response headers, lower-cased names and all
///
/// Values that are not visible ASCII are skipped.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

fn into_raw(
    status: StatusCode,
    headers: HashMap<String, String>,
    body: String,
    target: &str,
) -> Result<RawResponse, GitHubError> {
    RawResponse {
        status: status.as_u16(),
        headers,
        body,
    }
    .error_for_status(target)
}
