//! Response normalization
//!
//! Turns a [`RawResponse`] into a [`NormalizedResponse`]: the `link` header is
//! parsed into a [`LinkMap`] and the body is decoded as JSON.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::GitHubError;
use crate::link::LinkMap;
use crate::transport::RawResponse;

/// Name of the pagination header as delivered by the transport
pub const LINK_HEADER: &str = "link";

/// A response with parsed pagination links and a decoded body
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Decoded JSON body
    pub body: Value,
    /// Pagination links; empty when the response had no `link` header
    pub links: LinkMap,
}

impl NormalizedResponse {
    /// Normalize a raw response
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::Decode` if the body is not valid JSON.
    pub fn from_raw(raw: RawResponse) -> Result<Self, GitHubError> {
        let links = LinkMap::parse(raw.headers.get(LINK_HEADER).map(String::as_str));
        let body = serde_json::from_str(&raw.body)?;
        Ok(Self {
            status: raw.status,
            headers: raw.headers,
            body,
            links,
        })
    }

    /// URL of the next page, if the response has one
    #[must_use]
    pub fn next_url(&self) -> Option<&str> {
        self.links.next()
    }

    /// Decode the body into a typed value
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::Decode` if the body does not fit `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, GitHubError> {
        Ok(T::deserialize(&self.body)?)
    }

    /// Decode a body that must be a JSON array, element by element
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::UnexpectedPayload` if the body is not an array
    /// and `GitHubError::Decode` if an element does not fit `T`.
    pub fn decode_list<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
    ) -> Result<Vec<T>, GitHubError> {
        let Value::Array(items) = &self.body else {
            return Err(GitHubError::UnexpectedPayload {
                endpoint,
                expected: "an array",
            });
        };
        items
            .iter()
            .map(|item| T::deserialize(item).map_err(GitHubError::from))
            .collect()
    }
}
