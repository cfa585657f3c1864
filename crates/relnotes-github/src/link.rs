// Copyright (c) 2026 - present relnotes contributors
// SPDX-License-Identifier: MIT

//! `Link` header parsing
//!
//! GitHub paginates list endpoints with an RFC 8288 style header:
//!
//! ```text
//! <https://api.github.com/...&page=2>; rel="next", <https://api.github.com/...&page=9>; rel="last"
//! ```
//!
//! The parser here is deliberately narrow. Segments are separated by `", "`
//! and each must look exactly like `<URL>; rel="name"` with a non-empty URL
//! and name. Segments that don't are dropped without error, so a partially
//! malformed header still yields whatever relations it does carry. A bare `,`
//! inside a URL is not a separator.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<([^<>]+)>; rel="([^"]+)"$"#).expect("link segment regex is valid")
});

/// Relation name that drives pagination
pub const REL_NEXT: &str = "next";

/// Separator between `Link` header segments
const SEGMENT_SEPARATOR: &str = ", ";

/// Mapping from link relation (`next`, `last`, ...) to absolute URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    links: HashMap<String, String>,
}

impl LinkMap {
    /// Parse a raw `Link` header value
    ///
    /// `None` and the empty string both produce an empty map. When a relation
    /// name repeats, the last occurrence wins.
    #[must_use]
    pub fn parse(header: Option<&str>) -> Self {
        let mut links = HashMap::new();
        let Some(header) = header else {
            return Self { links };
        };

        for segment in header.split(SEGMENT_SEPARATOR) {
            if let Some(caps) = SEGMENT_RE.captures(segment.trim()) {
                links.insert(caps[2].to_string(), caps[1].to_string());
            }
        }

        Self { links }
    }

    /// URL for the given relation
    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.links.get(rel).map(String::as_str)
    }

    /// URL of the next page, if any
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.get(REL_NEXT)
    }

    /// Number of relations
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether no relation was parsed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const GITHUB_HEADER: &str = r#"<https://api.github.com/repositories/1/commits?sha=abc&page=2>; rel="next", <https://api.github.com/repositories/1/commits?sha=abc&page=5>; rel="last""#;

    #[test]
    fn test_parse_github_header() {
        let links = LinkMap::parse(Some(GITHUB_HEADER));
        assert_eq!(links.len(), 2);
        assert_eq!(
            links.next(),
            Some("https://api.github.com/repositories/1/commits?sha=abc&page=2")
        );
        assert_eq!(
            links.get("last"),
            Some("https://api.github.com/repositories/1/commits?sha=abc&page=5")
        );
    }

    #[test]
    fn test_absent_header_is_empty() {
        assert!(LinkMap::parse(None).is_empty());
    }

    #[test]
    fn test_empty_header_is_empty() {
        assert!(LinkMap::parse(Some("")).is_empty());
    }

    #[test]
    fn test_no_matching_segments() {
        let links = LinkMap::parse(Some("garbage, more garbage; rel=next"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_segments_skipped() {
        let header = r#"<https://a.test/1>; rel=next, <https://a.test/2>; rel="prev", https://a.test/3; rel="first""#;
        let links = LinkMap::parse(Some(header));
        assert_eq!(links.len(), 1);
        assert_eq!(links.get("prev"), Some("https://a.test/2"));
        assert_eq!(links.next(), None);
    }

    #[test]
    fn test_duplicate_relation_last_wins() {
        let header = r#"<https://a.test/1>; rel="next", <https://a.test/2>; rel="next""#;
        let links = LinkMap::parse(Some(header));
        assert_eq!(links.len(), 1);
        assert_eq!(links.next(), Some("https://a.test/2"));
    }

    #[test]
    fn test_missing_next_relation() {
        let header = r#"<https://a.test/1>; rel="prev", <https://a.test/1>; rel="first""#;
        let links = LinkMap::parse(Some(header));
        assert_eq!(links.len(), 2);
        assert_eq!(links.next(), None);
    }

    #[test]
    fn test_comma_inside_url_kept() {
        let header = r#"<https://a.test/c?fields=a,b&page=2>; rel="next", <https://a.test/c?fields=a,b&page=7>; rel="last""#;
        let links = LinkMap::parse(Some(header));
        assert_eq!(links.len(), 2);
        assert_eq!(links.next(), Some("https://a.test/c?fields=a,b&page=2"));
        assert_eq!(links.get("last"), Some("https://a.test/c?fields=a,b&page=7"));
    }

    #[test]
    fn test_empty_url_or_rel_skipped() {
        let header = r#"<>; rel="next", <https://a.test/2>; rel="", <https://a.test/1>; rel="prev""#;
        let links = LinkMap::parse(Some(header));
        assert_eq!(links.len(), 1);
        assert_eq!(links.next(), None);
        assert_eq!(links.get("prev"), Some("https://a.test/1"));
    }
}
