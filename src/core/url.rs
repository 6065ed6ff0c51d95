//! URL path type for type-safe route handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Output boundary: percent-encode per path segment

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded page route.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/` and ends with `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create a page route. Normalizes leading/trailing slashes and
    /// strips any query string or fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);

        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{}/", with_leading)
        };

        Self(Arc::from(normalized))
    }

    /// Route for an entry slug: `"peer-support"` -> `"/peer-support/"`.
    pub fn from_slug(slug: &str) -> Self {
        Self::from_page(slug)
    }

    /// Strip query string and fragment from a path using the url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // A dummy base URL makes relative paths parseable
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").expect("static base url"));

        match base.join(path) {
            Ok(parsed) => {
                // url returns the path percent-encoded, decode it back
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            // Fallback to simple split if url parsing fails
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded route as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for browsers/sitemaps (percent-encode non-ASCII and
    /// special characters per segment).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check if the route is the root (`/`).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Compare ignoring a trailing slash.
    pub fn matches_ignoring_trailing_slash(&self, other: &str) -> bool {
        let self_trimmed = self.0.trim_end_matches('/');
        let other_trimmed = other.trim_end_matches('/');

        if self_trimmed.is_empty() && other_trimmed.is_empty() {
            return true;
        }
        self_trimmed == other_trimmed
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}
