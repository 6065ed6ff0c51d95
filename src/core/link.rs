//! Link classification utilities.

use crate::utils::path::is_external_link;

/// Syntactic classification of link targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /faq/peer-support).
    SiteRoot(&'a str),
    /// Everything else (bare or dot-relative paths).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// Whether this target is an internal navigation (site-root path).
    ///
    /// Internal links stay in the same browsing context; everything else
    /// opens a new, opener-isolated one.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::SiteRoot(_))
    }

    /// Check if link is HTTP/HTTPS.
    #[inline]
    pub fn is_http(link: &str) -> bool {
        link.starts_with("http://") || link.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://www.example.org"),
            LinkKind::External("https://www.example.org")
        ));
        assert!(matches!(
            LinkKind::parse("mailto:help@example.org"),
            LinkKind::External("mailto:help@example.org")
        ));
        assert!(matches!(
            LinkKind::parse("tel:0800-0113"),
            LinkKind::External("tel:0800-0113")
        ));
    }

    #[test]
    fn test_parse_fragment() {
        assert!(matches!(
            LinkKind::parse("#contact"),
            LinkKind::Fragment("contact")
        ));
        assert!(matches!(LinkKind::parse("#"), LinkKind::Fragment("")));
    }

    #[test]
    fn test_parse_site_root() {
        assert!(matches!(
            LinkKind::parse("/about"),
            LinkKind::SiteRoot("/about")
        ));
        assert!(matches!(
            LinkKind::parse("/faq/peer-support#team"),
            LinkKind::SiteRoot("/faq/peer-support#team")
        ));
    }

    #[test]
    fn test_parse_file_relative() {
        assert!(matches!(
            LinkKind::parse("./image.png"),
            LinkKind::FileRelative("./image.png")
        ));
        assert!(matches!(
            LinkKind::parse("peer-support"),
            LinkKind::FileRelative("peer-support")
        ));
    }

    #[test]
    fn test_is_internal() {
        assert!(LinkKind::parse("/de-peer").is_internal());
        assert!(!LinkKind::parse("https://www.example.org").is_internal());
        assert!(!LinkKind::parse("#section").is_internal());
        assert!(!LinkKind::parse("somewhere").is_internal());
    }

    #[test]
    fn test_is_http() {
        assert!(LinkKind::is_http("http://example.org"));
        assert!(LinkKind::is_http("https://example.org"));
        assert!(!LinkKind::is_http("mailto:help@example.org"));
        assert!(!LinkKind::is_http("/about"));
    }
}
