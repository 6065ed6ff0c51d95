//! TOML frontmatter extraction for entry files.

use serde::Deserialize;

use crate::annotate::LinkMap;

/// Frontmatter fields of one entry file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntryMeta {
    /// Question shown as the entry heading. Required downstream.
    pub title: Option<String>,
    /// Sort weight; lower weights come first.
    pub weight: i64,
    /// Drafts are skipped unless explicitly included.
    pub draft: bool,
    /// Slug override; defaults to the folded title.
    pub slug: Option<String>,
    /// `[links]` table: trigger phrase -> URL, in document order.
    pub links: LinkMap,
}

/// Detect and split `+++` fenced frontmatter.
///
/// Returns `(frontmatter, body)` if the fence is present. The body has
/// the fence's trailing blank lines stripped.
pub fn detect_frontmatter(content: &str) -> Option<(&str, &str)> {
    let trimmed = content.trim_start();

    if trimmed.starts_with("+++")
        && let Some(end) = trimmed[3..].find("\n+++")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body));
    }

    None
}

/// Parse frontmatter TOML into [`EntryMeta`].
pub fn parse_meta(frontmatter: &str) -> Result<EntryMeta, toml::de::Error> {
    toml::from_str(frontmatter)
}
