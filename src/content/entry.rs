//! A single FAQ entry.

use std::path::PathBuf;

use serde::Serialize;

use crate::annotate::LinkMap;
use crate::core::UrlPath;

/// One FAQ record: a titled prose answer plus its trigger-link map.
#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    /// Source path relative to the project root (for reporting).
    pub source: PathBuf,
    /// URL slug (from frontmatter or folded from the title).
    pub slug: String,
    /// Page route derived from the slug.
    pub route: UrlPath,
    /// Question shown as the entry heading.
    pub title: String,
    /// Sort weight; lower weights come first.
    pub weight: i64,
    /// Drafts are skipped unless explicitly included.
    pub draft: bool,
    /// Trigger phrases to annotate in the answer.
    pub links: LinkMap,
    /// The prose answer.
    pub body: String,
}
