//! Content directory scanning and entry loading.

use std::fs;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rustc_hash::FxHashMap;

use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::utils::slug::slugify;

use super::frontmatter::{detect_frontmatter, parse_meta};
use super::{ContentError, FaqEntry};

/// All entries of a site, ordered by `(weight, source path)`.
#[derive(Debug, Default)]
pub struct ContentStore {
    entries: Vec<FaqEntry>,
}

impl ContentStore {
    /// Scan the configured content directory and load every entry.
    ///
    /// Fails on the first malformed entry or route conflict; a build
    /// should not silently drop records.
    pub fn load(config: &SiteConfig) -> Result<Self, ContentError> {
        let root = config.get_root();
        let content_dir = config.content_dir();

        let mut entries = Vec::new();
        for file in collect_entry_files(&content_dir) {
            entries.push(load_entry(&file, root)?);
        }

        entries.sort_by(|a, b| (a.weight, &a.source).cmp(&(b.weight, &b.source)));
        check_route_conflicts(&entries)?;

        Ok(Self { entries })
    }

    /// All entries, drafts included.
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Entries to publish: drafts filtered out unless requested.
    pub fn published(&self, include_drafts: bool) -> Vec<&FaqEntry> {
        self.entries
            .iter()
            .filter(|e| include_drafts || !e.draft)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect `.md` entry files under the content directory, sorted for
/// deterministic ordering before weights apply.
fn collect_entry_files(content_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(content_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();

    files.sort();
    files
}

/// Load and parse one entry file.
fn load_entry(path: &Path, root: &Path) -> Result<FaqEntry, ContentError> {
    let raw =
        fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;

    let source = path.strip_prefix(root).unwrap_or(path).to_path_buf();

    let (fm, body) = detect_frontmatter(&raw)
        .ok_or_else(|| ContentError::MissingFrontmatter(source.clone()))?;
    let meta = parse_meta(fm).map_err(|e| ContentError::Frontmatter(source.clone(), e))?;

    let title = meta
        .title
        .ok_or_else(|| ContentError::MissingTitle(source.clone()))?;

    let slug = meta
        .slug
        .map(|s| slugify(&s))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| slugify(&title));
    // A title of pure punctuation folds to nothing; fall back to the stem
    let slug = if slug.is_empty() {
        path.file_stem()
            .map(|s| slugify(&s.to_string_lossy()))
            .unwrap_or_default()
    } else {
        slug
    };

    Ok(FaqEntry {
        route: UrlPath::from_slug(&slug),
        source,
        slug,
        title,
        weight: meta.weight,
        draft: meta.draft,
        links: meta.links,
        body: body.trim_end().to_string(),
    })
}

/// Reject two entries resolving to the same route.
fn check_route_conflicts(entries: &[FaqEntry]) -> Result<(), ContentError> {
    let mut seen: FxHashMap<&UrlPath, &FaqEntry> = FxHashMap::default();
    for entry in entries {
        if let Some(first) = seen.insert(&entry.route, entry) {
            return Err(ContentError::RouteConflict {
                route: entry.route.as_str().to_string(),
                first: first.source.clone(),
                second: entry.source.clone(),
            });
        }
    }
    Ok(())
}
