//! Site generation: write pages and sitemap to the output directory.

pub mod sitemap;

use std::fs;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::content::{ContentStore, FaqEntry};
use crate::render::{render_entry_page, render_index_page};
use crate::utils::plural_count;
use crate::{debug, log};

/// Build the site: index page, one page per entry, optional sitemap.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let store = ContentStore::load(config)?;
    let entries = store.published(config.build.drafts);

    if entries.is_empty() {
        log!("build"; "no entries found in `{}`", config.content_dir().display());
        return Ok(());
    }

    log!("build"; "rendering {}", plural_count(entries.len(), "page"));

    let output_dir = config.output_dir();
    if config.build.clean && output_dir.exists() {
        fs::remove_dir_all(&output_dir).with_context(|| {
            format!("Failed to clean output directory '{}'", output_dir.display())
        })?;
    }
    fs::create_dir_all(&output_dir).with_context(|| {
        format!("Failed to create output directory '{}'", output_dir.display())
    })?;

    // Entry pages in parallel
    entries
        .par_iter()
        .try_for_each(|entry| write_entry_page(entry, config))?;

    // Index and sitemap together
    let (index_result, sitemap_result) = rayon::join(
        || write_index_page(&entries, config),
        || sitemap::build_sitemap(&entries, config),
    );
    index_result?;
    sitemap_result?;

    log!(
        "build";
        "wrote {} to `{}`",
        plural_count(entries.len() + 1, "page"),
        output_dir.display()
    );
    Ok(())
}

/// Write one entry's standalone page at `<output>/<slug>/index.html`.
fn write_entry_page(entry: &FaqEntry, config: &SiteConfig) -> Result<()> {
    let html = render_entry_page(entry, config);

    let dir = config.output_dir().join(&entry.slug);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;

    let path = dir.join("index.html");
    fs::write(&path, html).with_context(|| format!("Failed to write '{}'", path.display()))?;

    debug!("build"; "wrote {}", entry.route);
    Ok(())
}

/// Write the index page at `<output>/index.html`.
fn write_index_page(entries: &[&FaqEntry], config: &SiteConfig) -> Result<()> {
    let html = render_index_page(entries, config);

    let path = config.output_dir().join("index.html");
    fs::write(&path, html).with_context(|| format!("Failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn project_with_entry(root: &Path) -> SiteConfig {
        let content = root.join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("peer.md"),
            "+++\ntitle = \"Peer support\"\n\n[links]\n\"de-peer\" = \"/de-peer\"\n+++\nAsk de-peer today.",
        )
        .unwrap();

        let mut config = SiteConfig::default();
        config.set_root(root);
        config
    }

    #[test]
    fn test_build_writes_pages() {
        let temp = TempDir::new().unwrap();
        let config = project_with_entry(temp.path());

        build_site(&config).unwrap();

        let index = fs::read_to_string(temp.path().join("public/index.html")).unwrap();
        assert!(index.contains("Peer support"));
        assert!(index.contains("<a href=\"/de-peer\">de-peer</a>"));

        let page =
            fs::read_to_string(temp.path().join("public/peer-support/index.html")).unwrap();
        assert!(page.contains("<h1>Peer support</h1>"));
    }

    #[test]
    fn test_build_sitemap_needs_site_url() {
        let temp = TempDir::new().unwrap();
        let config = project_with_entry(temp.path());

        // No site.url configured: no sitemap
        build_site(&config).unwrap();
        assert!(!temp.path().join("public/sitemap.xml").exists());
    }

    #[test]
    fn test_build_with_sitemap() {
        let temp = TempDir::new().unwrap();
        let mut config = project_with_entry(temp.path());
        config.site.url = Some("https://example.org".to_string());

        build_site(&config).unwrap();

        let sitemap = fs::read_to_string(temp.path().join("public/sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.org/</loc>"));
        assert!(sitemap.contains("<loc>https://example.org/peer-support/</loc>"));
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let temp = TempDir::new().unwrap();
        let mut config = project_with_entry(temp.path());

        let stale = temp.path().join("public/stale");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("old.html"), "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();

        assert!(!stale.exists());
        assert!(temp.path().join("public/index.html").exists());
    }

    #[test]
    fn test_drafts_excluded_by_default() {
        let temp = TempDir::new().unwrap();
        let config = project_with_entry(temp.path());
        fs::write(
            temp.path().join("content/draft.md"),
            "+++\ntitle = \"Draft entry\"\ndraft = true\n+++\nUnfinished.",
        )
        .unwrap();

        build_site(&config).unwrap();

        assert!(!temp.path().join("public/draft-entry").exists());
        let index = fs::read_to_string(temp.path().join("public/index.html")).unwrap();
        assert!(!index.contains("Draft entry"));
    }
}
