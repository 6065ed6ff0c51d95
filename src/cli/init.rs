//! Project scaffolding.
//!
//! Creates a new project: config file, content directory with a sample
//! entry, and a .gitignore for the output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::log;

/// Default config template written by `init`.
const CONFIG_TEMPLATE: &str = r#"# termlink configuration

[site]
# Site title shown in page headers
title = "FAQ"
# Absolute site URL, used for sitemap.xml
# url = "https://example.org"
# Language code for the <html lang> attribute
language = "en"

[build]
# Content directory with one .md file per entry
content = "content"
# Output directory for generated HTML
output = "public"
# Generate sitemap.xml (requires site.url)
sitemap = true

[check]
# Validate link target URLs
urls = true
# Warn on trigger phrases that never match their answer text
phrases = true
# Internal paths that exist outside generated entries
known_paths = []
"#;

/// Sample entry demonstrating the frontmatter format.
const SAMPLE_ENTRY: &str = r#"+++
title = "What is termlink?"
weight = 1

[links]
"trigger phrase" = "https://en.wikipedia.org/wiki/Hyperlink"
+++

termlink builds FAQ pages from plain prose answers.
Every trigger phrase found in an answer becomes a hyperlink.
"#;

/// Create a new project with default structure
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_project(config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", CONFIG_TEMPLATE);
        return Ok(());
    }

    if config.config_path.exists() {
        log!("error"; "'{}' already exists", config.config_path.display());
        std::process::exit(1);
    }

    write_project_files(config)?;

    log!("init"; "Project initialized successfully");
    Ok(())
}

fn write_project_files(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    let content_dir = config.content_dir();

    fs::create_dir_all(&content_dir).with_context(|| {
        format!("Failed to create directory '{}'", content_dir.display())
    })?;

    write_file(&config.config_path, CONFIG_TEMPLATE)?;
    write_file(&content_dir.join("what-is-termlink.md"), SAMPLE_ENTRY)?;

    // Keep generated output out of version control
    let gitignore = format!("{}\n", config.build.output.display());
    write_file(&root.join(".gitignore"), &gitignore)?;

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use tempfile::TempDir;

    fn config_for(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.config_path = root.join("termlink.toml");
        config
    }

    #[test]
    fn test_scaffold_files() {
        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());

        write_project_files(&config).unwrap();

        assert!(temp.path().join("termlink.toml").is_file());
        assert!(temp.path().join("content/what-is-termlink.md").is_file());
        assert!(temp.path().join(".gitignore").is_file());
    }

    #[test]
    fn test_template_parses() {
        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());
        write_project_files(&config).unwrap();

        let loaded = SiteConfig::from_path(&config.config_path).unwrap();
        assert_eq!(loaded.site.title, "FAQ");
        assert!(loaded.build.sitemap);
    }

    #[test]
    fn test_sample_entry_loads() {
        let temp = TempDir::new().unwrap();
        let config = config_for(temp.path());
        write_project_files(&config).unwrap();

        let store = ContentStore::load(&config).unwrap();
        assert_eq!(store.len(), 1);

        let entry = &store.entries()[0];
        assert_eq!(entry.title, "What is termlink?");
        assert_eq!(entry.links.len(), 1);
    }
}
