//! Site configuration management for `termlink.toml`.
//!
//! | Section   | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `[site]`  | Site metadata (title, url, language)            |
//! | `[build]` | Content/output paths, sitemap toggle            |
//! | `[check]` | Trigger-link validation settings                |

mod error;

pub use error::ConfigError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};
use crate::log;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing termlink.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSection,

    /// Build settings
    #[serde(default)]
    pub build: BuildSection,

    /// Check settings
    #[serde(default)]
    pub check: CheckSection,
}

/// `[site]` - site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title shown in page headers and titles.
    pub title: String,
    /// Absolute site URL, used for the sitemap. Optional.
    pub url: Option<String>,
    /// Language code (BCP 47) for the `lang` attribute.
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "FAQ".to_string(),
            url: None,
            language: "en".to_string(),
        }
    }
}

/// `[build]` - build paths and toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Content directory (relative to project root).
    pub content: PathBuf,
    /// Output directory (relative to project root).
    pub output: PathBuf,
    /// Generate sitemap.xml (requires `site.url`).
    pub sitemap: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
    /// Include draft entries (CLI only).
    #[serde(skip)]
    pub drafts: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            output: PathBuf::from("public"),
            sitemap: true,
            clean: false,
            drafts: false,
        }
    }
}

/// `[check]` - trigger-link validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSection {
    /// Validate link target URLs (malformed externals, unknown routes).
    pub urls: bool,
    /// Warn on trigger phrases that never match their answer text.
    pub phrases: bool,
    /// Internal paths that exist outside generated entries.
    pub known_paths: Vec<String>,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            urls: true,
            phrases: true,
            known_paths: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'termlink init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse a config file, warning about unknown keys.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        let de = toml::de::Deserializer::new(&raw);
        let mut unused = Vec::new();
        let config: Self = serde_ignored::deserialize(de, |key| unused.push(key.to_string()))
            .map_err(ConfigError::Toml)?;

        for key in unused {
            log!("config"; "unknown key `{}` ignored", key);
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cwd, &cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading: set root, apply CLI options.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => std::env::current_dir().unwrap_or_default().join(name),
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        self.root = root;

        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }

        if let Commands::Build { build_args } = &cli.command {
            self.build.clean = build_args.clean;
            self.build.drafts = build_args.drafts;
            if let Some(sitemap) = build_args.sitemap {
                self.build.sitemap = sitemap;
            }
            crate::logger::set_verbose(build_args.verbose);
        }
    }

    /// Validate paths and URLs.
    fn validate(&self) -> Result<()> {
        let content_dir = self.content_dir();
        if !content_dir.is_dir() {
            return Err(ConfigError::Validation(format!(
                "content directory `{}` not found",
                content_dir.display()
            ))
            .into());
        }

        if let Some(url) = &self.site.url {
            let parsed = url::Url::parse(url).map_err(|e| {
                ConfigError::Validation(format!("site.url `{}` is not a valid URL: {}", url, e))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(format!(
                    "site.url `{}` must be http(s)",
                    url
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Project root directory.
    #[inline]
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the project root (tests and scaffolding).
    pub fn set_root(&mut self, root: &Path) {
        self.root = root.to_path_buf();
    }

    /// Absolute content directory.
    pub fn content_dir(&self) -> PathBuf {
        self.root_join(&self.build.content)
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root_join(&self.build.output)
    }

    /// Site base URL without a trailing slash, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.site.url.as_deref().map(|u| u.trim_end_matches('/'))
    }

    fn root_join(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Search upward from `start` for a config file with the given name.
fn find_config_file(start: &Path, name: &Path) -> Option<PathBuf> {
    // A path with directory components is used as-is
    if name.components().count() > 1 {
        let path = start.join(name);
        return path.exists().then_some(path);
    }

    let mut dir = start;
    loop {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "FAQ");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.sitemap);
        assert!(config.check.urls);
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("termlink.toml");
        fs::write(
            &path,
            "[site]\ntitle = \"Helpline\"\nurl = \"https://example.org\"\n\n[build]\nsitemap = false\n",
        )
        .unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site.title, "Helpline");
        assert_eq!(config.base_url(), Some("https://example.org"));
        assert!(!config.build.sitemap);
    }

    #[test]
    fn test_from_path_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("termlink.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(SiteConfig::from_path(&path).is_err());
    }

    #[test]
    fn test_base_url_trims_slash() {
        let mut config = SiteConfig::default();
        config.site.url = Some("https://example.org/".to_string());
        assert_eq!(config.base_url(), Some("https://example.org"));
    }

    #[test]
    fn test_dirs_join_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/srv/site"));
        assert_eq!(config.content_dir(), PathBuf::from("/srv/site/content"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/site/public"));
    }

    #[test]
    fn test_validate_url() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("content")).unwrap();

        let mut config = SiteConfig::default();
        config.set_root(temp.path());
        config.site.url = Some("https://example.org".to_string());
        assert!(config.validate().is_ok());

        config.site.url = Some("not a url".to_string());
        assert!(config.validate().is_err());

        config.site.url = Some("ftp://example.org".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_content_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.set_root(temp.path());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_find_config_file_upward() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("termlink.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("termlink.toml")).unwrap();
        assert_eq!(found, temp.path().join("termlink.toml"));
    }
}
