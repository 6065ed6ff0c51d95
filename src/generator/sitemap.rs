//! Sitemap generation.
//!
//! Generates a sitemap.xml listing the index and every entry page.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.org/</loc>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;
use std::fs;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::content::FaqEntry;
use crate::debug;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled and `site.url` is configured.
pub fn build_sitemap(entries: &[&FaqEntry], config: &SiteConfig) -> Result<()> {
    if !config.build.sitemap {
        return Ok(());
    }
    let Some(base_url) = config.base_url() else {
        debug!("sitemap"; "site.url not set, skipping");
        return Ok(());
    };

    let sitemap = Sitemap::build(entries, base_url);
    sitemap.write(config)
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn build(entries: &[&FaqEntry], base_url: &str) -> Self {
        let mut urls = Vec::with_capacity(entries.len() + 1);
        urls.push(format!("{}/", base_url));
        urls.extend(
            entries
                .iter()
                .map(|entry| format!("{}{}", base_url, entry.route.to_encoded())),
        );
        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 64);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for url in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&url));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let path = config.output_dir().join("sitemap.xml");
        fs::write(&path, self.into_xml())
            .with_context(|| format!("Failed to write '{}'", path.display()))
    }
}

/// Escape XML special characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
