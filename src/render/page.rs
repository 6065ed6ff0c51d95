//! Page assembly from annotated segments.
//!
//! Pages are built as plain strings; visual styling is left to the site
//! stylesheet, the markup stays semantic (`<details>` disclosure blocks
//! on the index, one `<article>` per entry page).

use crate::annotate::{Segment, annotate};
use crate::config::SiteConfig;
use crate::content::FaqEntry;

use super::html::{escape, escape_attr};

/// Render a segment sequence as inline HTML.
///
/// Text runs are entity-escaped with `<br>` for line breaks; internal
/// links stay in the same browsing context, external links open a new,
/// opener-isolated one.
pub fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::with_capacity(segments.len() * 16);

    for segment in segments {
        match segment {
            Segment::Text {
                content,
                line_break_before,
            } => {
                if *line_break_before {
                    out.push_str("<br>");
                }
                out.push_str(&escape(content));
            }
            Segment::Link {
                content,
                url,
                external,
            } => {
                out.push_str("<a href=\"");
                out.push_str(&escape_attr(url));
                if *external {
                    out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                } else {
                    out.push_str("\">");
                }
                out.push_str(&escape(content));
                out.push_str("</a>");
            }
        }
    }

    out
}

/// Annotate an entry's prose and render it as inline HTML.
fn render_answer(entry: &FaqEntry) -> String {
    render_segments(&annotate(&entry.body, &entry.links))
}

/// Standalone page for one entry.
pub fn render_entry_page(entry: &FaqEntry, config: &SiteConfig) -> String {
    let mut body = String::with_capacity(1024);

    body.push_str("<article class=\"faq-entry\">\n");
    body.push_str("  <h1>");
    body.push_str(&escape(&entry.title));
    body.push_str("</h1>\n");
    body.push_str("  <p class=\"faq-answer\">");
    body.push_str(&render_answer(entry));
    body.push_str("</p>\n");
    body.push_str("  <nav><a href=\"/\">All questions</a></nav>\n");
    body.push_str("</article>");

    page_shell(&entry.title, &body, config)
}

/// Index page: every entry as a disclosure block.
pub fn render_index_page(entries: &[&FaqEntry], config: &SiteConfig) -> String {
    let mut body = String::with_capacity(entries.len() * 512);

    body.push_str("<section class=\"faq\">\n");
    for entry in entries {
        body.push_str("  <details class=\"faq-entry\">\n");
        body.push_str("    <summary>");
        body.push_str(&escape(&entry.title));
        body.push_str("</summary>\n");
        body.push_str("    <p class=\"faq-answer\">");
        body.push_str(&render_answer(entry));
        body.push_str("</p>\n");
        body.push_str("    <p class=\"faq-permalink\"><a href=\"");
        body.push_str(&escape_attr(&entry.route.to_encoded()));
        body.push_str("\">Permalink</a></p>\n");
        body.push_str("  </details>\n");
    }
    body.push_str("</section>");

    page_shell(&config.site.title, &body, config)
}

/// Wrap page body in the document shell.
fn page_shell(title: &str, body: &str, config: &SiteConfig) -> String {
    let site_title = &config.site.title;
    let full_title = if title == site_title {
        site_title.clone()
    } else {
        format!("{} · {}", title, site_title)
    };

    let mut html = String::with_capacity(body.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"");
    html.push_str(&escape_attr(&config.site.language));
    html.push_str("\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("  <title>");
    html.push_str(&escape(&full_title));
    html.push_str("</title>\n</head>\n<body>\n");
    html.push_str("<header><a href=\"/\">");
    html.push_str(&escape(site_title));
    html.push_str("</a></header>\n<main>\n");
    html.push_str(body);
    html.push_str("\n</main>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::LinkMap;

    fn segment_text(content: &str, line_break_before: bool) -> Segment {
        Segment::Text {
            content: content.to_string(),
            line_break_before,
        }
    }

    #[test]
    fn test_render_plain_text() {
        let html = render_segments(&[segment_text("hello & goodbye", false)]);
        assert_eq!(html, "hello &amp; goodbye");
    }

    #[test]
    fn test_render_line_breaks() {
        let html = render_segments(&[
            segment_text("line1", false),
            segment_text("line2", true),
        ]);
        assert_eq!(html, "line1<br>line2");
    }

    #[test]
    fn test_render_internal_link() {
        let html = render_segments(&[Segment::Link {
            content: "de-peer".to_string(),
            url: "/de-peer".to_string(),
            external: false,
        }]);
        assert_eq!(html, "<a href=\"/de-peer\">de-peer</a>");
    }

    #[test]
    fn test_render_external_link_isolated() {
        let html = render_segments(&[Segment::Link {
            content: "113.nl".to_string(),
            url: "https://www.113.nl".to_string(),
            external: true,
        }]);
        assert_eq!(
            html,
            "<a href=\"https://www.113.nl\" target=\"_blank\" rel=\"noopener noreferrer\">113.nl</a>"
        );
    }

    #[test]
    fn test_render_answer_end_to_end() {
        let entry = FaqEntry {
            source: "faq/peer.md".into(),
            slug: "peer".to_string(),
            route: crate::core::UrlPath::from_slug("peer"),
            title: "Peer?".to_string(),
            weight: 0,
            draft: false,
            links: LinkMap::from([("de-peer", "/de-peer")]),
            body: "ask de-peer\ntoday".to_string(),
        };
        assert_eq!(
            render_answer(&entry),
            "ask <a href=\"/de-peer\">de-peer</a><br>today"
        );
    }

    #[test]
    fn test_index_page_has_details_blocks() {
        let config = SiteConfig::default();
        let entry = FaqEntry {
            source: "faq/peer.md".into(),
            slug: "peer".to_string(),
            route: crate::core::UrlPath::from_slug("peer"),
            title: "What is <peer> support?".to_string(),
            weight: 0,
            draft: false,
            links: LinkMap::new(),
            body: "An answer.".to_string(),
        };

        let html = render_index_page(&[&entry], &config);
        assert!(html.contains("<details class=\"faq-entry\">"));
        assert!(html.contains("What is &lt;peer&gt; support?"));
        assert!(html.contains("href=\"/peer/\""));
    }

    #[test]
    fn test_entry_page_title_includes_site() {
        let mut config = SiteConfig::default();
        config.site.title = "Helpline".to_string();
        let entry = FaqEntry {
            source: "faq/peer.md".into(),
            slug: "peer".to_string(),
            route: crate::core::UrlPath::from_slug("peer"),
            title: "Peer support".to_string(),
            weight: 0,
            draft: false,
            links: LinkMap::new(),
            body: "An answer.".to_string(),
        };

        let html = render_entry_page(&entry, &config);
        assert!(html.contains("<title>Peer support · Helpline</title>"));
        assert!(html.contains("<html lang=\"en\">"));
    }
}
