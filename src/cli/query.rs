//! Query command: emit entry metadata as JSON.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::annotate::annotate;
use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::content::{ContentStore, FaqEntry};
use crate::log;
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let store = ContentStore::load(config)?;
    let entries = store.published(args.drafts);

    log!("query"; "found {}", plural_count(entries.len(), "record"));

    if entries.is_empty() {
        return Ok(());
    }

    let records: Vec<JsonValue> = entries
        .iter()
        .map(|entry| format_entry(entry, args.segments))
        .collect();
    let output = JsonValue::Array(records);

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(path) = &args.out {
        let mut file = fs::File::create(path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Format a single entry with path/url first
fn format_entry(entry: &FaqEntry, include_segments: bool) -> JsonValue {
    let mut obj = Map::new();

    obj.insert(
        "path".to_string(),
        JsonValue::String(entry.source.display().to_string()),
    );
    obj.insert(
        "url".to_string(),
        JsonValue::String(entry.route.as_str().to_string()),
    );
    obj.insert("title".to_string(), JsonValue::String(entry.title.clone()));
    obj.insert("weight".to_string(), JsonValue::from(entry.weight));
    obj.insert("draft".to_string(), JsonValue::Bool(entry.draft));
    obj.insert(
        "links".to_string(),
        serde_json::to_value(&entry.links).unwrap_or_default(),
    );

    if include_segments {
        let segments = annotate(&entry.body, &entry.links);
        obj.insert(
            "segments".to_string(),
            serde_json::to_value(segments).unwrap_or_default(),
        );
    }

    JsonValue::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::LinkMap;
    use crate::core::UrlPath;

    fn entry() -> FaqEntry {
        FaqEntry {
            source: "content/peer.md".into(),
            slug: "peer".to_string(),
            route: UrlPath::from_slug("peer"),
            title: "Peer?".to_string(),
            weight: 2,
            draft: false,
            links: LinkMap::from([("de-peer", "/de-peer")]),
            body: "ask de-peer".to_string(),
        }
    }

    #[test]
    fn test_format_entry_field_order() {
        let json = format_entry(&entry(), false);
        let obj = json.as_object().unwrap();

        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["path", "url", "title", "weight", "draft", "links"]);
        assert_eq!(obj["url"], "/peer/");
        assert_eq!(obj["links"]["de-peer"], "/de-peer");
    }

    #[test]
    fn test_format_entry_with_segments() {
        let json = format_entry(&entry(), true);
        let segments = json["segments"].as_array().unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0]["kind"], "text");
        assert_eq!(segments[1]["kind"], "link");
        assert_eq!(segments[1]["external"], false);
    }
}
