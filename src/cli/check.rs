//! Check command: validate trigger links and phrases.
//!
//! Two check families, each grouped per source file in the report:
//! - urls: malformed external URLs, internal targets with no route
//! - phrases: trigger phrases that never match their answer text

use std::collections::BTreeMap;

use anyhow::Result;
use owo_colors::OwoColorize;
use rustc_hash::FxHashSet;
use url::Url;

use crate::annotate::{LinkMap, Segment, annotate};
use crate::cli::CheckArgs;
use crate::config::SiteConfig;
use crate::content::{ContentStore, FaqEntry};
use crate::core::{LinkKind, UrlPath};
use crate::log;
use crate::utils::path::split_path_fragment;
use crate::utils::{plural_count, plural_s};

/// Validate every entry's trigger links
pub fn check_site(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let store = ContentStore::load(config)?;

    let check_urls = args.urls.unwrap_or(config.check.urls);
    let check_phrases = args.phrases.unwrap_or(config.check.phrases);

    if !check_urls && !check_phrases {
        log!("check"; "no checks enabled");
        return Ok(());
    }

    if store.is_empty() {
        log!("check"; "no entries found");
        return Ok(());
    }

    log!("check"; "checking {}", plural_count(store.len(), "file"));

    let known = known_routes(&store, config);
    let mut report = CheckReport::default();

    for entry in store.entries() {
        check_entry(entry, check_urls, check_phrases, &known, &mut report);
    }

    report.print();

    let problems = report.total();
    if problems == 0 {
        log!("check"; "all trigger links valid");
        return Ok(());
    }
    if args.warn_only {
        log!("check"; "found {} (treated as warnings)", plural_count(problems, "problem"));
        return Ok(());
    }
    anyhow::bail!("found {}", plural_count(problems, "problem"));
}

/// Routes a site-root target may point at: entry routes, the index, and
/// configured known paths.
fn known_routes(store: &ContentStore, config: &SiteConfig) -> FxHashSet<UrlPath> {
    let mut known: FxHashSet<UrlPath> =
        store.entries().iter().map(|e| e.route.clone()).collect();
    known.insert(UrlPath::from_page("/"));
    for path in &config.check.known_paths {
        known.insert(UrlPath::from_page(path));
    }
    known
}

fn check_entry(
    entry: &FaqEntry,
    check_urls: bool,
    check_phrases: bool,
    known: &FxHashSet<UrlPath>,
    report: &mut CheckReport,
) {
    let source = entry.source.display().to_string();

    for rule in entry.links.iter() {
        if rule.phrase.is_empty() {
            report.add_phrase(
                source.clone(),
                "(empty)".to_string(),
                "empty trigger phrase".to_string(),
            );
            continue;
        }

        if check_phrases && !phrase_matches(&entry.body, &rule.phrase, &rule.url) {
            report.add_phrase(
                source.clone(),
                format!("`{}`", rule.phrase),
                "never matches the answer text".to_string(),
            );
        }

        if check_urls
            && let Some(reason) = target_problem(&rule.url, known)
        {
            report.add_url(source.clone(), format!("`{}`", rule.url), reason);
        }
    }
}

/// Whether the phrase produces at least one link in the prose.
fn phrase_matches(body: &str, phrase: &str, url: &str) -> bool {
    let mut single = LinkMap::new();
    single.insert(phrase, url);
    annotate(body, &single)
        .iter()
        .any(|s| matches!(s, Segment::Link { .. }))
}

/// Classify a target URL problem, if any.
fn target_problem(target: &str, known: &FxHashSet<UrlPath>) -> Option<String> {
    match LinkKind::parse(target) {
        LinkKind::External(link) => match Url::parse(link) {
            Ok(_) => None,
            Err(e) => Some(format!("malformed URL ({e})")),
        },
        LinkKind::SiteRoot(path) => {
            let (path, _fragment) = split_path_fragment(path);
            if known.contains(&UrlPath::from_page(path)) {
                None
            } else {
                Some("no page at this route".to_string())
            }
        }
        // Same-page anchors cannot be verified against entry content
        LinkKind::Fragment(_) => None,
        LinkKind::FileRelative(_) => {
            Some("relative target; use a site-root path or a full URL".to_string())
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// A single check problem
#[derive(Debug, Clone)]
struct CheckProblem {
    /// The link/phrase that failed.
    target: String,
    /// Problem reason/message.
    reason: String,
}

/// Check report, grouped by source file per check family
#[derive(Debug, Default)]
struct CheckReport {
    /// URL target problems.
    urls: BTreeMap<String, Vec<CheckProblem>>,
    /// Phrase problems.
    phrases: BTreeMap<String, Vec<CheckProblem>>,
}

impl CheckReport {
    fn add_url(&mut self, source: String, target: String, reason: String) {
        self.urls
            .entry(source)
            .or_default()
            .push(CheckProblem { target, reason });
    }

    fn add_phrase(&mut self, source: String, target: String, reason: String) {
        self.phrases
            .entry(source)
            .or_default()
            .push(CheckProblem { target, reason });
    }

    fn total(&self) -> usize {
        self.urls.values().map(|v| v.len()).sum::<usize>()
            + self.phrases.values().map(|v| v.len()).sum::<usize>()
    }

    /// Print the full report to stderr (urls -> phrases).
    fn print(&self) {
        Self::print_section("urls", &self.urls);
        Self::print_section("phrases", &self.phrases);
    }

    fn print_section(name: &str, problems: &BTreeMap<String, Vec<CheckProblem>>) {
        if problems.is_empty() {
            return;
        }
        eprintln!();

        let file_count = problems.len();
        let problem_count: usize = problems.values().map(|v| v.len()).sum();

        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({file_count} file{}, {problem_count} problem{})",
                plural_s(file_count),
                plural_s(problem_count)
            )
            .dimmed()
        );

        for (path, errs) in problems {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for e in errs {
                eprintln!("{} {} {}", "→".red(), e.target, e.reason);
            }
        }
    }
}
