//! Whole-phrase occurrence search over prose.

use regex::Regex;

use super::linkmap::LinkMap;

/// One located occurrence of a trigger phrase.
///
/// Transient: produced during scanning, consumed during rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PhraseMatch<'a> {
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Matched literal from the source text (original casing).
    pub text: &'a str,
    /// Target URL from the rule that produced the match.
    pub url: &'a str,
}

/// Find every whole-word, case-insensitive occurrence of each phrase,
/// sorted by start offset with overlaps discarded.
///
/// Ties at the same start resolve to the earlier rule definition: rules
/// are scanned in definition order and the sort is stable.
pub(crate) fn find_matches<'a>(text: &'a str, links: &'a LinkMap) -> Vec<PhraseMatch<'a>> {
    let mut matches = Vec::new();

    for rule in links.iter() {
        let Some(re) = phrase_regex(&rule.phrase) else {
            continue;
        };
        for m in re.find_iter(text) {
            matches.push(PhraseMatch {
                start: m.start(),
                end: m.end(),
                text: m.as_str(),
                url: &rule.url,
            });
        }
    }

    matches.sort_by_key(|m| m.start);
    discard_overlaps(matches)
}

/// Keep the earliest match and drop any match starting before the
/// previously accepted one ends. No nested or overlapping links.
fn discard_overlaps(matches: Vec<PhraseMatch<'_>>) -> Vec<PhraseMatch<'_>> {
    let mut accepted: Vec<PhraseMatch> = Vec::with_capacity(matches.len());
    for m in matches {
        if accepted.last().is_none_or(|prev| m.start >= prev.end) {
            accepted.push(m);
        }
    }
    accepted
}

/// Build the matcher for one phrase.
///
/// The phrase is escaped so regex metacharacters in it are inert, then
/// anchored with word boundaries on both sides. Empty phrases produce no
/// matcher; a pattern the engine rejects is skipped rather than surfaced,
/// since annotation never fails.
fn phrase_regex(phrase: &str) -> Option<Regex> {
    if phrase.is_empty() {
        return None;
    }
    let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase));
    Regex::new(&pattern).ok()
}
