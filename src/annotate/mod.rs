//! Trigger-phrase annotation over prose.
//!
//! The annotator scans a block of prose for case-insensitive, whole-word
//! occurrences of each trigger phrase in a [`LinkMap`] and produces an
//! ordered [`Segment`] sequence: plain text runs (with line breaks made
//! explicit) interleaved with link segments. The computation is a pure
//! function of `(text, links)` and never fails.

mod linkmap;
mod matcher;
mod segment;

pub use linkmap::{LinkMap, LinkRule};
pub use segment::{Segment, flatten};

use crate::core::LinkKind;
use matcher::find_matches;

/// Annotate `text` with the trigger phrases in `links`.
///
/// The returned segments cover the input losslessly: concatenating every
/// segment's content, inserting `\n` before segments flagged with a
/// preceding line break, reproduces `text` exactly.
pub fn annotate(text: &str, links: &LinkMap) -> Vec<Segment> {
    let mut segments = Vec::new();
    if text.is_empty() {
        return segments;
    }

    let matches = find_matches(text, links);

    let mut cursor = 0;
    for m in &matches {
        push_plain(&mut segments, &text[cursor..m.start]);
        segments.push(Segment::Link {
            content: m.text.to_string(),
            url: m.url.to_string(),
            external: !LinkKind::parse(m.url).is_internal(),
        });
        cursor = m.end;
    }
    push_plain(&mut segments, &text[cursor..]);

    segments
}

/// Emit a plain slice as text segments, one per line.
///
/// The break is carried by the segment that follows it; a newline with
/// nothing after it inside the slice becomes an empty text segment
/// flagged with the break, so no character is lost.
fn push_plain(segments: &mut Vec<Segment>, slice: &str) {
    if slice.is_empty() {
        return;
    }

    for (i, line) in slice.split('\n').enumerate() {
        let line_break_before = i > 0;
        if line.is_empty() && !line_break_before {
            // Slice starts with '\n'; the break rides on the next piece.
            continue;
        }
        segments.push(Segment::Text {
            content: line.to_string(),
            line_break_before,
        });
    }
}
