//! Output units produced by the annotator.

use serde::Serialize;

/// One rendered unit of annotated prose.
///
/// A segment sequence covers its source text losslessly: concatenating
/// every `content` in order, inserting `\n` before each segment with
/// `line_break_before` set, reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// One line's worth of literal content.
    Text {
        content: String,
        /// A line break precedes this segment.
        line_break_before: bool,
    },
    /// A matched trigger phrase, in its original casing.
    Link {
        content: String,
        url: String,
        /// Off-site target: opens in a new, opener-isolated context.
        external: bool,
    },
}

impl Segment {
    /// The literal text this segment carries.
    #[inline]
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content, .. } | Self::Link { content, .. } => content,
        }
    }

    /// Whether a line break precedes this segment.
    #[inline]
    pub fn has_break_before(&self) -> bool {
        matches!(
            self,
            Self::Text {
                line_break_before: true,
                ..
            }
        )
    }
}

/// Reassemble the original prose from a segment sequence.
pub fn flatten(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.has_break_before() {
            out.push('\n');
        }
        out.push_str(segment.content());
    }
    out
}
