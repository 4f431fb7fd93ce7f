//! Cheap "is this markdown?" gate run before any conversion work.
//!
//! A fixed, ordered list of single-line patterns. The first match wins and
//! nothing here ever parses the document.

use std::sync::OnceLock;

use regex::Regex;

/// Which markdown construct made the detector fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxHint {
    AtxHeader,
    UnorderedListItem,
    BlockQuote,
    CodeFence,
    PipeTableRow,
    TaskMarker,
}

impl SyntaxHint {
    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxHint::AtxHeader => "atx-header",
            SyntaxHint::UnorderedListItem => "unordered-list-item",
            SyntaxHint::BlockQuote => "blockquote",
            SyntaxHint::CodeFence => "code-fence",
            SyntaxHint::PipeTableRow => "pipe-table-row",
            SyntaxHint::TaskMarker => "task-marker",
        }
    }
}

fn patterns() -> &'static [(SyntaxHint, Regex)] {
    static PATTERNS: OnceLock<Vec<(SyntaxHint, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (SyntaxHint::AtxHeader, r"(?m)^#{1,6}[ \t]"),
            (SyntaxHint::UnorderedListItem, r"(?m)^[*-][ \t]"),
            (SyntaxHint::BlockQuote, r"(?m)^>[ \t]"),
            (SyntaxHint::CodeFence, r"(?m)^```"),
            (SyntaxHint::PipeTableRow, r"(?m)^[^\n|]*\|[^\n|]*\|[^\n]*$"),
            (SyntaxHint::TaskMarker, r"- \[ \]|\[x\]"),
        ]
        .into_iter()
        .map(|(hint, pattern)| {
            (
                hint,
                Regex::new(pattern).expect("Invalid markdown detector regex"),
            )
        })
        .collect()
    })
}

/// Returns the first pattern that matches `text`, in detector order.
pub fn detect(text: &str) -> Option<SyntaxHint> {
    patterns()
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(hint, _)| *hint)
}

/// True when `text` looks like markdown and a paste should be converted.
pub fn looks_like_markdown(text: &str) -> bool {
    detect(text).is_some()
}
