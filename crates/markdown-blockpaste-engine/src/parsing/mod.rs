//! # Markdown to Block Conversion
//!
//! The pipeline run on every intercepted paste:
//!
//! ```text
//! text ─► detect ─► extract_code_fences ─► extract_tables ─► segment ─► assemble
//!         (gate)     [CODE_PLACEHOLDER]     [TABLE_PLACEHOLDER]  headers/   ordered
//!                                                                paragraphs blocks
//! ```
//!
//! Fences are pulled out first so pipe rows inside a code block stay part of
//! its body.
//!
//! Everything is created and dropped inside one call; no parser state
//! survives between pastes.

pub mod assemble;
pub mod detect;
pub mod extract;
pub mod segment;
pub mod snapshot;

pub use assemble::{BlockOrder, assemble, assemble_in_source_order};
pub use detect::{SyntaxHint, detect, looks_like_markdown};
pub use extract::{Placeholder, extract_code_fences, extract_tables};
pub use segment::{LINE_BREAK, Slot, segment, segment_slots};

use crate::blocks::Block;
use extract::code_fence::CodeFence;

/// Knobs for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Language recorded for fences without an info string.
    pub default_language: String,
    /// Marker joining consecutive lines of a paragraph.
    pub line_break: String,
    pub order: BlockOrder,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            default_language: CodeFence::DEFAULT_LANGUAGE.to_string(),
            line_break: LINE_BREAK.to_string(),
            order: BlockOrder::default(),
        }
    }
}

/// Converts `text` to blocks if it looks like markdown.
///
/// Returns `None` on a detector miss so the caller can fall back to a plain
/// paste.
pub fn convert(text: &str, options: &ConvertOptions) -> Option<Vec<Block>> {
    let hint = detect(text)?;
    log::debug!("paste looks like markdown ({})", hint.as_str());
    Some(convert_markdown(text, options))
}

/// Converts `text` to blocks unconditionally.
pub fn convert_markdown(text: &str, options: &ConvertOptions) -> Vec<Block> {
    let text = normalize_newlines(text);

    let (code_blocks, residual) = extract_code_fences(&text, &options.default_language);
    let (tables, residual) = extract_tables(&residual);
    log::debug!(
        "extracted {} table(s) and {} code fence(s)",
        tables.len(),
        code_blocks.len()
    );

    match options.order {
        BlockOrder::ExtractedFirst => {
            let prose = segment(&residual, &options.line_break);
            assemble(tables, code_blocks, prose)
        }
        BlockOrder::SourceOrder => {
            let slots = segment_slots(&residual, &options.line_break);
            assemble_in_source_order(tables, code_blocks, slots)
        }
    }
}

/// Clipboard text from some platforms uses CRLF; the extractors are
/// line-anchored on `\n` only.
fn normalize_newlines(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains('\r') {
        std::borrow::Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}
