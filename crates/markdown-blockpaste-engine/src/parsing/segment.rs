//! # Line Segmentation
//!
//! Two-phase walk over the residual text left by the extractors:
//!
//! 1. **Line Classification**: each line is classified on its own into a
//!    [`LineClass`] (blank, placeholder, header or text)
//! 2. **Block Construction**: a [`SegmentBuilder`] holds one paragraph
//!    accumulator and emits header/paragraph blocks as lines arrive
//!
//! Placeholder lines produce no block here and do not break the paragraph
//! around them. They are reported as [`Slot::Placeholder`], after the
//! paragraph they interrupted, so the assembler can decide where extracted
//! blocks go.

use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::Block;

use super::extract::Placeholder;

/// Marker joining the lines of one paragraph.
pub const LINE_BREAK: &str = "<br>";

/// Classification of a single residual line containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Placeholder(Placeholder),
    Header { level: u8, text: String },
    Text(String),
}

/// Classifies individual lines for segmentation.
pub struct LineClassifier;

impl LineClassifier {
    fn header_pattern() -> &'static Regex {
        static HEADER: OnceLock<Regex> = OnceLock::new();
        HEADER.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid ATX header regex"))
    }

    pub fn classify(&self, line: &str) -> LineClass {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some(placeholder) = Placeholder::from_line(line) {
            return LineClass::Placeholder(placeholder);
        }
        if let Some(caps) = Self::header_pattern().captures(line) {
            // Capture 1 is 1..=6 ASCII '#', so the length always fits.
            let level = caps[1].len() as u8;
            return LineClass::Header {
                level,
                text: caps[2].trim_end().to_string(),
            };
        }
        LineClass::Text(line.trim().to_string())
    }
}

/// One position in the segmented output: a prose block, or the spot where an
/// extracted region stood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Block(Block),
    Placeholder(Placeholder),
}

pub struct SegmentBuilder {
    line_break: String,
    paragraph: Option<String>,
    /// Placeholders seen while a paragraph was open.
    deferred: Vec<Placeholder>,
    out: Vec<Slot>,
}

impl SegmentBuilder {
    pub fn new(line_break: impl Into<String>) -> Self {
        Self {
            line_break: line_break.into(),
            paragraph: None,
            deferred: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Placeholder(placeholder) => {
                if self.paragraph.is_some() {
                    self.deferred.push(placeholder);
                } else {
                    self.out.push(Slot::Placeholder(placeholder));
                }
            }
            LineClass::Header { level, text } => {
                self.flush_paragraph();
                self.out.push(Slot::Block(Block::header(level, text)));
            }
            LineClass::Blank => self.flush_paragraph(),
            LineClass::Text(text) => self.extend_paragraph(&text),
        }
    }

    pub fn finish(mut self) -> Vec<Slot> {
        // EOF flush
        self.flush_paragraph();
        self.out
    }

    fn extend_paragraph(&mut self, text: &str) {
        match &mut self.paragraph {
            Some(acc) => {
                acc.push_str(&self.line_break);
                acc.push_str(text);
            }
            None => self.paragraph = Some(text.to_string()),
        }
    }

    fn flush_paragraph(&mut self) {
        if let Some(text) = self.paragraph.take() {
            self.out.push(Slot::Block(Block::paragraph(text)));
        }
        self.out.extend(self.deferred.drain(..).map(Slot::Placeholder));
    }
}

impl Default for SegmentBuilder {
    fn default() -> Self {
        Self::new(LINE_BREAK)
    }
}

/// Segments residual text, keeping placeholder positions.
pub fn segment_slots(residual: &str, line_break: &str) -> Vec<Slot> {
    let classifier = LineClassifier;
    let mut builder = SegmentBuilder::new(line_break);

    for line in residual.lines() {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

/// Segments residual text into header and paragraph blocks, in order.
/// Placeholder lines are skipped.
pub fn segment(residual: &str, line_break: &str) -> Vec<Block> {
    segment_slots(residual, line_break)
        .into_iter()
        .filter_map(|slot| match slot {
            Slot::Block(block) => Some(block),
            Slot::Placeholder(_) => None,
        })
        .collect()
}
