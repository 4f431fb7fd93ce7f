//! # Block Schema
//!
//! The typed content units the host editor consumes. A [`Block`] is a closed
//! tagged union: adding a kind means adding a variant here, never a loosely
//! typed payload.
//!
//! Blocks serialize in the host's wire shape:
//!
//! ```json
//! { "type": "header", "data": { "text": "Hello", "level": 3 } }
//! ```

use serde::{Deserialize, Serialize};

/// Payload of a `header` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    pub text: String,
    /// ATX level, always in `1..=6`.
    pub level: u8,
}

/// Payload of a `paragraph` block. May contain line-break markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphData {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    Unordered,
}

/// Payload of a `list` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListData {
    pub style: ListStyle,
    pub items: Vec<String>,
}

/// Payload of a `quote` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteData {
    pub text: String,
    #[serde(default)]
    pub caption: String,
}

/// Payload of a `code` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeData {
    /// Exact fence body, byte for byte.
    pub code: String,
    pub language: String,
}

/// Payload of a `table` block.
///
/// `content` is rectangular: every row has the same number of cells. The
/// first row is the heading row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    pub with_headings: bool,
    pub content: Vec<Vec<String>>,
}

impl TableData {
    /// Number of columns, taken from the first row.
    pub fn columns(&self) -> usize {
        self.content.first().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub checked: bool,
}

/// Payload of a `checklist` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistData {
    pub items: Vec<ChecklistItem>,
}

/// One typed unit of document content.
///
/// The converter only produces `Header`, `Paragraph`, `Code` and `Table`;
/// the remaining kinds belong to the shared schema so documents holding them
/// still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block {
    Header(HeaderData),
    Paragraph(ParagraphData),
    List(ListData),
    Quote(QuoteData),
    Code(CodeData),
    Table(TableData),
    Checklist(ChecklistData),
}

/// Discriminant of a [`Block`], used where only the kind matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Header,
    Paragraph,
    List,
    Quote,
    Code,
    Table,
    Checklist,
}

impl BlockKind {
    /// The wire name of this kind (the serialized `type` tag).
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Paragraph => "paragraph",
            BlockKind::List => "list",
            BlockKind::Quote => "quote",
            BlockKind::Code => "code",
            BlockKind::Table => "table",
            BlockKind::Checklist => "checklist",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Block {
    pub fn header(level: u8, text: impl Into<String>) -> Self {
        Block::Header(HeaderData {
            text: text.into(),
            level,
        })
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(ParagraphData { text: text.into() })
    }

    pub fn code(language: impl Into<String>, code: impl Into<String>) -> Self {
        Block::Code(CodeData {
            code: code.into(),
            language: language.into(),
        })
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Header(_) => BlockKind::Header,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::List(_) => BlockKind::List,
            Block::Quote(_) => BlockKind::Quote,
            Block::Code(_) => BlockKind::Code,
            Block::Table(_) => BlockKind::Table,
            Block::Checklist(_) => BlockKind::Checklist,
        }
    }
}

impl From<TableData> for Block {
    fn from(table: TableData) -> Self {
        Block::Table(table)
    }
}

impl From<CodeData> for Block {
    fn from(code: CodeData) -> Self {
        Block::Code(code)
    }
}
