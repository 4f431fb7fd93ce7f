//! # Region Extraction
//!
//! Extractors pull whole multi-line regions (pipe tables, fenced code) out of
//! the pasted text before line segmentation. Each matched region is replaced
//! by a single placeholder line so the segmenter skips it.
//!
//! Placeholders only live inside one conversion call. Literal occurrences of
//! the sentinel text in user input are not supported.

pub mod code_fence;
pub mod table;

pub use code_fence::extract_code_fences;
pub use table::extract_tables;

/// Sentinel lines standing in for already-extracted regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Table,
    Code,
}

impl Placeholder {
    pub const TABLE: &'static str = "[TABLE_PLACEHOLDER]";
    pub const CODE: &'static str = "[CODE_PLACEHOLDER]";

    /// Recognizes a residual line that is exactly one placeholder.
    pub fn from_line(line: &str) -> Option<Self> {
        match line.trim() {
            Self::TABLE => Some(Placeholder::Table),
            Self::CODE => Some(Placeholder::Code),
            _ => None,
        }
    }
}
