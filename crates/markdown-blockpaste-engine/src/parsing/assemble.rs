use std::collections::VecDeque;

use crate::blocks::{Block, CodeData, TableData};

use super::{extract::Placeholder, segment::Slot};

/// How extracted regions are ordered relative to prose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockOrder {
    /// All tables, then all code blocks, then headers and paragraphs.
    ///
    /// Tables and code do not keep their position relative to the
    /// surrounding prose. This is the long-standing paste behavior.
    #[default]
    ExtractedFirst,
    /// Tables and code are put back where their placeholder stood.
    SourceOrder,
}

/// Concatenates tables, code blocks and prose, in that order.
pub fn assemble(
    tables: Vec<TableData>,
    code_blocks: Vec<CodeData>,
    prose: Vec<Block>,
) -> Vec<Block> {
    let mut out = Vec::with_capacity(tables.len() + code_blocks.len() + prose.len());
    out.extend(tables.into_iter().map(Block::from));
    out.extend(code_blocks.into_iter().map(Block::from));
    out.extend(prose);
    out
}

/// Resolves placeholder slots back to the extracted blocks they stand for.
///
/// Each extractor returns its regions in text order and each region left
/// exactly one placeholder, so the n-th table placeholder is the n-th table.
/// Anything left unclaimed is appended rather than dropped.
pub fn assemble_in_source_order(
    tables: Vec<TableData>,
    code_blocks: Vec<CodeData>,
    slots: Vec<Slot>,
) -> Vec<Block> {
    let mut tables: VecDeque<TableData> = tables.into();
    let mut code_blocks: VecDeque<CodeData> = code_blocks.into();
    let mut out = Vec::with_capacity(slots.len());

    for slot in slots {
        match slot {
            Slot::Block(block) => out.push(block),
            Slot::Placeholder(Placeholder::Table) => {
                out.extend(tables.pop_front().map(Block::from));
            }
            Slot::Placeholder(Placeholder::Code) => {
                out.extend(code_blocks.pop_front().map(Block::from));
            }
        }
    }

    out.extend(tables.into_iter().map(Block::from));
    out.extend(code_blocks.into_iter().map(Block::from));
    out
}
