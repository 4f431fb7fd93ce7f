use serde::{Deserialize, Serialize};

use crate::blocks::Block;

use super::host::{BlockHost, BlockId, HostError, InsertOptions};

/// A block as stored in a document, with its stable id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocBlock {
    pub id: BlockId,
    pub block: Block,
}

/// In-memory block document: an ordered list of blocks plus a cursor.
///
/// This is the host the CLI and tests paste into. Drafts persist as
///
/// ```json
/// { "blocks": [ { "id": "…", "block": { "type": "paragraph", "data": { "text": "…" } } } ] }
/// ```
///
/// The cursor and version are session state and are not persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    blocks: Vec<DocBlock>,
    #[serde(skip)]
    cursor: Option<usize>,
    #[serde(skip)]
    version: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from blocks, assigning fresh ids.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            blocks: blocks
                .into_iter()
                .map(|block| DocBlock {
                    id: BlockId::new(),
                    block,
                })
                .collect(),
            cursor: None,
            version: 0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().map(|b| &b.block)
    }

    pub fn entries(&self) -> &[DocBlock] {
        &self.blocks
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index).map(|b| &b.block)
    }

    /// Version counter incremented on each mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Places the cursor on block `index`; out-of-range positions clear it.
    pub fn set_cursor(&mut self, index: Option<usize>) {
        self.cursor = index.filter(|&i| i < self.blocks.len());
    }
}

impl BlockHost for Document {
    fn insert(
        &mut self,
        block: &Block,
        options: &InsertOptions,
        index: usize,
    ) -> Result<BlockId, HostError> {
        let len = self.blocks.len();
        if index > len {
            return Err(HostError::InvalidIndex { index, len });
        }

        let id = BlockId::new();
        self.blocks.insert(
            index,
            DocBlock {
                id,
                block: block.clone(),
            },
        );
        // Keep the cursor on the same block when inserting above it.
        if let Some(cursor) = self.cursor
            && index <= cursor
        {
            self.cursor = Some(cursor + 1);
        }
        if options.focus {
            self.cursor = Some(index);
        }
        self.version += 1;
        Ok(id)
    }

    fn delete(&mut self, index: usize) -> Result<Block, HostError> {
        let len = self.blocks.len();
        if index >= len {
            return Err(HostError::InvalidIndex { index, len });
        }

        let removed = self.blocks.remove(index);
        self.cursor = match self.cursor {
            Some(cursor) if cursor == index => index.checked_sub(1),
            Some(cursor) if cursor > index => Some(cursor - 1),
            other => other,
        };
        self.version += 1;
        Ok(removed.block)
    }

    fn current_cursor_index(&self) -> Option<usize> {
        self.cursor
    }

    fn len(&self) -> usize {
        self.blocks.len()
    }
}
