use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blocks::Block;

/// Stable identifier the host assigns to each inserted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-insert settings passed through to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertOptions {
    /// Move the host cursor onto the inserted block.
    pub focus: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostError {
    #[error("Index {index} is out of bounds for a document of {len} blocks")]
    InvalidIndex { index: usize, len: usize },
    #[error("Host rejected {kind} block: {reason}")]
    Rejected { kind: &'static str, reason: String },
}

/// The editor surface a splice writes into.
///
/// Methods take `&mut self`, so inserts into one host are strictly sequential
/// and two pastes can never interleave.
pub trait BlockHost {
    /// Inserts `block` so that it ends up at `index`.
    fn insert(
        &mut self,
        block: &Block,
        options: &InsertOptions,
        index: usize,
    ) -> Result<BlockId, HostError>;

    /// Removes and returns the block at `index`. Used to roll back a failed
    /// splice.
    fn delete(&mut self, index: usize) -> Result<Block, HostError>;

    /// Index of the block holding the cursor, if any.
    fn current_cursor_index(&self) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
