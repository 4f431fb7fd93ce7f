/// Result of splicing a batch of blocks into a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Target indices that received the new blocks, in order.
    pub inserted: std::ops::Range<usize>,
    /// Cursor position after the splice.
    pub new_cursor: Option<usize>,
}

impl Patch {
    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }
}
