use crate::blocks::{Block, BlockKind};

use super::{
    host::{BlockHost, HostError, InsertOptions},
    patch::Patch,
};

#[derive(Debug, thiserror::Error)]
pub enum SpliceError {
    #[error("Failed to insert {kind} block at index {index}: {source}")]
    Insert {
        kind: BlockKind,
        index: usize,
        source: HostError,
    },
    #[error(
        "Failed to insert block at index {index} ({source}) and rollback left the document modified: {rollback}"
    )]
    Rollback {
        index: usize,
        source: HostError,
        rollback: HostError,
    },
}

/// Inserts `blocks` right after `cursor`, in order, as one unit.
///
/// Block `i` lands at `cursor + 1 + i` (or at `i` when there is no cursor),
/// so the batch keeps its relative order. If any insert fails, every block
/// this call already inserted is removed again, last first, and the
/// document is left as it was. An empty batch touches nothing.
///
/// The last block is inserted with focus so the cursor ends up after the
/// pasted content.
pub fn splice<H>(
    host: &mut H,
    cursor: Option<usize>,
    blocks: &[Block],
) -> Result<Patch, SpliceError>
where
    H: BlockHost + ?Sized,
{
    let start = cursor.map_or(0, |c| c + 1);
    if blocks.is_empty() {
        return Ok(Patch {
            inserted: start..start,
            new_cursor: host.current_cursor_index(),
        });
    }

    for (offset, block) in blocks.iter().enumerate() {
        let index = start + offset;
        let options = InsertOptions {
            focus: offset + 1 == blocks.len(),
        };
        if let Err(source) = host.insert(block, &options, index) {
            log::warn!(
                "insert of {} block at {index} failed, rolling back {offset} block(s): {source}",
                block.kind()
            );
            if let Err(rollback) = undo_inserts(host, start, offset) {
                return Err(SpliceError::Rollback {
                    index,
                    source,
                    rollback,
                });
            }
            return Err(SpliceError::Insert {
                kind: block.kind(),
                index,
                source,
            });
        }
    }

    Ok(Patch {
        inserted: start..start + blocks.len(),
        new_cursor: host.current_cursor_index(),
    })
}

fn undo_inserts<H>(host: &mut H, start: usize, count: usize) -> Result<(), HostError>
where
    H: BlockHost + ?Sized,
{
    for index in (start..start + count).rev() {
        host.delete(index)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{BlockId, Document};
    use pretty_assertions::assert_eq;

    /// Host that rejects the n-th insert it sees.
    struct FailingHost {
        inner: Document,
        fail_on: usize,
        seen: usize,
    }

    impl BlockHost for FailingHost {
        fn insert(
            &mut self,
            block: &Block,
            options: &InsertOptions,
            index: usize,
        ) -> Result<BlockId, HostError> {
            self.seen += 1;
            if self.seen == self.fail_on {
                return Err(HostError::Rejected {
                    kind: block.kind().as_str(),
                    reason: "quota exceeded".into(),
                });
            }
            self.inner.insert(block, options, index)
        }

        fn delete(&mut self, index: usize) -> Result<Block, HostError> {
            self.inner.delete(index)
        }

        fn current_cursor_index(&self) -> Option<usize> {
            self.inner.current_cursor_index()
        }

        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    fn batch() -> Vec<Block> {
        vec![
            Block::header(1, "one"),
            Block::paragraph("two"),
            Block::code("sh", "three"),
        ]
    }

    #[test]
    fn inserts_after_cursor_in_order() {
        let mut doc = Document::from_blocks([Block::paragraph("a"), Block::paragraph("z")]);
        doc.set_cursor(Some(0));

        let patch = splice(&mut doc, Some(0), &batch()).unwrap();

        assert_eq!(patch.inserted, 1..4);
        let blocks: Vec<_> = doc.blocks().cloned().collect();
        let mut expected = vec![Block::paragraph("a")];
        expected.extend(batch());
        expected.push(Block::paragraph("z"));
        assert_eq!(blocks, expected);
    }

    #[test]
    fn cursor_ends_on_last_inserted_block() {
        let mut doc = Document::from_blocks([Block::paragraph("a")]);
        doc.set_cursor(Some(0));
        let patch = splice(&mut doc, Some(0), &batch()).unwrap();
        assert_eq!(patch.new_cursor, Some(3));
    }

    #[test]
    fn no_cursor_inserts_at_top() {
        let mut doc = Document::from_blocks([Block::paragraph("a")]);
        let patch = splice(&mut doc, None, &[Block::paragraph("new")]).unwrap();
        assert_eq!(patch.inserted, 0..1);
        assert_eq!(doc.get(0), Some(&Block::paragraph("new")));
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        for cursor in [None, Some(0), Some(1)] {
            let mut doc = Document::from_blocks([Block::paragraph("a"), Block::paragraph("b")]);
            let before = doc.clone();
            let patch = splice(&mut doc, cursor, &[]).unwrap();
            assert!(patch.is_empty());
            assert_eq!(doc, before);
        }
    }

    #[test]
    fn failed_insert_rolls_back_whole_batch() {
        let original = Document::from_blocks([Block::paragraph("a"), Block::paragraph("b")]);
        let mut host = FailingHost {
            inner: original.clone(),
            fail_on: 3,
            seen: 0,
        };

        let err = splice(&mut host, Some(0), &batch()).unwrap_err();

        assert!(matches!(
            err,
            SpliceError::Insert {
                kind: BlockKind::Code,
                index: 3,
                ..
            }
        ));
        assert_eq!(host.inner.entries(), original.entries());
    }

    #[test]
    fn invalid_index_is_reported() {
        let mut doc = Document::new();
        let err = splice(&mut doc, Some(5), &[Block::paragraph("x")]).unwrap_err();
        assert!(matches!(
            err,
            SpliceError::Insert {
                source: HostError::InvalidIndex { index: 6, len: 0 },
                ..
            }
        ));
        assert!(doc.is_empty());
    }
}
