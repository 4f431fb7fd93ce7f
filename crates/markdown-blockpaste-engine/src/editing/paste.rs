use std::collections::BTreeMap;

use crate::{
    blocks::Block,
    parsing::{ConvertOptions, convert},
};

use super::{
    editor::{EditorError, EditorHandle},
    host::BlockHost,
    patch::Patch,
    splice::{SpliceError, splice},
};

/// The only clipboard representation the converter reads.
pub const TEXT_PLAIN: &str = "text/plain";

/// Clipboard contents captured from one paste event, keyed by MIME type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    items: BTreeMap<String, String>,
}

impl ClipboardPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// A payload carrying only `text/plain`.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(TEXT_PLAIN, text)
    }

    pub fn with(mut self, mime: impl Into<String>, data: impl Into<String>) -> Self {
        self.items.insert(mime.into(), data.into());
        self
    }

    pub fn plain_text(&self) -> Option<&str> {
        self.items.get(TEXT_PLAIN).map(String::as_str)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Splice(#[from] SpliceError),
}

/// What happened to one paste event.
#[derive(Debug)]
pub enum PasteOutcome {
    /// Not markdown (or no plain text): the host's default paste runs.
    NotIntercepted,
    /// Converted blocks were spliced in.
    Inserted(Patch),
    /// Conversion was attempted and failed; the document is unchanged.
    Failed(PasteError),
}

impl PasteOutcome {
    /// Whether the host's default paste handling must be suppressed.
    pub fn is_intercepted(&self) -> bool {
        !matches!(self, PasteOutcome::NotIntercepted)
    }
}

/// Paste-event boundary: detects, converts and splices, and never lets an
/// error escape to the user.
#[derive(Debug, Clone, Default)]
pub struct PasteHandler {
    options: ConvertOptions,
}

impl PasteHandler {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn handle<H: BlockHost>(
        &self,
        editor: &EditorHandle<H>,
        clipboard: &ClipboardPayload,
    ) -> PasteOutcome {
        let Some(text) = clipboard.plain_text() else {
            return PasteOutcome::NotIntercepted;
        };
        let Some(blocks) = convert(text, &self.options) else {
            log::trace!("paste is not markdown, leaving it to the editor");
            return PasteOutcome::NotIntercepted;
        };

        match apply(editor, &blocks) {
            Ok(patch) => {
                log::debug!("pasted {} block(s) at {:?}", patch.len(), patch.inserted);
                PasteOutcome::Inserted(patch)
            }
            Err(err) => {
                log::error!("markdown paste of {} block(s) failed: {err}", blocks.len());
                PasteOutcome::Failed(err)
            }
        }
    }
}

fn apply<H: BlockHost>(editor: &EditorHandle<H>, blocks: &[Block]) -> Result<Patch, PasteError> {
    let patch = editor.with_host(|host| {
        let cursor = host.current_cursor_index();
        splice(host, cursor, blocks)
    })??;
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{Document, EditorSlot};
    use pretty_assertions::assert_eq;

    fn mounted(doc: Document) -> (EditorSlot<Document>, EditorHandle<Document>) {
        let mut slot = EditorSlot::new();
        let handle = slot.mount(doc);
        (slot, handle)
    }

    #[test]
    fn plain_text_is_left_to_the_editor() {
        let (_slot, handle) = mounted(Document::new());
        let outcome = PasteHandler::default().handle(&handle, &ClipboardPayload::plain("hello"));
        assert!(!outcome.is_intercepted());
        assert_eq!(handle.with_host(|d| d.version()), Ok(0));
    }

    #[test]
    fn only_text_plain_is_read() {
        let (_slot, handle) = mounted(Document::new());
        let clipboard = ClipboardPayload::new().with("text/html", "<h1>Title</h1>");
        let outcome = PasteHandler::default().handle(&handle, &clipboard);
        assert!(matches!(outcome, PasteOutcome::NotIntercepted));
    }

    #[test]
    fn markdown_is_spliced_after_cursor() {
        let mut doc = Document::from_blocks([Block::paragraph("before")]);
        doc.set_cursor(Some(0));
        let (mut slot, handle) = mounted(doc);

        let outcome = PasteHandler::default().handle(
            &handle,
            &ClipboardPayload::plain("# Pasted\n\nbody"),
        );

        assert!(matches!(outcome, PasteOutcome::Inserted(ref p) if p.inserted == (1..3)));
        let doc = slot.unmount().unwrap();
        assert_eq!(
            doc.blocks().cloned().collect::<Vec<_>>(),
            vec![
                Block::paragraph("before"),
                Block::header(1, "Pasted"),
                Block::paragraph("body"),
            ]
        );
    }

    #[test]
    fn paste_after_unmount_fails_without_panicking() {
        let (mut slot, handle) = mounted(Document::new());
        slot.unmount();

        let outcome = PasteHandler::default().handle(&handle, &ClipboardPayload::plain("# Late"));

        assert!(matches!(
            outcome,
            PasteOutcome::Failed(PasteError::Editor(EditorError::Destroyed))
        ));
        assert!(outcome.is_intercepted());
    }
}
