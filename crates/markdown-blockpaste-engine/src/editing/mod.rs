/*!
 * # Editing Module
 *
 * Everything that touches the host editor once blocks have been produced.
 *
 * ## Architecture Overview
 *
 * ### 1. Host Trait
 * - The editor is reached through [`BlockHost`]: insert, delete, cursor
 * - Methods take `&mut self`, so inserts into one host never interleave
 * - [`Document`] is the in-memory host used by the CLI and tests
 *
 * ### 2. Atomic Splice
 * - [`splice`] inserts a whole batch after the cursor, in order
 * - A failed insert rolls back the blocks already inserted by the same call
 * - The result is a [`Patch`] describing where the blocks landed
 *
 * ### 3. Scoped Editor Lifetime
 * - [`EditorSlot`] owns the editor from mount to unmount
 * - Converters only hold an [`EditorHandle`], which fails fast once the
 *   editor is gone instead of touching freed state
 *
 * ### 4. Paste Boundary
 * - [`PasteHandler`] runs detect → convert → splice for one clipboard payload
 * - Failures are logged and reported as [`PasteOutcome::Failed`], never
 *   surfaced to the user as errors
 *
 * ## Usage Pattern
 *
 * ```rust
 * use markdown_blockpaste_engine::editing::*;
 *
 * let mut slot = EditorSlot::new();
 * let editor = slot.mount(Document::new());
 *
 * let outcome = PasteHandler::default()
 *     .handle(&editor, &ClipboardPayload::plain("# Title\n\nBody text"));
 * assert!(outcome.is_intercepted());
 *
 * let doc = slot.unmount().unwrap();
 * assert_eq!(doc.blocks().count(), 2);
 * ```
 */

pub mod document;
pub mod editor;
pub mod host;
pub mod paste;
pub mod patch;
pub mod splice;

pub use document::{DocBlock, Document};
pub use editor::{EditorError, EditorHandle, EditorSlot};
pub use host::{BlockHost, BlockId, HostError, InsertOptions};
pub use paste::{ClipboardPayload, PasteError, PasteHandler, PasteOutcome, TEXT_PLAIN};
pub use patch::Patch;
pub use splice::{SpliceError, splice};
