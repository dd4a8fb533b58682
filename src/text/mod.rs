//! Text storage and reversible editing.
//!
//! Key types:
//!
//! - [`DocumentBuffer`]: Rope-backed text with cursor, selection and
//!   modified flag
//! - [`EditCommandStack`]: Grouped undo/redo over [`EditOperation`]s
//!
//! # Examples
//!
//! ```
//! use quillpad::{DocumentBuffer, EditCommandStack, EditOperation};
//!
//! let mut doc = DocumentBuffer::new();
//! let mut history = EditCommandStack::new();
//!
//! doc.insert_at(0, "Hello").unwrap();
//! history.record(EditOperation::Insert { offset: 0, text: "Hello".into() });
//! let removed = doc.delete_range(0, 1).unwrap();
//! history.record(EditOperation::Delete { offset: 0, text: removed });
//!
//! while history.can_undo() {
//!     history.undo(&mut doc).unwrap();
//! }
//! assert!(doc.is_empty());
//! ```

mod document;
mod history;
mod rope;

pub use document::DocumentBuffer;
pub use history::{DEFAULT_MAX_HISTORY_DEPTH, EditCommandStack, EditOperation};
pub use rope::RopeWrapper;
