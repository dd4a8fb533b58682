//! Reversible edit history.
//!
//! [`EditCommandStack`] stores [`EditOperation`]s in groups. A group is the
//! unit of undo: compound commands such as "paste over selection" open a
//! group with [`begin_group`](EditCommandStack::begin_group) so their delete
//! and insert come back as one step.
//!
//! # Examples
//!
//! ```
//! use quillpad::{DocumentBuffer, EditCommandStack, EditOperation};
//!
//! let mut doc = DocumentBuffer::with_text("Hello world");
//! let mut history = EditCommandStack::new();
//!
//! doc.insert_at(5, ",").unwrap();
//! history.record(EditOperation::Insert { offset: 5, text: ",".into() });
//!
//! history.undo(&mut doc).unwrap();
//! assert_eq!(doc.text(), "Hello world");
//! history.redo(&mut doc).unwrap();
//! assert_eq!(doc.text(), "Hello, world");
//! ```

use crate::error::{Error, Result};
use crate::text::document::DocumentBuffer;

/// An edit operation that carries enough to invert itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOperation {
    Insert { offset: usize, text: String },
    Delete { offset: usize, text: String },
}

impl EditOperation {
    /// The operation that undoes this one.
    #[must_use]
    pub fn invert(&self) -> Self {
        match self {
            Self::Insert { offset, text } => Self::Delete {
                offset: *offset,
                text: text.clone(),
            },
            Self::Delete { offset, text } => Self::Insert {
                offset: *offset,
                text: text.clone(),
            },
        }
    }

    /// Apply this operation to `buffer`.
    ///
    /// A `Delete` fails with [`Error::HistoryMismatch`] unless the buffer
    /// still holds its text at its offset.
    pub fn apply(&self, buffer: &mut DocumentBuffer) -> Result<()> {
        match self {
            Self::Insert { offset, text } => buffer.insert_at(*offset, text),
            Self::Delete { offset, text } => {
                let end = offset + text.chars().count();
                if buffer.get_text(*offset, end)? != *text {
                    return Err(Error::HistoryMismatch { offset: *offset });
                }
                buffer.delete_range(*offset, end).map(|_| ())
            }
        }
    }

    /// Cursor position after this operation has been applied.
    #[must_use]
    pub fn cursor_after(&self) -> usize {
        match self {
            Self::Insert { offset, text } => offset + text.chars().count(),
            Self::Delete { offset, .. } => *offset,
        }
    }
}

/// Default maximum number of undo groups to retain.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 1000;

/// Undo/redo stacks of edit groups with bounded depth.
#[derive(Clone, Debug)]
pub struct EditCommandStack {
    undo_stack: Vec<Vec<EditOperation>>,
    redo_stack: Vec<Vec<EditOperation>>,
    open_group: Option<Vec<EditOperation>>,
    /// Oldest groups are dropped once this is exceeded.
    max_depth: usize,
}

impl Default for EditCommandStack {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            open_group: None,
            max_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl EditCommandStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history retaining at most `max_depth` undo groups.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Current depth limit.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Change the depth limit, pruning immediately if needed.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        self.enforce_depth();
    }

    /// Record an operation that has already been applied.
    ///
    /// Clears the redo stack.
    pub fn record(&mut self, op: EditOperation) {
        self.redo_stack.clear();
        match self.open_group.as_mut() {
            Some(group) => group.push(op),
            None => {
                self.undo_stack.push(vec![op]);
                self.enforce_depth();
            }
        }
    }

    /// Start collecting operations into a single undo step.
    ///
    /// Nested calls are flattened into the outermost group.
    pub fn begin_group(&mut self) {
        if self.open_group.is_none() {
            self.open_group = Some(Vec::new());
        }
    }

    /// Close the open group. Empty groups are discarded.
    pub fn end_group(&mut self) {
        if let Some(group) = self.open_group.take() {
            if !group.is_empty() {
                self.undo_stack.push(group);
                self.enforce_depth();
            }
        }
    }

    /// Revert the most recent group.
    ///
    /// Returns the inverse operations that were applied, in order.
    pub fn undo(&mut self, buffer: &mut DocumentBuffer) -> Result<Vec<EditOperation>> {
        self.end_group();
        let group = self.undo_stack.pop().ok_or(Error::NothingToUndo)?;

        match replay(buffer, group.iter().rev().map(EditOperation::invert)) {
            Ok(applied) => {
                tracing::debug!(ops = applied.len(), "undo");
                self.redo_stack.push(group);
                Ok(applied)
            }
            Err(err) => {
                // The buffer was changed behind the history's back.
                self.undo_stack.push(group);
                Err(err)
            }
        }
    }

    /// Re-apply the most recently undone group.
    ///
    /// Returns the operations that were applied, in order.
    pub fn redo(&mut self, buffer: &mut DocumentBuffer) -> Result<Vec<EditOperation>> {
        self.end_group();
        let group = self.redo_stack.pop().ok_or(Error::NothingToRedo)?;

        match replay(buffer, group.iter().cloned()) {
            Ok(applied) => {
                tracing::debug!(ops = applied.len(), "redo");
                self.undo_stack.push(group);
                self.enforce_depth();
                Ok(applied)
            }
            Err(err) => {
                self.redo_stack.push(group);
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() || self.open_group.as_ref().is_some_and(|g| !g.is_empty())
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo groups available.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open_group = None;
    }

    fn enforce_depth(&mut self) {
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }
}

/// Apply `ops` in order, returning them.
///
/// Runs against a copy and commits only if every op applies, so a failure
/// leaves `buffer` untouched.
fn replay(
    buffer: &mut DocumentBuffer,
    ops: impl Iterator<Item = EditOperation>,
) -> Result<Vec<EditOperation>> {
    let mut scratch = buffer.clone();
    let mut applied = Vec::new();
    for op in ops {
        op.apply(&mut scratch)?;
        applied.push(op);
    }
    *buffer = scratch;
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(
        doc: &mut DocumentBuffer,
        history: &mut EditCommandStack,
        offset: usize,
        text: &str,
    ) {
        doc.insert_at(offset, text).unwrap();
        history.record(EditOperation::Insert {
            offset,
            text: text.to_string(),
        });
    }

    fn delete(
        doc: &mut DocumentBuffer,
        history: &mut EditCommandStack,
        start: usize,
        end: usize,
    ) {
        let text = doc.delete_range(start, end).unwrap();
        history.record(EditOperation::Delete {
            offset: start,
            text,
        });
    }

    #[test]
    fn test_invert() {
        let op = EditOperation::Insert {
            offset: 3,
            text: "abc".into(),
        };
        assert_eq!(
            op.invert(),
            EditOperation::Delete {
                offset: 3,
                text: "abc".into()
            }
        );
        assert_eq!(op.invert().invert(), op);
    }

    #[test]
    fn test_undo_insert() {
        let mut doc = DocumentBuffer::with_text("Hello world");
        let mut history = EditCommandStack::new();
        insert(&mut doc, &mut history, 5, ",");
        assert_eq!(doc.text(), "Hello, world");

        let applied = history.undo(&mut doc).unwrap();
        assert_eq!(
            applied,
            vec![EditOperation::Delete {
                offset: 5,
                text: ",".into()
            }]
        );
        assert_eq!(applied[0].cursor_after(), 5);
        assert_eq!(doc.text(), "Hello world");
    }

    #[test]
    fn test_undo_delete_then_redo() {
        let mut doc = DocumentBuffer::with_text("Hello, world");
        let mut history = EditCommandStack::new();
        delete(&mut doc, &mut history, 5, 7);
        assert_eq!(doc.text(), "Helloworld");

        let undone = history.undo(&mut doc).unwrap();
        assert_eq!(undone[0].cursor_after(), 7);
        assert_eq!(doc.text(), "Hello, world");
        let redone = history.redo(&mut doc).unwrap();
        assert_eq!(redone[0].cursor_after(), 5);
        assert_eq!(doc.text(), "Helloworld");
    }

    #[test]
    fn test_empty_stacks_report_state_errors() {
        let mut doc = DocumentBuffer::with_text("abc");
        let mut history = EditCommandStack::new();
        assert!(matches!(history.undo(&mut doc), Err(Error::NothingToUndo)));
        assert!(matches!(history.redo(&mut doc), Err(Error::NothingToRedo)));
        assert_eq!(doc.text(), "abc");
    }

    #[test]
    fn test_record_clears_redo() {
        let mut doc = DocumentBuffer::new();
        let mut history = EditCommandStack::new();
        insert(&mut doc, &mut history, 0, "a");
        history.undo(&mut doc).unwrap();
        assert!(history.can_redo());

        insert(&mut doc, &mut history, 0, "b");
        assert!(!history.can_redo());
        assert_eq!(doc.text(), "b");
    }

    #[test]
    fn test_group_undoes_as_one_step() {
        let mut doc = DocumentBuffer::with_text("one two");
        let mut history = EditCommandStack::new();

        history.begin_group();
        delete(&mut doc, &mut history, 4, 7);
        insert(&mut doc, &mut history, 4, "three");
        history.end_group();
        assert_eq!(doc.text(), "one three");
        assert_eq!(history.undo_depth(), 1);

        history.undo(&mut doc).unwrap();
        assert_eq!(doc.text(), "one two");
        history.redo(&mut doc).unwrap();
        assert_eq!(doc.text(), "one three");
    }

    #[test]
    fn test_empty_group_is_discarded() {
        let mut history = EditCommandStack::new();
        history.begin_group();
        history.end_group();
        assert!(!history.can_undo());
    }

    #[test]
    fn test_depth_limit() {
        let mut doc = DocumentBuffer::new();
        let mut history = EditCommandStack::with_max_depth(3);
        for i in 0..5 {
            let len = doc.len();
            insert(&mut doc, &mut history, len, &i.to_string());
        }
        assert_eq!(doc.text(), "01234");

        assert!(history.undo(&mut doc).is_ok());
        assert!(history.undo(&mut doc).is_ok());
        assert!(history.undo(&mut doc).is_ok());
        assert!(history.undo(&mut doc).is_err());
        assert_eq!(doc.text(), "01");
    }

    #[test]
    fn test_set_max_depth_prunes() {
        let mut doc = DocumentBuffer::new();
        let mut history = EditCommandStack::new();
        assert_eq!(history.max_depth(), DEFAULT_MAX_HISTORY_DEPTH);
        for _ in 0..4 {
            insert(&mut doc, &mut history, 0, "x");
        }
        history.set_max_depth(2);
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_undo_against_foreign_edit_fails_safely() {
        let mut doc = DocumentBuffer::new();
        let mut history = EditCommandStack::new();
        insert(&mut doc, &mut history, 0, "abcdef");
        doc.replace_all("ab");

        assert!(history.undo(&mut doc).is_err());
        assert_eq!(doc.text(), "ab");
        assert!(history.can_undo());
    }

    #[test]
    fn test_failed_group_undo_leaves_buffer_untouched() {
        let mut doc = DocumentBuffer::new();
        let mut history = EditCommandStack::new();
        history.begin_group();
        insert(&mut doc, &mut history, 0, "abcdef");
        insert(&mut doc, &mut history, 0, "X");
        history.end_group();

        // Removing "X" would succeed; removing "abcdef" afterwards cannot.
        doc.replace_all("Xab");
        assert!(history.undo(&mut doc).is_err());
        assert_eq!(doc.text(), "Xab");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_refuses_to_delete_foreign_text() {
        let mut doc = DocumentBuffer::new();
        let mut history = EditCommandStack::new();
        insert(&mut doc, &mut history, 0, "abc");
        doc.replace_all("xyz");

        let err = history.undo(&mut doc).unwrap_err();
        assert!(matches!(err, Error::HistoryMismatch { offset: 0 }));
        assert_eq!(doc.text(), "xyz");
        assert!(history.can_undo());
    }

    #[test]
    fn test_failed_redo_keeps_group_on_redo_stack() {
        let mut doc = DocumentBuffer::new();
        let mut history = EditCommandStack::new();
        insert(&mut doc, &mut history, 0, "hello");
        delete(&mut doc, &mut history, 0, 2);
        history.undo(&mut doc).unwrap();

        doc.replace_all("");
        assert!(history.redo(&mut doc).is_err());
        assert_eq!(doc.text(), "");
        assert!(history.can_redo());
    }
}
