//! The document buffer: text, cursor, selection and modified flag.
//!
//! [`DocumentBuffer`] is the leaf of the editing core. Every mutation goes
//! through [`insert_at`](DocumentBuffer::insert_at) or
//! [`delete_range`](DocumentBuffer::delete_range), which validate their
//! offsets up front so a rejected call leaves the buffer untouched.
//!
//! # Examples
//!
//! ```
//! use quillpad::DocumentBuffer;
//!
//! let mut doc = DocumentBuffer::with_text("Hello world");
//! doc.insert_at(5, ",").unwrap();
//! assert_eq!(doc.text(), "Hello, world");
//! assert!(doc.is_modified());
//!
//! let removed = doc.delete_range(5, 6).unwrap();
//! assert_eq!(removed, ",");
//! assert!(doc.insert_at(99, "x").is_err());
//! ```

use crate::error::{Error, Result};
use crate::text::rope::RopeWrapper;
use std::ops::Range;

/// Text content with cursor and selection state.
///
/// Offsets are character offsets. The cursor always satisfies
/// `0 <= cursor <= len()` and the selection, when present, satisfies
/// `start <= end <= len()`.
#[derive(Clone, Debug, Default)]
pub struct DocumentBuffer {
    rope: RopeWrapper,
    cursor: usize,
    selection: Option<Range<usize>>,
    modified: bool,
    revision: u64,
}

impl DocumentBuffer {
    /// Create an empty, unmodified buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unmodified buffer holding `text`, cursor at the start.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: RopeWrapper::from_str(text),
            ..Self::default()
        }
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Number of lines (an empty buffer has one).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Underlying rope.
    #[must_use]
    pub fn rope(&self) -> &RopeWrapper {
        &self.rope
    }

    /// Content revision, bumped on every change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether there are changes since the last load or save.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Record that the current content matches what is on disk.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Current cursor offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor.
    pub fn set_cursor(&mut self, offset: usize) -> Result<()> {
        self.check_offset(offset)?;
        self.cursor = offset;
        Ok(())
    }

    /// Zero-based `(line, column)` of a character offset.
    pub fn line_col(&self, offset: usize) -> Result<(usize, usize)> {
        self.check_offset(offset)?;
        let line = self.rope.char_to_line(offset);
        Ok((line, offset - self.rope.line_to_char(line)))
    }

    /// Current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Select `[start, end)`. An empty range clears the selection.
    pub fn set_selection(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        self.selection = (start < end).then_some(start..end);
        Ok(())
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Select `range` with the cursor at its end, clamping both bounds to
    /// the document.
    pub fn select_clamped(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.selection = (start < end).then_some(start..end);
        self.cursor = end;
    }

    /// Select the whole document and put the cursor at its end.
    pub fn select_all(&mut self) {
        let len = self.len();
        self.selection = (len > 0).then_some(0..len);
        self.cursor = len;
    }

    /// Text under the selection.
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        self.selection
            .as_ref()
            .map(|range| self.rope.slice_to_string(range.clone()))
    }

    /// Insert `text` at `offset`.
    ///
    /// The cursor and selection bounds at or after `offset` move right by the
    /// number of inserted characters.
    pub fn insert_at(&mut self, offset: usize, text: &str) -> Result<()> {
        self.check_offset(offset)?;
        if text.is_empty() {
            return Ok(());
        }

        let inserted = text.chars().count();
        self.rope.insert(offset, text);

        if self.cursor >= offset {
            self.cursor += inserted;
        }
        if let Some(sel) = self.selection.as_mut() {
            if sel.start >= offset {
                sel.start += inserted;
            }
            if sel.end >= offset {
                sel.end += inserted;
            }
        }
        self.touch();
        Ok(())
    }

    /// Remove `[start, end)` and return the removed text.
    ///
    /// Cursor and selection bounds inside the range collapse to `start`;
    /// bounds after it move left.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<String> {
        self.check_range(start, end)?;
        if start == end {
            return Ok(String::new());
        }

        let deleted = self.rope.slice_to_string(start..end);
        self.rope.remove(start..end);

        let shift = |pos: usize| {
            if pos >= end {
                pos - (end - start)
            } else if pos > start {
                start
            } else {
                pos
            }
        };
        self.cursor = shift(self.cursor);
        self.selection = self
            .selection
            .take()
            .map(|sel| shift(sel.start)..shift(sel.end))
            .filter(|sel| sel.start < sel.end);
        self.touch();
        Ok(deleted)
    }

    /// Copy out `[start, end)`.
    pub fn get_text(&self, start: usize, end: usize) -> Result<String> {
        self.check_range(start, end)?;
        Ok(self.rope.slice_to_string(start..end))
    }

    /// Replace the whole content without recording an edit.
    ///
    /// Resets cursor, selection and the modified flag; used when a document
    /// is created or loaded.
    pub fn replace_all(&mut self, text: &str) {
        self.rope.replace(text);
        self.cursor = 0;
        self.selection = None;
        self.modified = false;
        self.revision = self.revision.wrapping_add(1);
    }

    fn touch(&mut self) {
        self.modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        self.check_range(offset, offset)
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        let len = self.len();
        if start > end || end > len {
            return Err(Error::OutOfRange { start, end, len });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_shifts_cursor_at_or_after_offset() {
        let mut doc = DocumentBuffer::with_text("Hello world");
        doc.set_cursor(5).unwrap();
        doc.insert_at(5, ",").unwrap();
        assert_eq!(doc.text(), "Hello, world");
        assert_eq!(doc.cursor(), 6);

        doc.set_cursor(2).unwrap();
        doc.insert_at(6, "!!").unwrap();
        assert_eq!(doc.cursor(), 2);
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut doc = DocumentBuffer::with_text("abc");
        let err = doc.insert_at(4, "x").unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                start: 4,
                end: 4,
                len: 3
            }
        ));
        assert_eq!(doc.text(), "abc");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let mut doc = DocumentBuffer::with_text("abc");
        doc.insert_at(1, "").unwrap();
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_delete_returns_removed_text() {
        let mut doc = DocumentBuffer::with_text("Hello, world");
        assert_eq!(doc.delete_range(5, 7).unwrap(), ", ");
        assert_eq!(doc.text(), "Helloworld");
        assert!(doc.is_modified());
    }

    #[test]
    fn test_delete_invalid_ranges() {
        let mut doc = DocumentBuffer::with_text("abc");
        assert!(doc.delete_range(2, 1).is_err());
        assert!(doc.delete_range(0, 4).is_err());
        assert_eq!(doc.text(), "abc");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_delete_adjusts_cursor() {
        let mut doc = DocumentBuffer::with_text("0123456789");
        doc.set_cursor(8).unwrap();
        doc.delete_range(2, 5).unwrap();
        assert_eq!(doc.cursor(), 5);

        doc.set_cursor(3).unwrap();
        doc.delete_range(1, 4).unwrap();
        assert_eq!(doc.cursor(), 1);
    }

    #[test]
    fn test_selection_follows_edits() {
        let mut doc = DocumentBuffer::with_text("one two three");
        doc.set_selection(4, 7).unwrap();
        doc.insert_at(0, ">> ").unwrap();
        assert_eq!(doc.selection(), Some(7..10));
        assert_eq!(doc.selected_text().as_deref(), Some("two"));

        doc.delete_range(6, 11).unwrap();
        assert_eq!(doc.selection(), None);
    }

    #[test]
    fn test_get_text_bounds() {
        let doc = DocumentBuffer::with_text("héllo");
        assert_eq!(doc.get_text(1, 3).unwrap(), "él");
        assert!(doc.get_text(3, 1).is_err());
        assert!(doc.get_text(0, 6).is_err());
    }

    #[test]
    fn test_select_all_and_replace_all() {
        let mut doc = DocumentBuffer::with_text("abc");
        doc.select_all();
        assert_eq!(doc.selection(), Some(0..3));
        assert_eq!(doc.cursor(), 3);

        doc.insert_at(3, "d").unwrap();
        doc.replace_all("fresh");
        assert_eq!(doc.text(), "fresh");
        assert_eq!(doc.cursor(), 0);
        assert_eq!(doc.selection(), None);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_line_col() {
        let doc = DocumentBuffer::with_text("ab\ncde\nf");
        assert_eq!(doc.line_col(0).unwrap(), (0, 0));
        assert_eq!(doc.line_col(4).unwrap(), (1, 1));
        assert_eq!(doc.line_col(8).unwrap(), (2, 1));
        assert!(doc.line_col(9).is_err());
    }

    #[test]
    fn test_select_clamped() {
        let mut doc = DocumentBuffer::with_text("abcdef");
        doc.select_clamped(1..4);
        assert_eq!(doc.selection(), Some(1..4));
        assert_eq!(doc.cursor(), 4);

        doc.select_clamped(3..99);
        assert_eq!(doc.selection(), Some(3..6));
        assert_eq!(doc.cursor(), 6);

        doc.select_clamped(8..9);
        assert_eq!(doc.selection(), None);
        assert_eq!(doc.cursor(), 6);
    }
}
