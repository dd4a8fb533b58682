//! The editor facade.
//!
//! [`Editor`] owns one document and everything that hangs off it: the undo
//! history, the formatting spans, the file the document came from and the
//! clipboard. Every user-visible command is a method here, and
//! [`Editor::execute`] dispatches a [`Command`] value to the matching method.
//!
//! Typed edits go through two private helpers that apply the edit to the
//! buffer, move the formatting spans and record the operation in the
//! history. Undo and redo replay through the history, which reports the
//! applied operations back so the spans can follow.
//!
//! # Examples
//!
//! ```
//! use quillpad::{Editor, StyleAttribute, AttributeValue};
//!
//! let mut editor = Editor::new();
//! editor.insert_text("Hello world").unwrap();
//! editor.set_selection(0, 5).unwrap();
//! editor.cut().unwrap();
//! assert_eq!(editor.text(), " world");
//!
//! editor.set_cursor(6).unwrap();
//! editor.paste().unwrap();
//! assert_eq!(editor.text(), " worldHello");
//!
//! editor.undo().unwrap();
//! assert_eq!(editor.text(), " world");
//!
//! editor
//!     .set_style(1..6, StyleAttribute::Bold, AttributeValue::Flag(true))
//!     .unwrap();
//! assert!(editor.formatting().style_at(3).attributes.contains(quillpad::TextAttributes::BOLD));
//! ```

pub mod clipboard;
pub mod status;

use crate::command::{Command, Outcome};
use crate::config::EditorOptions;
use crate::error::{Error, Result};
use crate::format::FormattingModel;
use crate::io::{FileMeta, FileService, LoadedDocument};
use crate::search::{self, SearchMatch, SearchOptions};
use crate::style::{AttributeValue, StyleAttribute};
use crate::text::{DocumentBuffer, EditCommandStack, EditOperation};
use clipboard::{Clipboard, MemoryClipboard};
use status::StatusInfo;
use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// How to resolve unsaved changes before replacing the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnsavedChoice {
    /// Save to the current path first.
    Save,
    /// Drop the changes.
    Discard,
    /// Keep the current document.
    Cancel,
}

/// One open document with its history, formatting and file state.
pub struct Editor {
    buffer: DocumentBuffer,
    history: EditCommandStack,
    format: FormattingModel,
    files: FileService,
    path: Option<PathBuf>,
    meta: FileMeta,
    clipboard: Box<dyn Clipboard + Send>,
    options: EditorOptions,
    search_options: SearchOptions,
    last_query: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_options(EditorOptions::default())
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("len", &self.buffer.len())
            .field("cursor", &self.buffer.cursor())
            .field("selection", &self.buffer.selection())
            .field("modified", &self.buffer.is_modified())
            .field("path", &self.path)
            .field("meta", &self.meta)
            .field("undo_depth", &self.history.undo_depth())
            .finish_non_exhaustive()
    }
}

impl Editor {
    /// Create an editor with an empty document and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with an empty document.
    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        let files = FileService::new()
            .with_max_file_size(options.max_file_size)
            .with_default_line_ending(options.default_line_ending);
        Self {
            buffer: DocumentBuffer::new(),
            history: EditCommandStack::with_max_depth(options.max_history_depth),
            format: FormattingModel::new(),
            files,
            path: None,
            meta: FileMeta {
                line_ending: options.default_line_ending,
                ..FileMeta::default()
            },
            clipboard: Box::new(MemoryClipboard::new()),
            options,
            search_options: SearchOptions::default(),
            last_query: None,
        }
    }

    /// Replace the clipboard, e.g. with a system clipboard adapter.
    #[must_use]
    pub fn with_clipboard<C: Clipboard + Send + 'static>(mut self, clipboard: C) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    #[must_use]
    pub fn buffer(&self) -> &DocumentBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn history(&self) -> &EditCommandStack {
        &self.history
    }

    #[must_use]
    pub fn formatting(&self) -> &FormattingModel {
        &self.format
    }

    /// Path the document was opened from or last saved to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn meta(&self) -> FileMeta {
        self.meta
    }

    #[must_use]
    pub fn options(&self) -> EditorOptions {
        self.options
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        self.search_options
    }

    pub fn set_search_options(&mut self, options: SearchOptions) {
        self.search_options = options;
    }

    /// Values for a status bar.
    #[must_use]
    pub fn status(&self) -> StatusInfo {
        StatusInfo::collect(
            &self.buffer,
            self.path.clone(),
            self.meta.encoding,
            self.meta.line_ending,
        )
    }

    // --- Document lifecycle ---

    /// Replace the document with an empty one.
    ///
    /// Fails with [`Error::UnsavedChanges`] if the current document is
    /// modified; resolve with [`new_document_with`](Self::new_document_with).
    pub fn new_document(&mut self) -> Result<()> {
        if self.buffer.is_modified() {
            return Err(Error::UnsavedChanges);
        }
        self.reset();
        Ok(())
    }

    /// Replace the document with an empty one after resolving unsaved
    /// changes with `choice`.
    ///
    /// Returns `false` if the user cancelled and nothing changed.
    pub fn new_document_with(&mut self, choice: UnsavedChoice) -> Result<bool> {
        if self.buffer.is_modified() {
            match choice {
                UnsavedChoice::Cancel => return Ok(false),
                UnsavedChoice::Save => {
                    self.save()?;
                }
                UnsavedChoice::Discard => {}
            }
        }
        self.reset();
        Ok(true)
    }

    fn reset(&mut self) {
        self.buffer.replace_all("");
        self.history.clear();
        self.format.clear();
        self.path = None;
        self.meta = FileMeta {
            line_ending: self.options.default_line_ending,
            ..FileMeta::default()
        };
        tracing::debug!("new document");
    }

    /// Load `path` into the editor.
    ///
    /// On failure the current document is left untouched.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let loaded = self.files.read(path.as_ref())?;
        self.apply_loaded(loaded);
        Ok(())
    }

    /// Swap in a document read by [`FileService::read`].
    ///
    /// Resets history, formatting, cursor and selection.
    pub fn apply_loaded(&mut self, loaded: LoadedDocument) {
        self.buffer.replace_all(&loaded.text);
        self.history.clear();
        self.format.clear();
        self.meta = loaded.meta;
        self.path = Some(loaded.path);
    }

    /// Save to the current path.
    ///
    /// Fails with [`Error::NoPath`] if the document has never been saved or
    /// opened. Returns the number of bytes written.
    pub fn save(&mut self) -> Result<u64> {
        let path = self.path.clone().ok_or(Error::NoPath)?;
        self.files.save(&path, &mut self.buffer, self.meta)
    }

    /// Save to `path` and make it the current path.
    ///
    /// The current path only changes if the write succeeds.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let written = self.files.save(path, &mut self.buffer, self.meta)?;
        self.path = Some(path.to_path_buf());
        Ok(written)
    }

    // --- History ---

    /// Revert the last edit group.
    pub fn undo(&mut self) -> Result<()> {
        let applied = self.history.undo(&mut self.buffer)?;
        self.after_replay(&applied)
    }

    /// Re-apply the last undone edit group.
    pub fn redo(&mut self) -> Result<()> {
        let applied = self.history.redo(&mut self.buffer)?;
        self.after_replay(&applied)
    }

    fn after_replay(&mut self, applied: &[EditOperation]) -> Result<()> {
        for op in applied {
            match op {
                EditOperation::Insert { offset, text } => {
                    self.format.on_insert(*offset, text.chars().count());
                }
                EditOperation::Delete { offset, text } => {
                    self.format.on_delete(*offset, offset + text.chars().count());
                }
            }
        }
        self.buffer.clear_selection();
        if let Some(last) = applied.last() {
            self.buffer.set_cursor(last.cursor_after())?;
        }
        Ok(())
    }

    // --- Clipboard ---

    /// Move the selected text to the clipboard.
    ///
    /// Fails with [`Error::NoSelection`] when nothing is selected.
    pub fn cut(&mut self) -> Result<String> {
        let range = self.buffer.selection().ok_or(Error::NoSelection)?;
        let removed = self.delete_recorded(range.start, range.end)?;
        self.buffer.set_cursor(range.start)?;
        self.clipboard.set_text(removed.clone());
        Ok(removed)
    }

    /// Put the selected text on the clipboard.
    ///
    /// Fails with [`Error::NoSelection`] when nothing is selected.
    pub fn copy(&mut self) -> Result<String> {
        let text = self.buffer.selected_text().ok_or(Error::NoSelection)?;
        self.clipboard.set_text(text.clone());
        Ok(text)
    }

    /// Insert the clipboard contents, replacing the selection.
    ///
    /// Fails with [`Error::EmptyClipboard`] when there is nothing to paste.
    pub fn paste(&mut self) -> Result<()> {
        let text = self
            .clipboard
            .get_text()
            .filter(|text| !text.is_empty())
            .ok_or(Error::EmptyClipboard)?;
        self.insert_text(&text)
    }

    pub fn select_all(&mut self) {
        self.buffer.select_all();
    }

    // --- Search ---

    /// Find `query` starting at the cursor, wrapping at the end.
    ///
    /// A match becomes the selection with the cursor at its end, so calling
    /// again moves to the following occurrence.
    pub fn find(&mut self, query: &str) -> Option<SearchMatch> {
        self.last_query = Some(query.to_string());
        self.find_from_cursor(query)
    }

    /// Repeat the last [`find`](Self::find).
    pub fn find_next(&mut self) -> Option<SearchMatch> {
        let query = self.last_query.clone()?;
        self.find_from_cursor(&query)
    }

    fn find_from_cursor(&mut self, query: &str) -> Option<SearchMatch> {
        let from = self.buffer.cursor();
        let found = search::find_next_with(&self.buffer, query, from, self.search_options).next();
        match found {
            Some(m) => {
                self.buffer.select_clamped(m.range());
                tracing::debug!(offset = m.offset, len = m.len, "found");
            }
            None => tracing::debug!(query, "no match"),
        }
        found
    }

    // --- Formatting ---

    /// Set `attribute` to `value` over `range`.
    pub fn set_style(
        &mut self,
        range: Range<usize>,
        attribute: StyleAttribute,
        value: AttributeValue,
    ) -> Result<()> {
        self.format.apply_style(&self.buffer, range, attribute, value)
    }

    // --- Editing ---

    /// Type `text` at the cursor, replacing the selection as one undo step.
    pub fn insert_text(&mut self, text: &str) -> Result<()> {
        self.history.begin_group();
        let result = self.replace_selection(text);
        self.history.end_group();
        result
    }

    /// Insert the document's line ending at the cursor.
    pub fn insert_newline(&mut self) -> Result<()> {
        let newline = self.meta.line_ending.as_str();
        self.insert_text(newline)
    }

    /// Delete the selection, or the character before the cursor.
    pub fn delete_backward(&mut self) -> Result<()> {
        if let Some(range) = self.buffer.selection() {
            return self.delete_selection(range);
        }
        let cursor = self.buffer.cursor();
        if cursor > 0 {
            self.delete_recorded(cursor - 1, cursor)?;
        }
        Ok(())
    }

    /// Delete the selection, or the character after the cursor.
    pub fn delete_forward(&mut self) -> Result<()> {
        if let Some(range) = self.buffer.selection() {
            return self.delete_selection(range);
        }
        let cursor = self.buffer.cursor();
        if cursor < self.buffer.len() {
            self.delete_recorded(cursor, cursor + 1)?;
        }
        Ok(())
    }

    /// Delete the whole text as one undoable edit.
    pub fn clear(&mut self) -> Result<()> {
        let len = self.buffer.len();
        self.delete_recorded(0, len)?;
        Ok(())
    }

    pub fn set_cursor(&mut self, offset: usize) -> Result<()> {
        self.buffer.set_cursor(offset)?;
        self.buffer.clear_selection();
        Ok(())
    }

    /// Select `[start, end)` with the cursor at `end`.
    pub fn set_selection(&mut self, start: usize, end: usize) -> Result<()> {
        self.buffer.set_selection(start, end)?;
        self.buffer.set_cursor(end)
    }

    fn replace_selection(&mut self, text: &str) -> Result<()> {
        let offset = match self.buffer.selection() {
            Some(range) => {
                self.delete_recorded(range.start, range.end)?;
                range.start
            }
            None => self.buffer.cursor(),
        };
        self.insert_recorded(offset, text)?;
        self.buffer.clear_selection();
        self.buffer.set_cursor(offset + text.chars().count())
    }

    fn delete_selection(&mut self, range: Range<usize>) -> Result<()> {
        self.delete_recorded(range.start, range.end)?;
        self.buffer.set_cursor(range.start)
    }

    fn insert_recorded(&mut self, offset: usize, text: &str) -> Result<()> {
        self.buffer.insert_at(offset, text)?;
        if !text.is_empty() {
            self.format.on_insert(offset, text.chars().count());
            self.history.record(EditOperation::Insert {
                offset,
                text: text.to_string(),
            });
        }
        Ok(())
    }

    fn delete_recorded(&mut self, start: usize, end: usize) -> Result<String> {
        let removed = self.buffer.delete_range(start, end)?;
        if !removed.is_empty() {
            self.format.on_delete(start, end);
            self.history.record(EditOperation::Delete {
                offset: start,
                text: removed.clone(),
            });
        }
        Ok(removed)
    }

    // --- Dispatch ---

    /// Run `command`.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let name = command.name();
        let result = self.dispatch(command);
        if let Err(err) = &result {
            tracing::warn!(command = name, kind = ?err.kind(), "{err}");
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::NewDocument => {
                self.new_document()?;
                Outcome::Done
            }
            Command::NewDocumentWith(choice) => {
                if self.new_document_with(choice)? {
                    Outcome::Done
                } else {
                    Outcome::Cancelled
                }
            }
            Command::Open(path) => {
                self.open(path)?;
                Outcome::Done
            }
            Command::Save => Outcome::Saved(self.save()?),
            Command::SaveAs(path) => Outcome::Saved(self.save_as(path)?),
            Command::Undo => {
                self.undo()?;
                Outcome::Done
            }
            Command::Redo => {
                self.redo()?;
                Outcome::Done
            }
            Command::Cut => Outcome::Clipboard(self.cut()?),
            Command::Copy => Outcome::Clipboard(self.copy()?),
            Command::Paste => {
                self.paste()?;
                Outcome::Done
            }
            Command::SelectAll => {
                self.select_all();
                Outcome::Done
            }
            Command::Clear => {
                self.clear()?;
                Outcome::Done
            }
            Command::Find(query) => Outcome::Found(self.find(&query)),
            Command::FindNext => Outcome::Found(self.find_next()),
            Command::SetStyle {
                range,
                attribute,
                value,
            } => {
                self.set_style(range, attribute, value)?;
                Outcome::Done
            }
            Command::InsertText(text) => {
                self.insert_text(&text)?;
                Outcome::Done
            }
            Command::InsertNewline => {
                self.insert_newline()?;
                Outcome::Done
            }
            Command::DeleteBackward => {
                self.delete_backward()?;
                Outcome::Done
            }
            Command::DeleteForward => {
                self.delete_forward()?;
                Outcome::Done
            }
            Command::SetCursor(offset) => {
                self.set_cursor(offset)?;
                Outcome::Done
            }
            Command::SetSelection(range) => {
                self.set_selection(range.start, range.end)?;
                Outcome::Done
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::io::LineEnding;
    use crate::style::TextAttributes;

    fn editor_with(text: &str) -> Editor {
        let mut editor = Editor::new();
        editor.insert_text(text).unwrap();
        editor
    }

    #[test]
    fn test_insert_and_undo_is_one_step() {
        let mut editor = editor_with("Hello world");
        assert_eq!(editor.buffer().cursor(), 11);
        editor.undo().unwrap();
        assert_eq!(editor.text(), "");
        assert!(matches!(editor.undo(), Err(Error::NothingToUndo)));
        editor.redo().unwrap();
        assert_eq!(editor.text(), "Hello world");
        assert_eq!(editor.buffer().cursor(), 11);
    }

    #[test]
    fn test_typing_over_selection_undoes_together() {
        let mut editor = editor_with("Hello world");
        editor.set_selection(6, 11).unwrap();
        editor.insert_text("there").unwrap();
        assert_eq!(editor.text(), "Hello there");
        assert_eq!(editor.buffer().selection(), None);

        editor.undo().unwrap();
        assert_eq!(editor.text(), "Hello world");
    }

    #[test]
    fn test_cut_paste() {
        let mut editor = editor_with("Hello world");
        editor.set_selection(0, 6).unwrap();
        assert_eq!(editor.cut().unwrap(), "Hello ");
        assert_eq!(editor.text(), "world");
        assert_eq!(editor.buffer().cursor(), 0);

        editor.set_cursor(5).unwrap();
        editor.paste().unwrap();
        assert_eq!(editor.text(), "worldHello ");

        editor.undo().unwrap();
        editor.undo().unwrap();
        assert_eq!(editor.text(), "Hello world");
    }

    #[test]
    fn test_copy_requires_selection() {
        let mut editor = editor_with("abc");
        assert!(matches!(editor.copy(), Err(Error::NoSelection)));
        assert!(matches!(editor.cut(), Err(Error::NoSelection)));
        assert!(matches!(editor.paste(), Err(Error::EmptyClipboard)));

        editor.select_all();
        assert_eq!(editor.copy().unwrap(), "abc");
        assert_eq!(editor.text(), "abc");
        assert!(!editor.history().can_redo());
    }

    #[test]
    fn test_paste_replaces_selection() {
        let mut editor = editor_with("one two");
        editor.set_selection(0, 3).unwrap();
        editor.copy().unwrap();
        editor.set_selection(4, 7).unwrap();
        editor.paste().unwrap();
        assert_eq!(editor.text(), "one one");
        assert_eq!(editor.buffer().cursor(), 7);
    }

    #[test]
    fn test_find_selects_and_advances() {
        let mut editor = editor_with("Hello world, hello");
        editor.set_cursor(0).unwrap();

        let first = editor.find("hello").unwrap();
        assert_eq!(first.offset, 0);
        assert_eq!(editor.buffer().selection(), Some(0..5));

        assert_eq!(editor.find_next().map(|m| m.offset), Some(13));
        assert_eq!(editor.find_next().map(|m| m.offset), Some(0));

        editor.set_search_options(SearchOptions::case_sensitive());
        assert_eq!(editor.find("HELLO"), None);
        assert_eq!(editor.buffer().selection(), Some(0..5));
    }

    #[test]
    fn test_find_next_without_query() {
        let mut editor = editor_with("abc");
        assert_eq!(editor.find_next(), None);
    }

    #[test]
    fn test_formatting_follows_edits_and_undo() {
        let mut editor = editor_with("Hello world");
        editor
            .set_style(6..11, StyleAttribute::Bold, AttributeValue::Flag(true))
            .unwrap();

        editor.set_cursor(0).unwrap();
        editor.insert_text(">> ").unwrap();
        assert_eq!(editor.formatting().spans()[0].range, 9..14);

        editor.undo().unwrap();
        assert_eq!(editor.formatting().spans()[0].range, 6..11);
        assert!(
            editor
                .formatting()
                .style_at(6)
                .attributes
                .contains(TextAttributes::BOLD)
        );
    }

    #[test]
    fn test_set_style_out_of_range() {
        let mut editor = editor_with("abc");
        let err = editor
            .set_style(0..10, StyleAttribute::Italic, AttributeValue::Flag(true))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(editor.formatting().spans().is_empty());
    }

    #[test]
    fn test_delete_backward_and_forward() {
        let mut editor = editor_with("abcd");
        editor.delete_backward().unwrap();
        assert_eq!(editor.text(), "abc");

        editor.set_cursor(0).unwrap();
        editor.delete_backward().unwrap();
        editor.delete_forward().unwrap();
        assert_eq!(editor.text(), "bc");

        editor.set_selection(0, 2).unwrap();
        editor.delete_forward().unwrap();
        assert_eq!(editor.text(), "");
        editor.delete_forward().unwrap();
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut editor = editor_with("some text");
        editor.clear().unwrap();
        assert!(editor.buffer().is_empty());
        editor.undo().unwrap();
        assert_eq!(editor.text(), "some text");
    }

    #[test]
    fn test_new_document_with_unsaved_changes() {
        let mut editor = editor_with("draft");
        assert!(matches!(editor.new_document(), Err(Error::UnsavedChanges)));
        assert!(!editor.new_document_with(UnsavedChoice::Cancel).unwrap());
        assert_eq!(editor.text(), "draft");

        // No path yet, so saving first cannot succeed.
        assert!(matches!(
            editor.new_document_with(UnsavedChoice::Save),
            Err(Error::NoPath)
        ));
        assert_eq!(editor.text(), "draft");

        assert!(editor.new_document_with(UnsavedChoice::Discard).unwrap());
        assert_eq!(editor.text(), "");
        assert!(!editor.is_modified());
        assert!(!editor.history().can_undo());
        editor.new_document().unwrap();
    }

    #[test]
    fn test_save_without_path() {
        let mut editor = editor_with("x");
        let err = editor.save().unwrap_err();
        assert!(matches!(err, Error::NoPath));
        assert_eq!(err.kind(), ErrorKind::State);
    }

    #[test]
    fn test_insert_newline_uses_line_ending() {
        let options = EditorOptions::default().with_default_line_ending(LineEnding::CrLf);
        let mut editor = Editor::with_options(options);
        editor.insert_text("a").unwrap();
        editor.insert_newline().unwrap();
        assert_eq!(editor.text(), "a\r\n");
    }

    #[test]
    fn test_history_depth_from_options() {
        let mut editor = Editor::with_options(EditorOptions::default().with_max_history_depth(2));
        for word in ["a", "b", "c"] {
            editor.insert_text(word).unwrap();
        }
        editor.undo().unwrap();
        editor.undo().unwrap();
        assert!(matches!(editor.undo(), Err(Error::NothingToUndo)));
        assert_eq!(editor.text(), "a");
    }

    #[test]
    fn test_execute_dispatch() {
        let mut editor = Editor::new();
        editor
            .execute(Command::InsertText("Hello world".into()))
            .unwrap();
        editor.execute(Command::SelectAll).unwrap();
        assert_eq!(
            editor.execute(Command::Copy).unwrap(),
            Outcome::Clipboard("Hello world".into())
        );
        assert_eq!(
            editor.execute(Command::Find("world".into())).unwrap(),
            Outcome::Found(Some(SearchMatch { offset: 6, len: 5 }))
        );
        assert!(editor.execute(Command::Save).is_err());
        assert_eq!(
            editor
                .execute(Command::NewDocumentWith(UnsavedChoice::Cancel))
                .unwrap(),
            Outcome::Cancelled
        );
    }

    #[test]
    fn test_custom_clipboard() {
        #[derive(Default)]
        struct Fixed;
        impl Clipboard for Fixed {
            fn set_text(&mut self, _text: String) {}
            fn get_text(&self) -> Option<String> {
                Some("pasted".into())
            }
        }

        let mut editor = Editor::new().with_clipboard(Fixed);
        editor.paste().unwrap();
        assert_eq!(editor.text(), "pasted");
    }

    #[test]
    fn test_status() {
        let mut editor = editor_with("ab\ncd ef");
        editor.set_cursor(5).unwrap();
        let status = editor.status();
        assert_eq!((status.line, status.column), (2, 3));
        assert_eq!(status.word_count, 3);
        assert!(status.modified);
        assert_eq!(status.path, None);
    }
}
