//! Command dispatch for the presentation layer.
//!
//! Every menu entry, toolbar button or key binding a host offers maps to one
//! [`Command`]. [`Editor::execute`](crate::Editor::execute) runs it and
//! reports an [`Outcome`].

use crate::editor::UnsavedChoice;
use crate::search::SearchMatch;
use crate::style::{AttributeValue, StyleAttribute};
use std::ops::Range;
use std::path::PathBuf;

/// An editor command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start an empty document; fails with `UnsavedChanges` when modified.
    NewDocument,
    /// Start an empty document after resolving unsaved changes.
    NewDocumentWith(UnsavedChoice),
    Open(PathBuf),
    Save,
    SaveAs(PathBuf),
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    /// Delete the whole text as one undoable edit.
    Clear,
    Find(String),
    /// Repeat the last `Find` from the cursor.
    FindNext,
    SetStyle {
        range: Range<usize>,
        attribute: StyleAttribute,
        value: AttributeValue,
    },
    InsertText(String),
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    SetCursor(usize),
    SetSelection(Range<usize>),
}

impl Command {
    /// Stable name for logs and key maps.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewDocument => "new_document",
            Self::NewDocumentWith(_) => "new_document_with",
            Self::Open(_) => "open",
            Self::Save => "save",
            Self::SaveAs(_) => "save_as",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Cut => "cut",
            Self::Copy => "copy",
            Self::Paste => "paste",
            Self::SelectAll => "select_all",
            Self::Clear => "clear",
            Self::Find(_) => "find",
            Self::FindNext => "find_next",
            Self::SetStyle { .. } => "set_style",
            Self::InsertText(_) => "insert_text",
            Self::InsertNewline => "insert_newline",
            Self::DeleteBackward => "delete_backward",
            Self::DeleteForward => "delete_forward",
            Self::SetCursor(_) => "set_cursor",
            Self::SetSelection(_) => "set_selection",
        }
    }

    /// Whether the command can change the document text.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Undo
                | Self::Redo
                | Self::Cut
                | Self::Paste
                | Self::Clear
                | Self::InsertText(_)
                | Self::InsertNewline
                | Self::DeleteBackward
                | Self::DeleteForward
        )
    }
}

/// Result of a successfully executed [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user chose to keep the current document.
    Cancelled,
    /// Text placed on the clipboard by cut or copy.
    Clipboard(String),
    /// Result of a search; `None` when nothing matched.
    Found(Option<SearchMatch>),
    /// Bytes written by a save.
    Saved(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_distinct() {
        let commands = [
            Command::NewDocument,
            Command::Open(PathBuf::from("a.txt")),
            Command::Save,
            Command::SaveAs(PathBuf::from("b.txt")),
            Command::Undo,
            Command::Redo,
            Command::Cut,
            Command::Copy,
            Command::Paste,
            Command::SelectAll,
            Command::Find("x".into()),
        ];
        let mut names: Vec<_> = commands.iter().map(Command::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), commands.len());
    }

    #[test]
    fn test_is_edit() {
        assert!(Command::Paste.is_edit());
        assert!(Command::Undo.is_edit());
        assert!(!Command::Copy.is_edit());
        assert!(!Command::Find("x".into()).is_edit());
    }
}
