//! Error types for quillpad.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for quillpad operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// Hosts use this to decide how to surface a failure: `Io` and `State`
/// errors are shown to the user, `Range` errors indicate a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An offset or range was invalid for the current buffer.
    Range,
    /// A filesystem operation failed.
    Io,
    /// The editor was not in a state where the command applies.
    State,
}

/// Error type for quillpad operations.
#[derive(Debug)]
pub enum Error {
    /// Range `[start, end)` is invalid for a buffer of `len` characters.
    OutOfRange { start: usize, end: usize, len: usize },
    /// A style value does not fit the attribute it was applied to.
    InvalidStyleValue { attribute: &'static str },
    /// Filesystem failure while reading or writing `path`.
    Io { path: PathBuf, source: io::Error },
    /// Undo requested with an empty undo stack.
    NothingToUndo,
    /// Redo requested with an empty redo stack.
    NothingToRedo,
    /// The buffer no longer holds the text a recorded deletion expects at
    /// `offset`.
    HistoryMismatch { offset: usize },
    /// The document has unsaved changes that would be discarded.
    UnsavedChanges,
    /// Save requested but the document has never been given a path.
    NoPath,
    /// The command needs a selection and there is none.
    NoSelection,
    /// Paste requested with nothing on the clipboard.
    EmptyClipboard,
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange { .. } | Self::InvalidStyleValue { .. } => ErrorKind::Range,
            Self::Io { .. } => ErrorKind::Io,
            Self::NothingToUndo
            | Self::NothingToRedo
            | Self::HistoryMismatch { .. }
            | Self::UnsavedChanges
            | Self::NoPath
            | Self::NoSelection
            | Self::EmptyClipboard => ErrorKind::State,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for length {len}")
            }
            Self::InvalidStyleValue { attribute } => {
                write!(f, "invalid value for style attribute {attribute}")
            }
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::NothingToUndo => write!(f, "nothing to undo"),
            Self::NothingToRedo => write!(f, "nothing to redo"),
            Self::HistoryMismatch { offset } => {
                write!(f, "document changed outside the edit history at {offset}")
            }
            Self::UnsavedChanges => write!(f, "document has unsaved changes"),
            Self::NoPath => write!(f, "document has no file path"),
            Self::NoSelection => write!(f, "no selection"),
            Self::EmptyClipboard => write!(f, "clipboard is empty"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
