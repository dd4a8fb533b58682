//! Status bar information.

use crate::io::{LineEnding, TextEncoding};
use crate::text::DocumentBuffer;
use std::fmt;
use std::path::PathBuf;
use unicode_segmentation::UnicodeSegmentation;

/// Snapshot of the values a status bar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusInfo {
    /// 1-based line of the cursor.
    pub line: usize,
    /// 1-based column of the cursor, in characters.
    pub column: usize,
    pub line_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    pub modified: bool,
    pub path: Option<PathBuf>,
    pub encoding: TextEncoding,
    pub line_ending: LineEnding,
}

impl StatusInfo {
    pub(crate) fn collect(
        buffer: &DocumentBuffer,
        path: Option<PathBuf>,
        encoding: TextEncoding,
        line_ending: LineEnding,
    ) -> Self {
        let (line, column) = buffer.line_col(buffer.cursor()).unwrap_or((0, 0));
        Self {
            line: line + 1,
            column: column + 1,
            line_count: buffer.line_count(),
            char_count: buffer.len(),
            word_count: word_count(&buffer.text()),
            modified: buffer.is_modified(),
            path,
            encoding,
            line_ending,
        }
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ln {}, Col {} | {} chars | {} words | {} | {}",
            self.line,
            self.column,
            self.char_count,
            self.word_count,
            self.encoding.label(),
            self.line_ending.label()
        )?;
        if self.modified {
            f.write_str(" | modified")?;
        }
        Ok(())
    }
}

/// Number of Unicode words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}
