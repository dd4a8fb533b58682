//! Rope storage using the ropey crate.

use ropey::{Rope, RopeSlice};
use std::ops::Range;

/// Wrapper around `ropey::Rope` addressed in character offsets.
///
/// Out-of-range offsets are clamped or ignored, never a panic. The document
/// buffer validates before calling in.
#[derive(Clone, Debug, Default)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create an empty rope.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of lines.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Get a slice of the rope, empty if the range is invalid.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> RopeSlice<'_> {
        self.rope
            .get_slice(range)
            .unwrap_or_else(|| self.rope.slice(..0))
    }

    /// Copy a character range out as a `String`.
    #[must_use]
    pub fn slice_to_string(&self, range: Range<usize>) -> String {
        self.slice(range).to_string()
    }

    /// Iterate characters starting at a character offset.
    pub fn chars_at(&self, char_idx: usize) -> ropey::iter::Chars<'_> {
        self.rope.chars_at(char_idx.min(self.len_chars()))
    }

    /// Insert text at a character position.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if char_idx <= self.len_chars() {
            self.rope.insert(char_idx, text);
        }
    }

    /// Remove a range of characters.
    pub fn remove(&mut self, range: Range<usize>) {
        if range.start <= range.end && range.end <= self.len_chars() {
            self.rope.remove(range);
        }
    }

    /// Replace the entire contents.
    pub fn replace(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    /// Convert char index to line index.
    #[must_use]
    pub fn char_to_line(&self, char_idx: usize) -> usize {
        self.rope.char_to_line(char_idx.min(self.len_chars()))
    }

    /// Get the char index at the start of a line.
    #[must_use]
    pub fn line_to_char(&self, line_idx: usize) -> usize {
        if line_idx >= self.len_lines() {
            self.len_chars()
        } else {
            self.rope.line_to_char(line_idx)
        }
    }

    /// Write the contents as UTF-8 into `writer`, chunk by chunk.
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> std::io::Result<()> {
        self.rope.write_to(writer)
    }

    /// Iterate over the rope's string chunks.
    pub fn chunks(&self) -> ropey::iter::Chunks<'_> {
        self.rope.chunks()
    }
}
