//! Text search over a document.
//!
//! Searching produces a lazy [`Matches`] iterator. It first yields every
//! occurrence starting at or after the requested offset, then wraps and
//! yields the occurrences that start before it. The iterator is finite and
//! holds no state beyond the document borrow, so calling [`find_next`] again
//! with the same arguments yields the same sequence.
//!
//! Offsets and lengths are in document characters. Case-insensitive search
//! folds each character with its simple lowercase mapping, so a match never
//! changes length.
//!
//! # Examples
//!
//! ```
//! use quillpad::DocumentBuffer;
//! use quillpad::search::find_next;
//!
//! let doc = DocumentBuffer::with_text("Hello world, hello");
//! let offsets: Vec<usize> = find_next(&doc, "lo", 4, true).map(|m| m.offset).collect();
//! assert_eq!(offsets, vec![16, 3]);
//! ```

use crate::text::{DocumentBuffer, RopeWrapper};
use std::ops::Range;

/// A located occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchMatch {
    /// Character offset of the first matched character.
    pub offset: usize,
    /// Length in characters.
    pub len: usize,
}

impl SearchMatch {
    /// Offset one past the last matched character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// How a query is compared against the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Compare characters exactly instead of case-folded.
    pub case_sensitive: bool,
    /// Only accept matches not touching a word character on either side.
    pub whole_word: bool,
}

impl SearchOptions {
    /// Case-sensitive substring search.
    #[must_use]
    pub const fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
            whole_word: false,
        }
    }

    #[must_use]
    pub const fn with_whole_word(mut self) -> Self {
        self.whole_word = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    /// Scanning `[from, len)`.
    Forward,
    /// Scanning starts in `[0, from)`.
    Wrapped,
    Done,
}

/// Lazy sequence of matches, see [`find_next`].
#[derive(Clone, Debug)]
pub struct Matches<'a> {
    rope: &'a RopeWrapper,
    needle: Vec<char>,
    options: SearchOptions,
    from: usize,
    pos: usize,
    pass: Pass,
}

impl<'a> Matches<'a> {
    fn new(rope: &'a RopeWrapper, query: &str, from: usize, options: SearchOptions) -> Self {
        let needle: Vec<char> = query
            .chars()
            .map(|ch| fold(ch, options.case_sensitive))
            .collect();
        let from = from.min(rope.len_chars());
        let pass = if needle.is_empty() {
            Pass::Done
        } else {
            Pass::Forward
        };
        Self {
            rope,
            needle,
            options,
            from,
            pos: from,
            pass,
        }
    }

    /// Scan starts in `[self.pos, limit)` for the next occurrence.
    fn scan(&mut self, limit: usize) -> Option<SearchMatch> {
        let len = self.rope.len_chars();
        let width = self.needle.len();
        while self.pos < limit && self.pos + width <= len {
            if self.matches_at(self.pos) {
                let found = SearchMatch {
                    offset: self.pos,
                    len: width,
                };
                self.pos = found.end();
                return Some(found);
            }
            self.pos += 1;
        }
        None
    }

    fn matches_at(&self, pos: usize) -> bool {
        let case_sensitive = self.options.case_sensitive;
        let hit = self
            .rope
            .chars_at(pos)
            .zip(&self.needle)
            .all(|(ch, want)| fold(ch, case_sensitive) == *want);
        if !hit {
            return false;
        }
        if !self.options.whole_word {
            return true;
        }

        let end = pos + self.needle.len();
        let before = pos
            .checked_sub(1)
            .and_then(|prev| self.rope.chars_at(prev).next());
        let after = self.rope.chars_at(end).next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    }
}

impl Iterator for Matches<'_> {
    type Item = SearchMatch;

    fn next(&mut self) -> Option<SearchMatch> {
        loop {
            match self.pass {
                Pass::Forward => {
                    if let Some(found) = self.scan(usize::MAX) {
                        return Some(found);
                    }
                    self.pass = Pass::Wrapped;
                    self.pos = 0;
                }
                Pass::Wrapped => {
                    if let Some(found) = self.scan(self.from) {
                        return Some(found);
                    }
                    self.pass = Pass::Done;
                }
                Pass::Done => return None,
            }
        }
    }
}

/// Occurrences of `query` at or after `from`, then wrapping to the start.
///
/// Yields nothing for an empty query or when there is no occurrence.
pub fn find_next<'a>(
    buffer: &'a DocumentBuffer,
    query: &str,
    from: usize,
    case_sensitive: bool,
) -> Matches<'a> {
    let options = SearchOptions {
        case_sensitive,
        whole_word: false,
    };
    find_next_with(buffer, query, from, options)
}

/// [`find_next`] with full options.
pub fn find_next_with<'a>(
    buffer: &'a DocumentBuffer,
    query: &str,
    from: usize,
    options: SearchOptions,
) -> Matches<'a> {
    Matches::new(buffer.rope(), query, from, options)
}

/// Every non-overlapping occurrence, scanning from the start.
#[must_use]
pub fn find_all(buffer: &DocumentBuffer, query: &str, options: SearchOptions) -> Vec<SearchMatch> {
    find_next_with(buffer, query, 0, options).collect()
}

/// Nearest occurrence starting before `before`, wrapping to the last one.
#[must_use]
pub fn find_prev(
    buffer: &DocumentBuffer,
    query: &str,
    before: usize,
    options: SearchOptions,
) -> Option<SearchMatch> {
    let all = find_all(buffer, query, options);
    all.iter()
        .rev()
        .find(|m| m.offset < before)
        .or_else(|| all.last())
        .copied()
}

/// Number of non-overlapping occurrences.
#[must_use]
pub fn count_matches(buffer: &DocumentBuffer, query: &str, options: SearchOptions) -> usize {
    find_next_with(buffer, query, 0, options).count()
}

fn fold(ch: char, case_sensitive: bool) -> char {
    if case_sensitive {
        return ch;
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
