//! Span-based character formatting.
//!
//! [`FormattingModel`] keeps a sorted list of non-overlapping
//! [`StyleSpan`]s over the document. Applying a style splits the spans it
//! touches at the range bounds, overwrites one attribute across the range,
//! and merges neighbours that end up identical.
//!
//! # Examples
//!
//! ```
//! use quillpad::{AttributeValue, DocumentBuffer, FormattingModel, StyleAttribute, StyleSet};
//!
//! let doc = DocumentBuffer::with_text("Hello");
//! let mut format = FormattingModel::new();
//! format
//!     .apply_style(&doc, 0..5, StyleAttribute::Bold, AttributeValue::Flag(true))
//!     .unwrap();
//! format
//!     .apply_style(&doc, 2..3, StyleAttribute::Bold, AttributeValue::Flag(false))
//!     .unwrap();
//!
//! assert_eq!(format.style_at(0), StyleSet::bold());
//! assert_eq!(format.style_at(2), StyleSet::PLAIN);
//! assert_eq!(format.spans().len(), 3);
//! ```

use crate::error::{Error, Result};
use crate::style::{AttributeValue, StyleAttribute, StyleSet, check_value};
use crate::text::DocumentBuffer;
use std::ops::Range;

/// A character range sharing one attribute set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSpan {
    /// Character range in the document.
    pub range: Range<usize>,
    /// Attributes applied to the range.
    pub style: StyleSet,
}

impl StyleSpan {
    #[must_use]
    pub fn new(range: Range<usize>, style: StyleSet) -> Self {
        Self { range, style }
    }

    /// Check if this span overlaps with a range.
    #[must_use]
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        self.range.start < range.end && range.start < self.range.end
    }

    /// Check if this span contains a position.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.range.contains(&pos)
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }
}

/// Sorted, non-overlapping style spans over a document.
#[derive(Clone, Debug, Default)]
pub struct FormattingModel {
    spans: Vec<StyleSpan>,
}

impl FormattingModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All spans, sorted by start offset.
    #[must_use]
    pub fn spans(&self) -> &[StyleSpan] {
        &self.spans
    }

    /// Spans overlapping `range`.
    pub fn spans_in_range(&self, range: Range<usize>) -> impl Iterator<Item = &StyleSpan> {
        self.spans.iter().filter(move |span| span.overlaps(&range))
    }

    /// Remove all formatting.
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Set `attribute` to `value` over `range`.
    ///
    /// Fails with [`Error::OutOfRange`] if the range is not within the
    /// document and with [`Error::InvalidStyleValue`] if the value does not
    /// fit the attribute. An empty range is a no-op.
    pub fn apply_style(
        &mut self,
        buffer: &DocumentBuffer,
        range: Range<usize>,
        attribute: StyleAttribute,
        value: AttributeValue,
    ) -> Result<()> {
        let len = buffer.len();
        if range.start > range.end || range.end > len {
            return Err(Error::OutOfRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        check_value(attribute, &value)?;
        if range.is_empty() {
            return Ok(());
        }

        self.split_at(range.start);
        self.split_at(range.end);

        let styled_gap = |gap: Range<usize>| {
            let mut style = StyleSet::default();
            style.assign(attribute, value.clone());
            StyleSpan::new(gap, style)
        };

        let mut result = Vec::with_capacity(self.spans.len() + 2);
        let mut pos = range.start;
        for mut span in std::mem::take(&mut self.spans) {
            if span.range.end <= range.start {
                result.push(span);
                continue;
            }
            if span.range.start >= range.end {
                if pos < range.end {
                    result.push(styled_gap(pos..range.end));
                    pos = range.end;
                }
                result.push(span);
                continue;
            }

            // Splitting above guarantees the span lies inside the range.
            if pos < span.range.start {
                result.push(styled_gap(pos..span.range.start));
            }
            pos = span.range.end;
            span.style.assign(attribute, value.clone());
            result.push(span);
        }
        if pos < range.end {
            result.push(styled_gap(pos..range.end));
        }

        self.spans = result;
        self.merge_adjacent();
        Ok(())
    }

    /// Drop all formatting inside `range`, splitting spans at its bounds.
    pub fn clear_range(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.split_at(range.start);
        self.split_at(range.end);
        self.spans
            .retain(|span| span.range.end <= range.start || span.range.start >= range.end);
        self.merge_adjacent();
    }

    /// Attribute set active at `offset` (plain if unstyled).
    #[must_use]
    pub fn style_at(&self, offset: usize) -> StyleSet {
        let idx = self.spans.partition_point(|span| span.range.end <= offset);
        match self.spans.get(idx) {
            Some(span) if span.contains(offset) => span.style.clone(),
            _ => StyleSet::default(),
        }
    }

    /// Track an insertion of `len` characters at `offset`.
    ///
    /// Spans starting at or after `offset` move right; a span strictly
    /// containing `offset` grows.
    pub fn on_insert(&mut self, offset: usize, len: usize) {
        if len == 0 {
            return;
        }
        for span in &mut self.spans {
            if span.range.start >= offset {
                span.range.start += len;
                span.range.end += len;
            } else if span.range.end > offset {
                span.range.end += len;
            }
        }
    }

    /// Track the deletion of `[start, end)`.
    pub fn on_delete(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let shift = |pos: usize| {
            if pos >= end {
                pos - (end - start)
            } else if pos > start {
                start
            } else {
                pos
            }
        };
        for span in &mut self.spans {
            span.range = shift(span.range.start)..shift(span.range.end);
        }
        self.spans.retain(|span| !span.is_empty());
        self.merge_adjacent();
    }

    /// Split the span strictly containing `pos` into two.
    fn split_at(&mut self, pos: usize) {
        let idx = self.spans.partition_point(|span| span.range.end <= pos);
        let Some(span) = self.spans.get_mut(idx) else {
            return;
        };
        if span.range.start < pos && pos < span.range.end {
            let tail = StyleSpan::new(pos..span.range.end, span.style.clone());
            span.range.end = pos;
            self.spans.insert(idx + 1, tail);
        }
    }

    fn merge_adjacent(&mut self) {
        let mut merged: Vec<StyleSpan> = Vec::with_capacity(self.spans.len());
        for span in std::mem::take(&mut self.spans) {
            if let Some(last) = merged.last_mut() {
                if last.range.end == span.range.start && last.style == span.style {
                    last.range.end = span.range.end;
                    continue;
                }
            }
            merged.push(span);
        }
        self.spans = merged;
    }
}
