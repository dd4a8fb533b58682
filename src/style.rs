//! Character formatting attributes.
//!
//! This module provides the vocabulary of the formatting model:
//!
//! - [`TextAttributes`]: Bitflags for bold, italic and underline
//! - [`StyleSet`]: The full attribute set carried by a span
//! - [`StyleAttribute`] / [`AttributeValue`]: One attribute dimension and a
//!   value for it, as passed to `apply_style`
//!
//! # Examples
//!
//! ```
//! use quillpad::{AttributeValue, StyleAttribute, StyleSet, TextAttributes};
//!
//! let mut set = StyleSet::default();
//! set.set(StyleAttribute::Bold, AttributeValue::Flag(true)).unwrap();
//! assert!(set.attributes.contains(TextAttributes::BOLD));
//! assert_eq!(set.to_string(), "bold");
//! ```

use crate::color::Color;
use crate::error::{Error, Result};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Boolean text attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold weight.
        const BOLD      = 0x01;
        /// Italic slant.
        const ITALIC    = 0x02;
        /// Underlined text.
        const UNDERLINE = 0x04;
    }
}

/// Horizontal alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// One formatting dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleAttribute {
    Bold,
    Italic,
    Underline,
    Color,
    Alignment,
    FontFamily,
    FontSize,
}

impl StyleAttribute {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Color => "color",
            Self::Alignment => "alignment",
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
        }
    }

    fn flag(self) -> Option<TextAttributes> {
        match self {
            Self::Bold => Some(TextAttributes::BOLD),
            Self::Italic => Some(TextAttributes::ITALIC),
            Self::Underline => Some(TextAttributes::UNDERLINE),
            _ => None,
        }
    }
}

/// A value for one [`StyleAttribute`].
///
/// `None` payloads reset the dimension to the document default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    /// For `Bold`, `Italic` and `Underline`.
    Flag(bool),
    Color(Option<Color>),
    Alignment(Option<Alignment>),
    FontFamily(Option<String>),
    FontSize(Option<u16>),
}

/// Full attribute set of a span.
///
/// The default set is "plain": no flags, and every optional dimension
/// inherits the document default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    pub attributes: TextAttributes,
    pub color: Option<Color>,
    pub alignment: Option<Alignment>,
    pub font_family: Option<String>,
    pub font_size: Option<u16>,
}

impl StyleSet {
    /// Plain set.
    pub const PLAIN: Self = Self {
        attributes: TextAttributes::empty(),
        color: None,
        alignment: None,
        font_family: None,
        font_size: None,
    };

    /// A set with only bold on.
    #[must_use]
    pub fn bold() -> Self {
        Self {
            attributes: TextAttributes::BOLD,
            ..Self::default()
        }
    }

    /// A set with only italic on.
    #[must_use]
    pub fn italic() -> Self {
        Self {
            attributes: TextAttributes::ITALIC,
            ..Self::default()
        }
    }

    /// A set with only underline on.
    #[must_use]
    pub fn underline() -> Self {
        Self {
            attributes: TextAttributes::UNDERLINE,
            ..Self::default()
        }
    }

    /// Check whether nothing is set.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }

    /// Overwrite one dimension.
    ///
    /// Fails with [`Error::InvalidStyleValue`] when the value kind does not
    /// match the attribute; the set is left untouched in that case.
    pub fn set(&mut self, attribute: StyleAttribute, value: AttributeValue) -> Result<()> {
        check_value(attribute, &value)?;
        self.assign(attribute, value);
        Ok(())
    }

    /// Overwrite one dimension with a value already accepted by
    /// [`check_value`]. Mismatched values are ignored.
    pub(crate) fn assign(&mut self, attribute: StyleAttribute, value: AttributeValue) {
        match (attribute, value) {
            (attr, AttributeValue::Flag(on)) => {
                if let Some(flag) = attr.flag() {
                    self.attributes.set(flag, on);
                }
            }
            (StyleAttribute::Color, AttributeValue::Color(color)) => self.color = color,
            (StyleAttribute::Alignment, AttributeValue::Alignment(alignment)) => {
                self.alignment = alignment;
            }
            (StyleAttribute::FontFamily, AttributeValue::FontFamily(family)) => {
                self.font_family = family;
            }
            (StyleAttribute::FontSize, AttributeValue::FontSize(size)) => self.font_size = size,
            _ => {}
        }
    }

    /// Read one dimension.
    #[must_use]
    pub fn get(&self, attribute: StyleAttribute) -> AttributeValue {
        match attribute {
            StyleAttribute::Bold => {
                AttributeValue::Flag(self.attributes.contains(TextAttributes::BOLD))
            }
            StyleAttribute::Italic => {
                AttributeValue::Flag(self.attributes.contains(TextAttributes::ITALIC))
            }
            StyleAttribute::Underline => {
                AttributeValue::Flag(self.attributes.contains(TextAttributes::UNDERLINE))
            }
            StyleAttribute::Color => AttributeValue::Color(self.color),
            StyleAttribute::Alignment => AttributeValue::Alignment(self.alignment),
            StyleAttribute::FontFamily => AttributeValue::FontFamily(self.font_family.clone()),
            StyleAttribute::FontSize => AttributeValue::FontSize(self.font_size),
        }
    }
}

/// Check that `value` is the right kind for `attribute`.
pub(crate) fn check_value(attribute: StyleAttribute, value: &AttributeValue) -> Result<()> {
    let ok = match value {
        AttributeValue::Flag(_) => attribute.flag().is_some(),
        AttributeValue::Color(_) => attribute == StyleAttribute::Color,
        AttributeValue::Alignment(_) => attribute == StyleAttribute::Alignment,
        AttributeValue::FontFamily(_) => attribute == StyleAttribute::FontFamily,
        AttributeValue::FontSize(_) => attribute == StyleAttribute::FontSize,
    };
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidStyleValue {
            attribute: attribute.name(),
        })
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain() {
            return f.write_str("plain");
        }

        let mut parts: Vec<String> = Vec::new();
        if self.attributes.contains(TextAttributes::BOLD) {
            parts.push("bold".to_string());
        }
        if self.attributes.contains(TextAttributes::ITALIC) {
            parts.push("italic".to_string());
        }
        if self.attributes.contains(TextAttributes::UNDERLINE) {
            parts.push("underline".to_string());
        }
        if let Some(color) = self.color {
            parts.push(format!("color={color}"));
        }
        if let Some(alignment) = self.alignment {
            parts.push(format!("align={}", alignment.name()));
        }
        if let Some(family) = &self.font_family {
            parts.push(format!("font={family}"));
        }
        if let Some(size) = self.font_size {
            parts.push(format!("size={size}"));
        }
        f.write_str(&parts.join(" "))
    }
}
