//! Font colors.
//!
//! [`Color`] is the value carried by the `Color` style attribute. It is an
//! opaque 8-bit RGB triple; the presentation layer decides how to paint it.
//!
//! # Examples
//!
//! ```
//! use quillpad::Color;
//!
//! let red = Color::RED;
//! let custom = Color::from_hex("#1a1a2e").unwrap();
//! assert_eq!(custom.to_hex(), "#1a1a2e");
//! assert_eq!(Color::from_hex("f00"), Some(red));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque RGB color with 8-bit components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);

    /// Create a color from components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (`#RGB` or `#RRGGBB`, `#` optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_and_short() {
        assert_eq!(
            Color::from_hex("#FF8000"),
            Some(Color::from_rgb(255, 128, 0))
        );
        assert_eq!(Color::from_hex("0f0"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("#abc"), Some(Color::from_rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Color::BLUE.to_string(), "#0000ff");
    }
}
