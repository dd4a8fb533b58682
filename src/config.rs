//! Editor and view configuration.
//!
//! Two plain structs replace what a GUI would otherwise keep in shared
//! mutable state:
//!
//! - [`EditorOptions`]: Limits and defaults for the editing core
//! - [`ViewConfig`]: Presentation choices (theme, bar visibility, font) that
//!   the host hands to its presentation layer at construction
//!
//! Both serialize to JSON so hosts can persist them.
//!
//! # Examples
//!
//! ```
//! use quillpad::config::{Theme, ViewConfig};
//!
//! let config = ViewConfig::from_json(r#"{ "theme": "monokai", "font_size": 14 }"#).unwrap();
//! assert_eq!(config.theme, Theme::Monokai);
//! assert_eq!(config.font_size, 14);
//! assert!(config.show_toolbar);
//! ```

use crate::io::{DEFAULT_MAX_FILE_SIZE, LineEnding};
use crate::text::DEFAULT_MAX_HISTORY_DEPTH;
use serde::{Deserialize, Serialize};

/// Font sizes offered by the toolbar.
pub const FONT_SIZES: [u16; 32] = {
    let mut sizes = [0u16; 32];
    let mut i = 0;
    while i < sizes.len() {
        sizes[i] = 8 + 2 * i as u16;
        i += 1;
    }
    sizes
};

/// Default font family.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: u16 = 12;

/// Limits and defaults for the editing core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Maximum number of undo steps retained.
    pub max_history_depth: usize,
    /// Largest file `open` accepts, in bytes.
    pub max_file_size: u64,
    /// Line ending for new documents and files without line breaks.
    pub default_line_ending: LineEnding,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_history_depth: DEFAULT_MAX_HISTORY_DEPTH,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            default_line_ending: LineEnding::Lf,
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn with_max_history_depth(mut self, depth: usize) -> Self {
        self.max_history_depth = depth;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    #[must_use]
    pub fn with_default_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.default_line_ending = line_ending;
        self
    }
}

/// Color theme choice. The core only records it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    LightDefault,
    LightPlus,
    Dark,
    Cake,
    Monokai,
    Windows98,
}

impl Theme {
    /// Every theme, in menu order.
    pub const ALL: [Self; 6] = [
        Self::LightDefault,
        Self::LightPlus,
        Self::Dark,
        Self::Cake,
        Self::Monokai,
        Self::Windows98,
    ];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LightDefault => "Light default",
            Self::LightPlus => "Light plus",
            Self::Dark => "Dark",
            Self::Cake => "Cake",
            Self::Monokai => "Monokai",
            Self::Windows98 => "Windows 98",
        }
    }
}

/// Presentation settings handed to the host's view layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub theme: Theme,
    pub show_toolbar: bool,
    pub show_status_bar: bool,
    pub font_family: String,
    pub font_size: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_toolbar: true,
            show_status_bar: true,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ViewConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Whether `font_size` is one the toolbar offers.
    #[must_use]
    pub fn has_standard_font_size(&self) -> bool {
        FONT_SIZES.contains(&self.font_size)
    }
}
