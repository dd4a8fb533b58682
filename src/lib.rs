//! `quillpad` - Core of a small rich-text notepad
//!
//! A presentation-independent editing core: a rope-backed document buffer
//! with cursor and selection, grouped undo/redo, span-based formatting that
//! follows edits, wrapping search, and encoding-aware file load and save.
//! A GUI or terminal front end drives it through [`Editor`] and renders
//! whatever the core reports.
//!
//! # Examples
//!
//! ```
//! use quillpad::{Command, Editor, Outcome};
//!
//! let mut editor = Editor::new();
//! editor.execute(Command::InsertText("Hello world".into())).unwrap();
//! let found = editor.execute(Command::Find("WORLD".into())).unwrap();
//! assert!(matches!(found, Outcome::Found(Some(m)) if m.offset == 6));
//!
//! editor.execute(Command::Undo).unwrap();
//! assert_eq!(editor.text(), "");
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional size casts
#![allow(clippy::module_name_repetitions)] // Allow editor::EditorOptions etc
#![allow(clippy::struct_excessive_bools)] // View config needs multiple flags
#![allow(clippy::missing_errors_doc)] // Error variants are documented on Error
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod color;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod io;
pub mod search;
pub mod style;
pub mod text;

// Re-export core types at crate root
pub use color::Color;
pub use command::{Command, Outcome};
pub use config::{EditorOptions, Theme, ViewConfig};
pub use editor::clipboard::{Clipboard, MemoryClipboard};
pub use editor::status::StatusInfo;
pub use editor::{Editor, UnsavedChoice};
pub use error::{Error, ErrorKind, Result};
pub use format::{FormattingModel, StyleSpan};
pub use io::{FileMeta, FileService, LineEnding, LoadedDocument, TextEncoding};
pub use search::{SearchMatch, SearchOptions};
pub use style::{Alignment, AttributeValue, StyleAttribute, StyleSet, TextAttributes};
pub use text::{DocumentBuffer, EditCommandStack, EditOperation};
