//! Clipboard seam.
//!
//! The core never talks to the system clipboard directly. Hosts that want
//! system integration implement [`Clipboard`] and hand it to
//! [`Editor::with_clipboard`](super::Editor::with_clipboard).

/// Source and sink for cut/copy/paste.
pub trait Clipboard {
    /// Replace the clipboard contents.
    fn set_text(&mut self, text: String);

    /// Current contents, if any.
    fn get_text(&self) -> Option<String>;
}

/// Process-local clipboard.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) {
        self.contents = Some(text);
    }

    fn get_text(&self) -> Option<String> {
        self.contents.clone()
    }
}
