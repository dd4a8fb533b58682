//! Shared helpers for integration tests.

#![allow(dead_code)]

use quillpad::Editor;
use std::path::PathBuf;
use tempfile::TempDir;

/// Route `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Editor holding `text`, cursor at the end, with one undo step.
pub fn editor_with(text: &str) -> Editor {
    let mut editor = Editor::new();
    editor.insert_text(text).expect("insert into empty editor");
    editor
}

/// Temporary directory with a file `name` holding `contents`.
pub fn fixture(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    (dir, path)
}
