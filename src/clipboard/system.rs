//! System clipboard backend
//!
//! Uses the operating system's clipboard through arboard.

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text to the system clipboard
///
/// Fails with `SystemUnavailable` in headless environments.
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod system_tests;
