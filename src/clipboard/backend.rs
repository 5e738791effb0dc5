//! Clipboard backend selection and error types
//!
//! Copies a chosen suggestion using the backend picked in the
//! configuration.

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("system clipboard is not available")]
    SystemUnavailable,

    #[error("could not write to the clipboard")]
    WriteError,

    #[error("no suggestion #{number}; pick a number from 1 to {available}")]
    NoSuchSuggestion { number: usize, available: usize },
}

/// Copy text to clipboard using the specified backend
///
/// `Auto` tries the system clipboard first and falls back to OSC 52.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("System clipboard failed ({}); using OSC 52", e);
            osc52::copy(text)
        }),
    }
}

/// Copy the suggestion at 1-based position `number`
///
/// Returns the copied text.
pub fn copy_suggestion(
    suggestions: &[String],
    number: usize,
    backend: ClipboardBackend,
) -> Result<&str, ClipboardError> {
    let text = number
        .checked_sub(1)
        .and_then(|index| suggestions.get(index))
        .ok_or(ClipboardError::NoSuchSuggestion {
            number,
            available: suggestions.len(),
        })?;

    copy_to_clipboard(text, backend)?;
    Ok(text.as_str())
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
