//! Tests for clipboard/backend

use super::*;

fn suggestions() -> Vec<String> {
    vec!["Sounds good!".to_string(), "Count me in!".to_string()]
}

#[test]
fn test_copy_to_clipboard_osc52_backend() {
    let result = copy_to_clipboard("test", ClipboardBackend::Osc52);
    assert!(result.is_ok());
}

#[test]
fn test_copy_to_clipboard_system_backend() {
    let result = copy_to_clipboard("test", ClipboardBackend::System);
    assert!(
        result.is_ok()
            || matches!(
                result,
                Err(ClipboardError::SystemUnavailable | ClipboardError::WriteError)
            )
    );
}

#[test]
fn test_copy_to_clipboard_auto_backend() {
    let result = copy_to_clipboard("test", ClipboardBackend::Auto);
    assert!(result.is_ok());
}

#[test]
fn test_copy_suggestion_returns_copied_text() {
    let items = suggestions();
    let copied = copy_suggestion(&items, 2, ClipboardBackend::Osc52);
    assert_eq!(copied, Ok("Count me in!"));
}

#[test]
fn test_copy_suggestion_zero_is_out_of_range() {
    let items = suggestions();
    let result = copy_suggestion(&items, 0, ClipboardBackend::Osc52);
    assert_eq!(
        result,
        Err(ClipboardError::NoSuchSuggestion {
            number: 0,
            available: 2
        })
    );
}

#[test]
fn test_copy_suggestion_past_end_is_out_of_range() {
    let items = suggestions();
    let result = copy_suggestion(&items, 3, ClipboardBackend::Osc52);
    assert!(matches!(
        result,
        Err(ClipboardError::NoSuchSuggestion { number: 3, .. })
    ));
}

#[test]
fn test_no_such_suggestion_message() {
    let error = ClipboardError::NoSuchSuggestion {
        number: 7,
        available: 4,
    };
    assert_eq!(error.to_string(), "no suggestion #7; pick a number from 1 to 4");
}
