//! Context detection for pasted messages
//!
//! Infers a coarse conversational category from the message text using
//! case-insensitive substring matching. Rules are checked in priority
//! order and the first one that matches decides the context.

use std::fmt;

/// Conversational category inferred from a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Context {
    #[default]
    None,
    Compliment,
    Question,
    Meeting,
    Favor,
}

impl Context {
    /// Key used for this context in template payloads, `None` has no key
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Context::None => None,
            Context::Compliment => Some("compliment"),
            Context::Question => Some("question"),
            Context::Meeting => Some("meeting"),
            Context::Favor => Some("favor"),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().unwrap_or("none"))
    }
}

/// Ordered (context, needles) rules; earlier entries win
const CONTEXT_RULES: &[(Context, &[&str])] = &[
    (Context::Compliment, &["great", "amazing", "awesome", "good job"]),
    (Context::Question, &["?"]),
    (Context::Meeting, &["meet", "coffee", "lunch", "dinner"]),
    (Context::Favor, &["can you", "could you", "help"]),
];

/// Classify message text into a [`Context`]
///
/// # Examples
/// ```
/// use friendai::context::{Context, classify};
///
/// assert_eq!(classify("How's it going?"), Context::Question);
/// assert_eq!(classify("Can you meet for great coffee?"), Context::Compliment);
/// assert_eq!(classify(""), Context::None);
/// ```
pub fn classify(text: &str) -> Context {
    if text.is_empty() {
        return Context::None;
    }

    let lower = text.to_lowercase();

    CONTEXT_RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| lower.contains(needle)))
        .map(|(context, _)| *context)
        .unwrap_or(Context::None)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod classifier_tests;
