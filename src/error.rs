use thiserror::Error;

/// Custom error types for friendai
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FriendError {
    #[error("Templates have not been loaded yet. Load the template store before generating.")]
    StoreNotLoaded,

    #[error("Unknown mode '{0}'. Expected one of: warm, confident, simple, smalltalk, calm")]
    InvalidMode(String),

    #[error("Failed to load template file {file}: {reason}")]
    TemplateLoad { file: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FriendError {
    fn from(err: std::io::Error) -> Self {
        FriendError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
