//! Error types for the analysis core

use thiserror::Error;

/// Errors raised by scoring, aggregation, profiles and the message store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    /// Empty or otherwise unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required setting is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A profile, dimension or store location does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The message store failed to open or query
    #[error("Store error: {0}")]
    Store(String),
}

pub type TextureResult<T> = std::result::Result<T, TextureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TextureError::InvalidInput("Text must be a non-empty string".to_string());
        assert_eq!(err.to_string(), "Invalid input: Text must be a non-empty string");

        let err = TextureError::NotFound("Database not found: /tmp/x.db".to_string());
        assert!(err.to_string().starts_with("Not found:"));
    }
}
