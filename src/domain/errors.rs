//! Domain layer error types
//!
//! Only loading a token document can fail. Resolution itself never does.

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Token document does not exist
    #[error("Token document not found: {0}")]
    NotFound(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    IoError(String),

    /// Document is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::ParseError(err.to_string())
    }
}
