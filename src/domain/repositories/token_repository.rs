//! TokenSource - interface for loading external token documents
//!
//! A source hands back the raw, untyped document. Interpreting it is the
//! resolver's job.

use serde_json::Value;

use crate::domain::errors::DomainError;

/// Repository interface for external token documents
pub trait TokenSource: Send + Sync {
    /// Load the raw document
    fn load(&self) -> Result<Value, DomainError>;

    /// Human-readable origin, for logging
    fn describe(&self) -> String;

    /// Load, degrading any failure to an empty document
    fn load_or_empty(&self) -> Value {
        match self.load() {
            Ok(document) => document,
            Err(e) => {
                crate::log!("Token source {} unavailable: {}", self.describe(), e);
                Value::Null
            }
        }
    }
}

/// A null implementation: no external tokens at all
pub struct NullTokenSource;

impl TokenSource for NullTokenSource {
    fn load(&self) -> Result<Value, DomainError> {
        Ok(Value::Null)
    }

    fn describe(&self) -> String {
        "<none>".to_string()
    }
}

/// An in-memory document, e.g. one compiled into the binary
pub struct StaticTokenSource {
    document: Value,
}

impl StaticTokenSource {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// Parse a JSON string up front
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl TokenSource for StaticTokenSource {
    fn load(&self) -> Result<Value, DomainError> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "<static>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FailingSource;

    impl TokenSource for FailingSource {
        fn load(&self) -> Result<Value, DomainError> {
            Err(DomainError::NotFound("tokens.json".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_null_source_is_empty() {
        assert_eq!(NullTokenSource.load().unwrap(), Value::Null);
    }

    #[test]
    fn test_static_source_from_json() {
        let source = StaticTokenSource::from_json(r##"{"colors":{"primary":"#fff"}}"##).unwrap();
        assert_eq!(source.load().unwrap(), json!({ "colors": { "primary": "#fff" } }));
        assert!(StaticTokenSource::from_json("{not json").is_err());
    }

    #[test]
    fn test_failure_degrades_to_empty_document() {
        assert_eq!(FailingSource.load_or_empty(), Value::Null);
    }
}
