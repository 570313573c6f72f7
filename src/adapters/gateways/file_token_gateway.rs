//! FileTokenGateway - JSON file token source

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::repositories::TokenSource;

/// Reads an external token document from a JSON file
pub struct FileTokenGateway {
    path: PathBuf,
}

impl FileTokenGateway {
    /// Create a new file token gateway
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the document path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenSource for FileTokenGateway {
    fn load(&self) -> Result<Value, DomainError> {
        if !self.path.exists() {
            return Err(DomainError::NotFound(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)?;
        let document: Value = serde_json::from_str(&content)?;
        crate::log!("Loaded token document from {:?}", self.path);
        Ok(document)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
