use std::path::Path;

use crate::domain::{DomainError, Language};

/// A file handed in for analysis. Lives for one flow only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, keeping only its file name.
    pub async fn from_path(path: &Path) -> Result<Self, DomainError> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn language(&self) -> Language {
        Language::detect(&self.name)
    }

    /// Strict UTF-8 decoding; invalid bytes are an error, never replaced.
    pub fn decode(&self) -> Result<String, DomainError> {
        std::str::from_utf8(&self.bytes)
            .map(str::to_string)
            .map_err(|e| DomainError::decode(format!("{} is not valid UTF-8: {e}", self.name)))
    }
}
