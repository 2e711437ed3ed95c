//! Error types for loading documents

use thiserror::Error;

/// Errors that can occur when reading or decoding a document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse document TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported document format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },
}

impl DocumentError {
    /// Create an unsupported format error
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = DocumentError::unsupported("yaml");
        assert_eq!(
            err.to_string(),
            "unsupported document format 'yaml' (expected .toml or .json)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DocumentError = io.into();
        assert!(matches!(err, DocumentError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
