//! Error types for sharedrop-export

use thiserror::Error;

/// Main error type for sharedrop-export
#[derive(Debug, Error)]
pub enum ShareDropError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Workbook construction error
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Validation error (malformed payload, unknown format, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export attempt failed after encoding
    #[error("Export failed for format '{format}': {message}")]
    ExportFailed { format: String, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ShareDropError>,
    },
}

impl ShareDropError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ShareDropError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for sharedrop-export
pub type Result<T> = std::result::Result<T, ShareDropError>;
