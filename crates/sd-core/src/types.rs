//! Core type definitions for sharedrop-export

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a file stored by the ShareDrop API.
///
/// Opaque to the exporter; it only flows into suggested filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub i64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of extraction a result was produced by.
///
/// The payload shape is fully determined by this tag; consumers must match
/// on it rather than probe fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionType {
    /// Image EXIF/metadata extraction
    Metadata,
    /// Document keyword/phrase analysis
    Highlights,
}

impl ExtractionType {
    /// Wire name of the extraction type
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionType::Metadata => "metadata",
            ExtractionType::Highlights => "highlights",
        }
    }
}

impl fmt::Display for ExtractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_display() {
        assert_eq!(FileId(42).to_string(), "42");
    }

    #[test]
    fn test_extraction_type_wire_names() {
        assert_eq!(ExtractionType::Metadata.as_str(), "metadata");
        assert_eq!(ExtractionType::Highlights.as_str(), "highlights");
    }

    #[test]
    fn test_extraction_type_serde() {
        let json = serde_json::to_string(&ExtractionType::Highlights).unwrap();
        assert_eq!(json, "\"highlights\"");
        let parsed: ExtractionType = serde_json::from_str("\"metadata\"").unwrap();
        assert_eq!(parsed, ExtractionType::Metadata);
    }
}
