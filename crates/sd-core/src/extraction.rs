//! Extraction result model
//!
//! Mirrors the payloads produced by the ShareDrop extraction API. The
//! payload shape is a tagged union keyed by `extraction_type`; every
//! consumer matches on the tag exhaustively.

use crate::error::{Result, ShareDropError};
use crate::types::{ExtractionType, FileId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One extraction API response, held as an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// File the extraction ran against
    pub file_id: FileId,
    /// Variant payload, discriminated by the `extraction_type` tag
    #[serde(flatten)]
    pub payload: ExtractionPayload,
}

/// Variant payload of an extraction result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "extraction_type", content = "data", rename_all = "lowercase")]
pub enum ExtractionPayload {
    /// Image metadata extraction
    Metadata(ImageMetadata),
    /// Document text analysis
    Highlights(HighlightsData),
}

/// Image metadata payload (`extraction_type = metadata`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub filename: String,
    pub format: String,
    pub mode: String,
    pub size: ImageSize,
    pub has_transparency: bool,
    pub file_size_bytes: u64,
    /// ISO-8601 timestamp string, kept verbatim for round-trip fidelity
    pub extracted_at: String,
    /// Arbitrary EXIF tags, insertion order preserved
    pub exif: serde_json::Map<String, Value>,
    /// Arbitrary format-specific info entries
    pub info: serde_json::Map<String, Value>,
}

/// Pixel dimensions of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Document highlights payload (`extraction_type = highlights`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightsData {
    pub filename: String,
    pub file_type: String,
    pub file_size_bytes: u64,
    pub extracted_at: String,
    pub text_stats: TextStats,
    /// Descending relevance order as provided upstream, never re-sorted
    pub top_keywords: Vec<Keyword>,
    pub top_phrases: Vec<Phrase>,
    pub sample_highlights: Vec<String>,
}

/// Aggregate text statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub total_characters: u64,
    pub total_words: u64,
    pub total_sentences: u64,
    pub unique_words: u64,
}

/// One keyword with its document frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub frequency: u64,
}

/// One phrase with its document frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub phrase: String,
    pub frequency: u64,
}

impl ExtractionResult {
    /// Parse a result from its JSON wire form.
    ///
    /// Any missing required field or shape mismatch is reported as a
    /// validation error rather than a type fault later on.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let result: ExtractionResult = serde_json::from_str(s)
            .map_err(|e| ShareDropError::Validation(format!("Malformed extraction result: {}", e)))?;
        result.validate()?;
        Ok(result)
    }

    /// The tag discriminating the payload shape
    pub fn extraction_type(&self) -> ExtractionType {
        match self.payload {
            ExtractionPayload::Metadata(_) => ExtractionType::Metadata,
            ExtractionPayload::Highlights(_) => ExtractionType::Highlights,
        }
    }

    /// The `data` payload as a JSON value, field order preserved
    pub fn data_value(&self) -> Result<Value> {
        let value = match &self.payload {
            ExtractionPayload::Metadata(m) => serde_json::to_value(m)?,
            ExtractionPayload::Highlights(h) => serde_json::to_value(h)?,
        };
        Ok(value)
    }

    /// Semantic checks beyond shape: non-empty filename, parseable timestamp
    pub fn validate(&self) -> Result<()> {
        let (filename, extracted_at) = match &self.payload {
            ExtractionPayload::Metadata(m) => (&m.filename, &m.extracted_at),
            ExtractionPayload::Highlights(h) => (&h.filename, &h.extracted_at),
        };

        if filename.is_empty() {
            return Err(ShareDropError::Validation(
                "extraction result has an empty filename".to_string(),
            ));
        }

        chrono::DateTime::parse_from_rfc3339(extracted_at).map_err(|e| {
            ShareDropError::Validation(format!(
                "invalid extracted_at timestamp '{}': {}",
                extracted_at, e
            ))
        })?;

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metadata_json() -> &'static str {
        r#"{
            "extraction_type": "metadata",
            "file_id": 7,
            "data": {
                "filename": "a.jpg",
                "format": "JPEG",
                "mode": "RGB",
                "size": { "width": 800, "height": 600 },
                "has_transparency": false,
                "file_size_bytes": 204800,
                "extracted_at": "2025-01-01T00:00:00Z",
                "exif": { "Make": "Canon", "ISOSpeedRatings": 200 },
                "info": {}
            }
        }"#
    }

    fn highlights_json() -> &'static str {
        r#"{
            "extraction_type": "highlights",
            "file_id": 12,
            "data": {
                "filename": "report.pdf",
                "file_type": "application/pdf",
                "file_size_bytes": 52000,
                "extracted_at": "2025-01-02T10:30:00Z",
                "text_stats": {
                    "total_characters": 1200,
                    "total_words": 240,
                    "total_sentences": 18,
                    "unique_words": 130
                },
                "top_keywords": [
                    { "word": "cat", "frequency": 5 },
                    { "word": "dog", "frequency": 3 }
                ],
                "top_phrases": [
                    { "phrase": "machine learning", "frequency": 2 }
                ],
                "sample_highlights": ["First excerpt.", "Second excerpt."]
            }
        }"#
    }

    #[test]
    fn test_parse_metadata_result() {
        let result = ExtractionResult::from_json_str(metadata_json()).unwrap();
        assert_eq!(result.file_id, FileId(7));
        assert_eq!(result.extraction_type(), ExtractionType::Metadata);

        match &result.payload {
            ExtractionPayload::Metadata(m) => {
                assert_eq!(m.format, "JPEG");
                assert_eq!(m.size.width, 800);
                assert_eq!(m.exif.get("Make"), Some(&Value::from("Canon")));
            }
            ExtractionPayload::Highlights(_) => panic!("wrong payload variant"),
        }
    }

    #[test]
    fn test_parse_highlights_result() {
        let result = ExtractionResult::from_json_str(highlights_json()).unwrap();
        assert_eq!(result.extraction_type(), ExtractionType::Highlights);

        match &result.payload {
            ExtractionPayload::Highlights(h) => {
                assert_eq!(h.text_stats.unique_words, 130);
                assert_eq!(h.top_keywords[0].word, "cat");
                assert_eq!(h.sample_highlights.len(), 2);
            }
            ExtractionPayload::Metadata(_) => panic!("wrong payload variant"),
        }
    }

    #[test]
    fn test_missing_required_field_is_validation_error() {
        // size.width absent
        let json = r#"{
            "extraction_type": "metadata",
            "file_id": 1,
            "data": {
                "filename": "a.jpg",
                "format": "JPEG",
                "mode": "RGB",
                "size": { "height": 600 },
                "has_transparency": false,
                "file_size_bytes": 1,
                "extracted_at": "2025-01-01T00:00:00Z",
                "exif": {},
                "info": {}
            }
        }"#;
        let err = ExtractionResult::from_json_str(json).unwrap_err();
        assert!(matches!(err, ShareDropError::Validation(_)));
    }

    #[test]
    fn test_unknown_tag_is_validation_error() {
        let json = r#"{ "extraction_type": "thumbnails", "file_id": 1, "data": {} }"#;
        let err = ExtractionResult::from_json_str(json).unwrap_err();
        assert!(matches!(err, ShareDropError::Validation(_)));
    }

    #[test]
    fn test_invalid_timestamp_is_validation_error() {
        let json = metadata_json().replace("2025-01-01T00:00:00Z", "yesterday");
        let err = ExtractionResult::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ShareDropError::Validation(_)));
    }

    #[test]
    fn test_data_value_preserves_field_order() {
        let result = ExtractionResult::from_json_str(highlights_json()).unwrap();
        let value = result.data_value().unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "filename",
                "file_type",
                "file_size_bytes",
                "extracted_at",
                "text_stats",
                "top_keywords",
                "top_phrases",
                "sample_highlights"
            ]
        );
    }

    #[test]
    fn test_wrapper_round_trip() {
        let result = ExtractionResult::from_json_str(metadata_json()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
