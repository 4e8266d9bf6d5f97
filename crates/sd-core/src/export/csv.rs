//! CSV encoder for extraction results

use super::encoder::{artifact_filename, Encoder, ExportArtifact};
use super::flatten::to_csv;
use crate::error::Result;
use crate::extraction::ExtractionResult;

/// CSV encoder: flattens the `data` payload as a single record.
///
/// Nested collections (exif maps, keyword lists) become compact-JSON cell
/// strings rather than separate tables. That is an intentional
/// simplification for this single-file export; analysis tools wanting the
/// sub-collections should use the workbook format instead.
pub struct CsvEncoder;

impl CsvEncoder {
    /// Create a new CSV encoder
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for CsvEncoder {
    fn encode(&self, result: &ExtractionResult) -> Result<ExportArtifact> {
        let data = result.data_value()?;
        let text = to_csv(&data);

        Ok(ExportArtifact {
            filename: artifact_filename(result, self.file_extension()),
            media_type: self.media_type().to_string(),
            bytes: text.into_bytes(),
        })
    }

    fn format_name(&self) -> &str {
        "csv"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn media_type(&self) -> &str {
        "text/csv;charset=utf-8;"
    }
}
