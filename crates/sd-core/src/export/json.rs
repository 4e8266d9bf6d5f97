//! JSON encoder for extraction results

use super::encoder::{artifact_filename, Encoder, ExportArtifact};
use crate::error::Result;
use crate::extraction::ExtractionResult;

/// JSON encoder: serializes the `data` payload only, 2-space indented.
///
/// Round-trip contract: parsing the output reproduces the payload exactly,
/// with object key order preserved as encountered.
pub struct JsonEncoder;

impl JsonEncoder {
    /// Create a new JSON encoder
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, result: &ExtractionResult) -> Result<ExportArtifact> {
        let data = result.data_value()?;
        let text = serde_json::to_string_pretty(&data)?;

        Ok(ExportArtifact {
            filename: artifact_filename(result, self.file_extension()),
            media_type: self.media_type().to_string(),
            bytes: text.into_bytes(),
        })
    }

    fn format_name(&self) -> &str {
        "json"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn media_type(&self) -> &str {
        "application/json"
    }
}
