//! Encoder trait and orchestrator

use crate::error::{Result, ShareDropError};
use crate::extraction::ExtractionResult;
use std::collections::HashMap;
use tracing::debug;

/// A finished export: bytes plus the delivery metadata a download needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested filename, `extraction-<type>-<id>.<ext>`
    pub filename: String,
    /// Media type for the download
    pub media_type: String,
    /// Encoded file content
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Format name derived from the filename extension (`json`, `csv`, `xlsx`).
    pub fn format_name(&self) -> &str {
        self.filename.rsplit('.').next().unwrap_or(&self.filename)
    }
}

/// Trait for extraction result encoders
pub trait Encoder: Send + Sync {
    /// Encode a result into a downloadable artifact
    fn encode(&self, result: &ExtractionResult) -> Result<ExportArtifact>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;

    /// Get the media type of produced artifacts
    fn media_type(&self) -> &str;
}

/// Destination an artifact is delivered to once encoded
pub trait ArtifactSink {
    /// Deliver the artifact; must leave nothing behind on failure
    fn deliver(&self, artifact: &ExportArtifact) -> Result<()>;
}

/// Suggested filename for an artifact of the given result.
///
/// One pattern for every format and both workbook variants.
pub(super) fn artifact_filename(result: &ExtractionResult, extension: &str) -> String {
    format!(
        "extraction-{}-{}.{}",
        result.extraction_type(),
        result.file_id,
        extension
    )
}

/// Orchestrator over the registered format encoders
pub struct ReportExporter {
    encoders: HashMap<String, Box<dyn Encoder>>,
}

impl ReportExporter {
    /// Create an exporter with the default JSON, CSV and workbook encoders
    pub fn new() -> Self {
        let mut exporter = Self {
            encoders: HashMap::new(),
        };

        exporter.register(Box::new(super::json::JsonEncoder::new()));
        exporter.register(Box::new(super::csv::CsvEncoder::new()));
        exporter.register(Box::new(super::workbook::WorkbookEncoder::new()));

        exporter
    }

    /// Register a new encoder
    pub fn register(&mut self, encoder: Box<dyn Encoder>) {
        self.encoders
            .insert(encoder.format_name().to_string(), encoder);
    }

    /// Export a result to the specified format.
    ///
    /// An absent result is a silent no-op: nothing is encoded and no error
    /// is raised, mirroring the UI precondition that export controls are
    /// only reachable once a result exists.
    pub fn export(
        &self,
        result: Option<&ExtractionResult>,
        format: &str,
    ) -> Result<Option<ExportArtifact>> {
        let Some(result) = result else {
            debug!("export requested with no extraction result; skipping");
            return Ok(None);
        };

        let encoder = self
            .encoders
            .get(format)
            .ok_or_else(|| ShareDropError::Validation(format!("Unknown export format: {}", format)))?;

        let artifact = encoder.encode(result)?;
        debug!(
            format = %format,
            filename = %artifact.filename,
            bytes = artifact.bytes.len(),
            "encoded extraction result"
        );
        Ok(Some(artifact))
    }

    /// Export a result and deliver it through a sink.
    ///
    /// Returns the delivered artifact, or `None` when no result was given.
    pub fn export_to_sink(
        &self,
        result: Option<&ExtractionResult>,
        format: &str,
        sink: &dyn ArtifactSink,
    ) -> Result<Option<ExportArtifact>> {
        let Some(artifact) = self.export(result, format)? else {
            return Ok(None);
        };

        sink.deliver(&artifact)?;
        Ok(Some(artifact))
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.encoders.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.encoders.contains_key(format)
    }

    /// Get an encoder by format name
    pub fn get(&self, format: &str) -> Option<&dyn Encoder> {
        self.encoders.get(format).map(|e| e.as_ref())
    }
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self::new()
    }
}
