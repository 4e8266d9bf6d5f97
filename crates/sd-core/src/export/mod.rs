//! Export functionality for extraction results
//!
//! This module turns an extraction result into a downloadable artifact in
//! one of three formats: JSON, CSV, or an Open XML workbook.
//!
//! # Overview
//!
//! The pipeline is layered leaves-first:
//! - value formatting (any field value to a display string)
//! - row flattening (records to a rectangular CSV table)
//! - three independent encoders, each producing bytes plus a suggested
//!   filename and media type
//! - the `ReportExporter` orchestrator, which picks the encoder from the
//!   requested format and the result's tag
//!
//! # Example
//!
//! ```ignore
//! use sd_core::export::ReportExporter;
//!
//! let exporter = ReportExporter::new();
//! let artifact = exporter.export(Some(&result), "xlsx")?;
//! ```

mod csv;
mod encoder;
mod flatten;
mod json;
mod value;
mod workbook;

pub use csv::CsvEncoder;
pub use encoder::{ArtifactSink, Encoder, ExportArtifact, ReportExporter};
pub use flatten::to_csv;
pub use json::JsonEncoder;
pub use value::{format_value, ValueStyle};
pub use workbook::WorkbookEncoder;
