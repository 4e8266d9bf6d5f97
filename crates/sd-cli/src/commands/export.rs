//! Export command
//!
//! Export an extraction result to JSON, CSV, or a workbook.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use sd_core::config::Config;
use sd_core::export::ReportExporter;
use sd_core::extraction::ExtractionResult;
use sd_storage::DownloadSink;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON, payload only, 2-space indented
    Json,
    /// CSV, payload flattened to a single record
    Csv,
    /// Open XML workbook report
    Xlsx,
}

impl ExportFormat {
    fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Extraction result JSON file, as returned by the extraction API
    pub input: PathBuf,

    /// Export format (config default when not given)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Directory to deliver the artifact to (current directory by default)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write the artifact to stdout instead of a file (text formats only)
    #[arg(long)]
    pub stdout: bool,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let text = std::fs::read_to_string(&args.input)
        .context(format!("Failed to read {}", args.input.display()))?;
    let result = ExtractionResult::from_json_str(&text)
        .context(format!("Failed to load {}", args.input.display()))?;
    tracing::debug!(input = %args.input.display(), "loaded extraction result");

    let format = args
        .format
        .map(|f| f.as_str().to_string())
        .unwrap_or_else(|| config.export.default_format.clone());

    eprintln!(
        "Exporting {} result for file {}...",
        result.extraction_type().to_string().cyan(),
        result.file_id.to_string().yellow()
    );

    let exporter = ReportExporter::new();

    if args.stdout {
        if format == "xlsx" {
            bail!("Refusing to write workbook bytes to stdout; use --output instead");
        }
        let artifact = exporter
            .export(Some(&result), &format)?
            .context("No artifact produced")?;
        std::io::stdout()
            .write_all(&artifact.bytes)
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    let output_dir = args
        .output
        .clone()
        .or_else(|| config.export.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let sink = DownloadSink::new(&output_dir)?;

    let artifact = exporter
        .export_to_sink(Some(&result), &format, &sink)?
        .context("No artifact produced")?;

    eprintln!(
        "{} Exported to {}",
        "✓".green(),
        sink.target_path(&artifact).display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_values() {
        // Test that all enum values can be parsed
        assert!(ExportFormat::from_str("json", true).is_ok());
        assert!(ExportFormat::from_str("csv", true).is_ok());
        assert!(ExportFormat::from_str("xlsx", true).is_ok());
        assert!(ExportFormat::from_str("pdf", true).is_err());
    }

    #[test]
    fn test_format_names_match_registry() {
        let exporter = ReportExporter::new();
        for format in [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Xlsx] {
            assert!(exporter.has_format(format.as_str()));
        }
    }
}
