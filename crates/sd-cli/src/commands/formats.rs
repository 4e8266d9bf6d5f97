//! Formats command
//!
//! List the export formats the orchestrator has registered.

use anyhow::Result;
use sd_core::export::ReportExporter;

/// Execute the formats command
pub fn execute() -> Result<()> {
    use colored::Colorize;

    let exporter = ReportExporter::new();
    for name in exporter.available_formats() {
        if let Some(encoder) = exporter.get(&name) {
            println!(
                "{:<8} .{:<6} {}",
                name.bold(),
                encoder.file_extension(),
                encoder.media_type().dimmed()
            );
        }
    }

    Ok(())
}
