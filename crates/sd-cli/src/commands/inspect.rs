//! Inspect command
//!
//! Summarize an extraction result without exporting it.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use sd_core::export::{format_value, ValueStyle};
use sd_core::extraction::{ExtractionPayload, ExtractionResult};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Extraction result JSON file
    pub input: PathBuf,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    use colored::Colorize;

    let text = std::fs::read_to_string(&args.input)
        .context(format!("Failed to read {}", args.input.display()))?;
    let result = ExtractionResult::from_json_str(&text)
        .context(format!("Failed to load {}", args.input.display()))?;

    println!(
        "{} {}",
        "Extraction type:".bold(),
        result.extraction_type().to_string().cyan()
    );
    println!("{} {}", "File id:".bold(), result.file_id);

    match &result.payload {
        ExtractionPayload::Metadata(m) => {
            println!("{} {}", "Filename:".bold(), m.filename);
            println!(
                "{} {} {} ({}x{})",
                "Image:".bold(),
                m.format,
                m.mode,
                m.size.width,
                m.size.height
            );
            println!("{} {}", "EXIF tags:".bold(), m.exif.len());
            for (tag, value) in &m.exif {
                println!("  {} = {}", tag, format_value(value, ValueStyle::Display));
            }
            println!("{} {}", "Extracted at:".bold(), m.extracted_at);
        }
        ExtractionPayload::Highlights(h) => {
            println!("{} {}", "Filename:".bold(), h.filename);
            println!(
                "{} {} words, {} unique",
                "Text:".bold(),
                h.text_stats.total_words,
                h.text_stats.unique_words
            );
            println!("{} {}", "Keywords:".bold(), h.top_keywords.len());
            println!("{} {}", "Phrases:".bold(), h.top_phrases.len());
            println!("{} {}", "Highlights:".bold(), h.sample_highlights.len());
            println!("{} {}", "Extracted at:".bold(), h.extracted_at);
        }
    }

    Ok(())
}
