//! Workbook encoder for extraction results
//!
//! Builds a single-sheet Open XML workbook whose layout depends on the
//! payload variant: one fixed `Field`/`Value` table for image metadata, or
//! five titled sections stacked vertically for document highlights. Column
//! widths are auto-sized once, after all sections are written.

use super::encoder::{artifact_filename, Encoder, ExportArtifact};
use crate::error::Result;
use crate::extraction::{ExtractionPayload, ExtractionResult, HighlightsData, ImageMetadata};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Workbook encoder, dispatching internally on the extraction type
pub struct WorkbookEncoder;

/// One cell of a section table
#[derive(Debug, Clone, PartialEq)]
enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Stringified form, as used for column sizing
    fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

/// A titled table within the sheet
struct Section {
    title: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<CellValue>>,
}

/// Longest stringified cell per column, for the auto-size pass
struct ColumnWidths {
    longest: Vec<usize>,
}

/// Auto-size rule: floored at 15 characters, else content length + 2
fn column_width(longest: usize) -> f64 {
    if longest < 15 {
        15.0
    } else {
        (longest + 2) as f64
    }
}

impl ColumnWidths {
    fn new(columns: usize) -> Self {
        Self {
            longest: vec![0; columns],
        }
    }

    fn note(&mut self, col: usize, text: &str) {
        if col < self.longest.len() {
            let len = text.chars().count();
            if len > self.longest[col] {
                self.longest[col] = len;
            }
        }
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<()> {
        for (col, longest) in self.longest.iter().enumerate() {
            sheet.set_column_width(col as u16, column_width(*longest))?;
        }
        Ok(())
    }
}

impl WorkbookEncoder {
    /// Create a new workbook encoder
    pub fn new() -> Self {
        Self
    }

    fn build(&self, sheet_name: &str, sections: &[Section]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let mut sheet = Worksheet::new();
        sheet.set_name(sheet_name)?;

        let title_format = Format::new().set_bold().set_font_size(14);
        let mut widths = ColumnWidths::new(2);
        let mut cursor: u32 = 0;

        for section in sections {
            cursor = write_section(&mut sheet, &mut widths, cursor, section, &title_format)?;
        }

        widths.apply(&mut sheet)?;
        workbook.push_worksheet(sheet);

        Ok(workbook.save_to_buffer()?)
    }
}

impl Default for WorkbookEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for WorkbookEncoder {
    fn encode(&self, result: &ExtractionResult) -> Result<ExportArtifact> {
        let bytes = match &result.payload {
            ExtractionPayload::Metadata(m) => {
                self.build("Image Metadata Report", &[image_section(m)])?
            }
            ExtractionPayload::Highlights(h) => {
                self.build("Extraction Report", &document_sections(h))?
            }
        };

        Ok(ExportArtifact {
            filename: artifact_filename(result, self.file_extension()),
            media_type: self.media_type().to_string(),
            bytes,
        })
    }

    fn format_name(&self) -> &str {
        "xlsx"
    }

    fn file_extension(&self) -> &str {
        "xlsx"
    }

    fn media_type(&self) -> &str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }
}

/// Write one titled table and return the cursor for the next section.
///
/// The title occupies one merged row above the header; after the data rows
/// the cursor advances by two, leaving one blank row before whatever
/// follows.
fn write_section(
    sheet: &mut Worksheet,
    widths: &mut ColumnWidths,
    cursor: u32,
    section: &Section,
    title_format: &Format,
) -> Result<u32> {
    sheet.merge_range(cursor, 0, cursor, 1, section.title, title_format)?;
    widths.note(0, section.title);

    let header_row = cursor + 1;
    for (col, header) in section.headers.iter().enumerate() {
        sheet.write_string(header_row, col as u16, *header)?;
        widths.note(col, header);
    }

    for (i, row) in section.rows.iter().enumerate() {
        let row_num = header_row + 1 + i as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                CellValue::Text(s) => {
                    sheet.write_string(row_num, col as u16, s.as_str())?;
                }
                CellValue::Number(n) => {
                    sheet.write_number(row_num, col as u16, *n)?;
                }
            }
            widths.note(col, &cell.display());
        }
    }

    Ok(header_row + section.rows.len() as u32 + 2)
}

/// File size rendered in KB to two decimals
fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// The fixed image metadata table
fn image_section(m: &ImageMetadata) -> Section {
    let pair = |field: &str, value: String| vec![CellValue::text(field), CellValue::Text(value)];

    Section {
        title: "Image Metadata",
        headers: &["Field", "Value"],
        rows: vec![
            pair("Format", m.format.clone()),
            pair("Mode", m.mode.clone()),
            pair("Width", format!("{} pixels", m.size.width)),
            pair("Height", format!("{} pixels", m.size.height)),
            pair("Dimensions", format!("{} × {}", m.size.width, m.size.height)),
            pair("File Size", format_kb(m.file_size_bytes)),
            pair("Has Transparency", yes_no(m.has_transparency).to_string()),
            pair("Extracted At", m.extracted_at.clone()),
            pair("Filename", m.filename.clone()),
        ],
    }
}

/// The five document report sections, in fixed order
fn document_sections(h: &HighlightsData) -> Vec<Section> {
    let stat = |metric: &str, value: u64| {
        vec![CellValue::text(metric), CellValue::Number(value as f64)]
    };

    vec![
        Section {
            title: "Text Statistics",
            headers: &["Metric", "Value"],
            rows: vec![
                stat("total_characters", h.text_stats.total_characters),
                stat("total_words", h.text_stats.total_words),
                stat("total_sentences", h.text_stats.total_sentences),
                stat("unique_words", h.text_stats.unique_words),
            ],
        },
        Section {
            title: "Top Keywords",
            headers: &["Keyword", "Frequency"],
            rows: h
                .top_keywords
                .iter()
                .map(|k| {
                    vec![
                        CellValue::text(&k.word),
                        CellValue::Number(k.frequency as f64),
                    ]
                })
                .collect(),
        },
        Section {
            title: "Top Phrases",
            headers: &["Phrase", "Frequency"],
            rows: h
                .top_phrases
                .iter()
                .map(|p| {
                    vec![
                        CellValue::text(&p.phrase),
                        CellValue::Number(p.frequency as f64),
                    ]
                })
                .collect(),
        },
        Section {
            title: "Sample Highlights",
            headers: &["Highlight"],
            rows: h
                .sample_highlights
                .iter()
                .map(|s| vec![CellValue::text(s)])
                .collect(),
        },
        Section {
            title: "File Metadata",
            headers: &["Field", "Value"],
            rows: vec![
                vec![
                    CellValue::text("Filename"),
                    CellValue::text(&h.filename),
                ],
                vec![
                    CellValue::text("File Type"),
                    CellValue::text(&h.file_type),
                ],
                vec![
                    CellValue::text("File Size (bytes)"),
                    CellValue::Number(h.file_size_bytes as f64),
                ],
                vec![
                    CellValue::text("Extracted At"),
                    CellValue::text(&h.extracted_at),
                ],
            ],
        },
    ]
}
