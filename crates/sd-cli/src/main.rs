//! sharedrop - ShareDrop report exporter CLI
//!
//! Exports ShareDrop extraction results to JSON, CSV, or an Open XML
//! workbook.
//!
//! ## Quick Start
//!
//! ```bash
//! # Export a result to a workbook in the current directory
//! sharedrop export result.json --format xlsx
//!
//! # Summarize a result without exporting
//! sharedrop inspect result.json
//!
//! # List the available export formats
//! sharedrop formats
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
