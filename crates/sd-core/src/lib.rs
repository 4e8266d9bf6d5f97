//! sd-core - Core library for sharedrop-export
//!
//! This crate provides the report-generation logic for ShareDrop extraction
//! results: the extraction result model, value formatting, row flattening,
//! and the JSON/CSV/workbook encoders with their orchestrator.

pub mod error;
pub mod types;
pub mod config;
pub mod extraction;
pub mod export;

pub use error::{Result, ShareDropError};
pub use types::*;
