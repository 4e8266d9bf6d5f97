//! sd-storage - Artifact delivery for sharedrop-export
//!
//! This crate implements the download side effect: delivering an encoded
//! export artifact to the filesystem.

mod download;

pub use download::DownloadSink;
