//! Filesystem delivery of export artifacts

use sd_core::error::{Result, ShareDropError};
use sd_core::export::{ArtifactSink, ExportArtifact};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Delivers artifacts into a download directory.
///
/// The write discipline mirrors a scoped acquisition: bytes land in a
/// hidden temp file that is renamed into place on success and removed on
/// every failure path, so a failed export never leaves a partial artifact.
pub struct DownloadSink {
    /// Directory artifacts are delivered to
    dir: PathBuf,
}

impl DownloadSink {
    /// Create a sink delivering into the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                ShareDropError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create download directory: {}", e),
                ))
            })?;
            debug!("Created download directory: {:?}", dir);
        }
        Ok(Self { dir })
    }

    /// Create a sink at the default location (~/.sharedrop/exports)
    pub fn default_location() -> Result<Self> {
        let dir = directories::ProjectDirs::from("com", "sharedrop", "sharedrop")
            .map(|dirs| dirs.data_dir().join("exports"))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".sharedrop")
                    .join("exports")
            });

        Self::new(dir)
    }

    /// Final path an artifact will be delivered to
    pub fn target_path(&self, artifact: &ExportArtifact) -> PathBuf {
        self.dir.join(&artifact.filename)
    }

    fn temp_path(&self, artifact: &ExportArtifact) -> PathBuf {
        self.dir.join(format!(".{}.tmp", artifact.filename))
    }

    fn write_temp(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}

impl ArtifactSink for DownloadSink {
    fn deliver(&self, artifact: &ExportArtifact) -> Result<()> {
        let temp_path = self.temp_path(artifact);
        let final_path = self.target_path(artifact);

        if let Err(e) = self.write_temp(&temp_path, &artifact.bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(ShareDropError::ExportFailed {
                format: artifact.format_name().to_string(),
                message: format!("failed to write {}: {}", temp_path.display(), e),
            });
        }

        if let Err(e) = fs::rename(&temp_path, &final_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(ShareDropError::ExportFailed {
                format: artifact.format_name().to_string(),
                message: format!("failed to finalize {}: {}", final_path.display(), e),
            });
        }

        info!(
            path = %final_path.display(),
            bytes = artifact.bytes.len(),
            "delivered export artifact"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn artifact() -> ExportArtifact {
        ExportArtifact {
            filename: "extraction-metadata-7.json".to_string(),
            media_type: "application/json".to_string(),
            bytes: b"{\n  \"format\": \"JPEG\"\n}".to_vec(),
        }
    }

    #[test]
    fn test_deliver_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path()).unwrap();
        let artifact = artifact();

        sink.deliver(&artifact).unwrap();

        let path = sink.target_path(&artifact);
        assert_eq!(fs::read(path).unwrap(), artifact.bytes);
    }

    #[test]
    fn test_deliver_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path()).unwrap();

        sink.deliver(&artifact()).unwrap();

        let entries: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["extraction-metadata-7.json".to_string()]);
    }

    #[test]
    fn test_deliver_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path()).unwrap();
        let mut artifact = artifact();

        sink.deliver(&artifact).unwrap();
        artifact.bytes = b"{}".to_vec();
        sink.deliver(&artifact).unwrap();

        assert_eq!(fs::read(sink.target_path(&artifact)).unwrap(), b"{}");
    }

    #[test]
    fn test_failed_delivery_reports_format_name() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path()).unwrap();
        let artifact = artifact();

        // A directory squatting on the final path makes the rename fail.
        fs::create_dir(sink.target_path(&artifact)).unwrap();

        let err = sink.deliver(&artifact).unwrap_err();
        match &err {
            ShareDropError::ExportFailed { format, .. } => assert_eq!(format, "json"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("format 'json'"));
        assert!(!sink.temp_path(&artifact).exists());
    }

    #[test]
    fn test_new_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("today");
        let sink = DownloadSink::new(&nested).unwrap();
        assert!(nested.exists());

        sink.deliver(&artifact()).unwrap();
        assert!(sink.target_path(&artifact()).exists());
    }
}
