//! Document sinks for finished PDF bytes
//!
//! Supports:
//! - Temporary files handed over for one-shot consumption (download)
//! - Fixed output paths

use crate::error::{PdfError, PdfResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Name prefix of temporary invoice files
const FILE_PREFIX: &str = "invoice-";

/// Trait for document destinations
pub trait DocumentSink {
    /// Write the full document and return where it landed
    fn write_document(&self, data: &[u8]) -> PdfResult<PathBuf>;
}

/// Writes each document to a fresh temporary file
///
/// The file is fully written and flushed, then detached from `tempfile`'s
/// drop guard: removing it is left to the host environment.
#[derive(Debug, Clone)]
pub struct TempFileSink {
    dir: Option<PathBuf>,
}

impl TempFileSink {
    /// Sink in the system temp directory
    pub fn new() -> Self {
        Self { dir: None }
    }

    /// Sink in a specific directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

impl Default for TempFileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSink for TempFileSink {
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    fn write_document(&self, data: &[u8]) -> PdfResult<PathBuf> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(FILE_PREFIX).suffix(".pdf");

        let mut file = match &self.dir {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(PdfError::InvalidOutput(format!(
                        "Not a directory: {}",
                        dir.display()
                    )));
                }
                builder.tempfile_in(dir)?
            }
            None => builder.tempfile()?,
        };

        file.write_all(data)?;
        file.flush()?;

        let (_, path) = file.keep().map_err(|e| PdfError::Io(e.error))?;
        info!(path = %path.display(), "Document written");
        Ok(path)
    }
}

/// Writes the document to a fixed path, replacing any previous file
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSink for FileSink {
    #[instrument(skip(self, data), fields(path = %self.path.display(), data_len = data.len()))]
    fn write_document(&self, data: &[u8]) -> PdfResult<PathBuf> {
        if self.path.is_dir() {
            return Err(PdfError::InvalidOutput(format!(
                "Is a directory: {}",
                self.path.display()
            )));
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&self.path)?;
        file.write_all(data)?;
        file.sync_all()?;

        info!("Document written");
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_sink_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TempFileSink::in_dir(dir.path());

        let path = sink.write_document(b"%PDF-1.4 test").unwrap();
        assert!(path.starts_with(dir.path()));
        assert_eq!(path.extension().unwrap(), "pdf");
        assert!(
            path.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("invoice-")
        );
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4 test");
    }

    #[test]
    fn test_temp_file_sink_rejects_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TempFileSink::in_dir(dir.path().join("nope"));
        assert!(matches!(
            sink.write_document(b"x"),
            Err(PdfError::InvalidOutput(_))
        ));
    }

    #[test]
    fn test_file_sink_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("invoice.pdf");
        let sink = FileSink::new(&target);

        let path = sink.write_document(b"abc").unwrap();
        assert_eq!(path, target);
        assert_eq!(fs::read(&target).unwrap(), b"abc");
    }

    #[test]
    fn test_file_sink_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path());
        assert!(matches!(
            sink.write_document(b"abc"),
            Err(PdfError::InvalidOutput(_))
        ));
    }
}
