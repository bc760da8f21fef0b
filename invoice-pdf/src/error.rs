//! Error types for the PDF library

use thiserror::Error;

/// PDF error types
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error while writing the document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid page or layout configuration
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Document could not be assembled or serialized
    #[error("Document error: {0}")]
    Document(String),

    /// Output location could not be used
    #[error("Invalid output: {0}")]
    InvalidOutput(String),
}

/// Result type for PDF operations
pub type PdfResult<T> = Result<T, PdfError>;
