//! Invoice types

use chrono::NaiveDateTime;
use std::path::PathBuf;

/// File name offered for download
pub const INVOICE_FILE_NAME: &str = "invoice.pdf";

/// MIME type of the generated document
pub const INVOICE_MIME: &str = "application/pdf";

/// Header block printed at the top of the first page
#[derive(Debug, Clone)]
pub struct InvoiceHeader {
    pub business_name: String,
    pub contact_email: String,
    pub issued_at: NaiveDateTime,
}

/// Rendered document bytes
#[derive(Debug, Clone)]
pub struct RenderedInvoice {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Finished invoice handed over for one-shot consumption
///
/// The file at `path` is complete when this value exists. Removing it is up
/// to whoever consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub pages: usize,
}

impl InvoiceDocument {
    pub fn new(path: PathBuf, pages: usize) -> Self {
        Self {
            path,
            file_name: INVOICE_FILE_NAME.to_string(),
            mime: INVOICE_MIME.to_string(),
            pages,
        }
    }
}
