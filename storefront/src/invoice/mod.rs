//! Invoice generation
//!
//! - [`InvoiceRenderer`] - paginated PDF layout of lines and totals
//! - [`InvoiceService`] - empty-cart check, rendering and file hand-over

mod renderer;
mod service;
mod types;

pub use renderer::InvoiceRenderer;
pub use service::{InvoiceError, InvoiceService};
pub use types::{
    INVOICE_FILE_NAME, INVOICE_MIME, InvoiceDocument, InvoiceHeader, RenderedInvoice,
};
