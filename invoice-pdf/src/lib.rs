//! # invoice-pdf
//!
//! PDF document layer on top of `lopdf` - low-level document capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to produce a document:
//! - Page/text/rule command building on fixed-size pages
//! - WinAnsi encoding for the standard Helvetica fonts
//! - Text measurement for right alignment and truncation
//! - Writing finished documents to temporary or fixed files
//!
//! Business logic (WHAT to print) stays in application code:
//! - Invoice layout → storefront
//!
//! ## Example
//!
//! ```no_run
//! use invoice_pdf::{DocumentSink, Font, PageSize, PdfBuilder, TempFileSink};
//!
//! let mut builder = PdfBuilder::new(PageSize::LETTER_LANDSCAPE);
//! builder.font(Font::HelveticaBold, 18.0);
//! builder.text(36.0, 570.0, "INVOICE");
//! builder.regular();
//! builder.text_right(756.0, 570.0, "1,234.50");
//! builder.hrule(36.0, 756.0, 560.0);
//!
//! let path = TempFileSink::new().write_document(&builder.build()?)?;
//! # Ok::<(), invoice_pdf::PdfError>(())
//! ```

mod encoding;
mod error;
mod pdf;
mod sink;

// Re-exports
pub use encoding::{text_width, to_win_ansi, truncate_to_width};
pub use error::{PdfError, PdfResult};
pub use pdf::{Font, PageSize, PdfBuilder};
pub use sink::{DocumentSink, FileSink, TempFileSink};
