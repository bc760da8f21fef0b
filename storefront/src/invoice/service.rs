//! Invoice service - turns a cart session into a downloadable document

use super::renderer::InvoiceRenderer;
use super::types::{InvoiceDocument, InvoiceHeader};
use crate::cart::CartSession;
use crate::core::Config;
use chrono::{Local, NaiveDateTime};
use invoice_pdf::{DocumentSink, PageSize, PdfError, TempFileSink};
use shared::error::{AppError, AppResult, ErrorCode};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("Document error: {0}")]
    Document(#[from] PdfError),
}

impl From<InvoiceError> for AppError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::Document(PdfError::InvalidLayout(msg) | PdfError::Document(msg)) => {
                AppError::with_message(ErrorCode::InvoiceRenderFailed, msg)
            }
            InvoiceError::Document(e @ (PdfError::Io(_) | PdfError::InvalidOutput(_))) => {
                AppError::with_message(ErrorCode::InvoiceWriteFailed, e.to_string())
            }
        }
    }
}

/// Invoice service
///
/// Responsibilities:
/// - Refuse empty carts before anything is written
/// - Render lines and totals with the configured business header
/// - Hand the finished file over through a [`DocumentSink`]
pub struct InvoiceService<S: DocumentSink = TempFileSink> {
    renderer: InvoiceRenderer,
    sink: S,
    business_name: String,
    contact_email: String,
}

impl InvoiceService<TempFileSink> {
    /// Service writing temp files to the configured invoice directory
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let sink = match &config.invoice_dir {
            Some(dir) => TempFileSink::in_dir(dir),
            None => TempFileSink::new(),
        };
        Ok(Self::new(
            config.page_size()?,
            sink,
            &config.business_name,
            &config.contact_email,
        ))
    }
}

impl<S: DocumentSink> InvoiceService<S> {
    pub fn new(page_size: PageSize, sink: S, business_name: &str, contact_email: &str) -> Self {
        Self {
            renderer: InvoiceRenderer::new(page_size),
            sink,
            business_name: business_name.to_string(),
            contact_email: contact_email.to_string(),
        }
    }

    /// Generate an invoice for the current cart, stamped with the local time
    pub fn generate(&self, session: &CartSession) -> AppResult<InvoiceDocument> {
        self.generate_at(session, Local::now().naive_local())
    }

    /// Generate an invoice with an explicit issue time
    ///
    /// An empty cart yields an `EmptyCart` warning and writes nothing.
    #[instrument(skip(self, session), fields(lines = session.len()))]
    pub fn generate_at(
        &self,
        session: &CartSession,
        issued_at: NaiveDateTime,
    ) -> AppResult<InvoiceDocument> {
        if session.is_empty() {
            warn!("Invoice requested for an empty cart");
            return Err(AppError::empty_cart());
        }

        let header = InvoiceHeader {
            business_name: self.business_name.clone(),
            contact_email: self.contact_email.clone(),
            issued_at,
        };
        let totals = session.totals();
        let rendered = self
            .renderer
            .render(&header, session.lines(), &totals)
            .map_err(InvoiceError::from)?;

        let path = self
            .sink
            .write_document(&rendered.bytes)
            .map_err(InvoiceError::from)?;

        info!(
            path = %path.display(),
            pages = rendered.pages,
            grand_total = %totals.grand_total,
            "Invoice generated"
        );
        Ok(InvoiceDocument::new(path, rendered.pages))
    }
}
