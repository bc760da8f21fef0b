//! Cabinet Storefront
//!
//! # Overview
//!
//! Browse a catalog of cabinets by type, fill a cart with quantities, price it
//! (markup, tax, shipping, delivery) and produce a PDF invoice.
//!
//! Data flows one way:
//!
//! ```text
//! Catalog -> CartSession -> OrderTotals -> InvoiceRenderer -> InvoiceDocument
//! ```
//!
//! # Module structure
//!
//! ```text
//! storefront/src/
//! ├── core/          # configuration
//! ├── catalog/       # read-only catalog grouped by type
//! ├── cart/          # session, totals, order files, text quote
//! ├── money/         # rounding policy and price formulas
//! ├── invoice/       # PDF layout and document hand-over
//! ├── cli/           # command-line front end
//! └── utils/         # logging
//! ```

pub mod cart;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod invoice;
pub mod money;
pub mod utils;

// Re-export public types
pub use cart::{CartSession, OrderRequest};
pub use catalog::{Catalog, CatalogType};
pub use crate::core::Config;
pub use invoice::{InvoiceDocument, InvoiceService};
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, then initialize logging from the resulting configuration
pub fn setup_environment(log_level_override: Option<&str>) -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    init_logger_with_file(
        Some(log_level_override.unwrap_or(&config.log_level)),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    config
}
