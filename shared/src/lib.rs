//! Shared types for the cabinet storefront
//!
//! Catalog, cart and delivery models plus the unified error system used by
//! the storefront crate and its command-line front end.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CartLine, CatalogItem, CatalogRow, DeliveryZone, OrderTotals};
pub use serde::{Deserialize, Serialize};
