//! Cart
//!
//! # Module structure
//!
//! - [`CartSession`] - per-customer cart with markup and delivery selection
//! - [`totals`] - order totals derived from the lines
//! - [`OrderRequest`] - JSON order files applied against a catalog
//! - [`render_summary`] - text quote for the terminal

mod request;
mod session;
mod summary;
pub mod totals;

pub use request::{OrderRequest, OrderRequestItem};
pub use session::CartSession;
pub use summary::render_summary;
pub use totals::{OrderCharges, calculate_totals};
