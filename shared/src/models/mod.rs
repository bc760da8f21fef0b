//! Data models
//!
//! Shared between the storefront library, its CLI and the invoice renderer.

pub mod cart;
pub mod catalog;
pub mod delivery_zone;

// Re-exports
pub use cart::*;
pub use catalog::*;
pub use delivery_zone::*;
