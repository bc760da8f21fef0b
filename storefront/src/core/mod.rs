//! Core module - configuration
//!
//! - [`Config`] - storefront configuration from the environment

pub mod config;

pub use config::{Config, DEFAULT_SHIPPING_FEE};
