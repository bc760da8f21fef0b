//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Cart errors
//! - 5xxx: Invoice errors
//! - 6xxx: Catalog errors
//! - 7xxx: Delivery errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize compactly
/// and stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Input file or value could not be parsed
    InvalidFormat = 6,

    // ==================== 4xxx: Cart ====================
    /// Quantity must be at least one
    InvalidQuantity = 4001,
    /// Price must be a non-negative amount
    InvalidPrice = 4002,
    /// Markup percent must be in [0, MAX_MARKUP]
    InvalidMarkup = 4003,
    /// Cart has no lines
    EmptyCart = 4004,

    // ==================== 5xxx: Invoice ====================
    InvoiceRenderFailed = 5001,
    InvoiceWriteFailed = 5002,

    // ==================== 6xxx: Catalog ====================
    CatalogItemNotFound = 6001,
    CatalogTypeNotFound = 6002,
    CatalogRowInvalid = 6003,
    CatalogEmpty = 6004,

    // ==================== 7xxx: Delivery ====================
    UnknownDeliveryZone = 7001,

    // ==================== 9xxx: System ====================
    IoError = 9002,
    ConfigError = 9005,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidFormat => "Invalid format",

            // Cart
            ErrorCode::InvalidQuantity => "Quantity must be at least 1",
            ErrorCode::InvalidPrice => "Price must be a non-negative amount",
            ErrorCode::InvalidMarkup => "Markup percent is out of range",
            ErrorCode::EmptyCart => "Your cart is empty",

            // Invoice
            ErrorCode::InvoiceRenderFailed => "Failed to render invoice",
            ErrorCode::InvoiceWriteFailed => "Failed to write invoice file",

            // Catalog
            ErrorCode::CatalogItemNotFound => "Catalog item not found",
            ErrorCode::CatalogTypeNotFound => "Catalog type not found",
            ErrorCode::CatalogRowInvalid => "Catalog row is invalid",
            ErrorCode::CatalogEmpty => "Catalog has no items",

            // Delivery
            ErrorCode::UnknownDeliveryZone => "Unknown delivery zone",

            // System
            ErrorCode::IoError => "I/O error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            6 => Ok(ErrorCode::InvalidFormat),

            // Cart
            4001 => Ok(ErrorCode::InvalidQuantity),
            4002 => Ok(ErrorCode::InvalidPrice),
            4003 => Ok(ErrorCode::InvalidMarkup),
            4004 => Ok(ErrorCode::EmptyCart),

            // Invoice
            5001 => Ok(ErrorCode::InvoiceRenderFailed),
            5002 => Ok(ErrorCode::InvoiceWriteFailed),

            // Catalog
            6001 => Ok(ErrorCode::CatalogItemNotFound),
            6002 => Ok(ErrorCode::CatalogTypeNotFound),
            6003 => Ok(ErrorCode::CatalogRowInvalid),
            6004 => Ok(ErrorCode::CatalogEmpty),

            // Delivery
            7001 => Ok(ErrorCode::UnknownDeliveryZone),

            // System
            9002 => Ok(ErrorCode::IoError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
