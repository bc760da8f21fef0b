//! Error types

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the storefront, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Category of the underlying code
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Conditions the user should be warned about rather than treated as failures
    pub fn is_warning(&self) -> bool {
        matches!(self.code, ErrorCode::EmptyCart)
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid quantity error
    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::with_message(
            ErrorCode::InvalidQuantity,
            format!("quantity must be at least 1, got {}", quantity),
        )
        .with_detail("quantity", quantity)
    }

    /// Create an invalid price error for the named field
    pub fn invalid_price(field: &str, value: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::InvalidPrice,
            format!("{} must be non-negative, got {}", field, value),
        )
        .with_detail("field", field)
    }

    /// Create an empty cart warning
    pub fn empty_cart() -> Self {
        Self::new(ErrorCode::EmptyCart)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
