use crate::money::{MAX_PRICE, default_tax_rate};
use invoice_pdf::PageSize;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use std::path::PathBuf;
use std::str::FromStr;

/// Default flat shipping fee
pub const DEFAULT_SHIPPING_FEE: i64 = 400;

/// Storefront configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment (a `.env` file is
/// loaded first by the binary):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BUSINESS_NAME | Cabinet Outlet | name printed on invoices |
/// | CONTACT_EMAIL | orders@cabinet-outlet.example | contact printed on invoices |
/// | SHIPPING_FEE | 400 | flat shipping fee |
/// | TAX_RATE | 0.065 | sales tax rate |
/// | INVOICE_DIR | system temp dir | where invoice files are written |
/// | PAGE_SIZE | letter | invoice page size (letter, a4), always landscape |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | - | daily rolling log files when set |
/// | ENVIRONMENT | development | development, staging, production |
///
/// # Example
///
/// ```ignore
/// SHIPPING_FEE=0 TAX_RATE=0.07 storefront quote --catalog catalog.json --order order.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub business_name: String,
    pub contact_email: String,
    pub shipping_fee: Decimal,
    pub tax_rate: Decimal,
    /// `None` means the system temp directory
    pub invoice_dir: Option<PathBuf>,
    pub page_size: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            business_name: std::env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "Cabinet Outlet".into()),
            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "orders@cabinet-outlet.example".into()),
            shipping_fee: std::env::var("SHIPPING_FEE")
                .ok()
                .and_then(|v| Decimal::from_str(v.trim()).ok())
                .unwrap_or_else(|| Decimal::from(DEFAULT_SHIPPING_FEE)),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|v| Decimal::from_str(v.trim()).ok())
                .unwrap_or_else(default_tax_rate),
            invoice_dir: std::env::var("INVOICE_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            page_size: std::env::var("PAGE_SIZE").unwrap_or_else(|_| "letter".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Check values that cannot be defaulted silently
    pub fn validate(&self) -> AppResult<()> {
        if self.shipping_fee < Decimal::ZERO || self.shipping_fee > Decimal::from(MAX_PRICE) {
            return Err(config_error(format!(
                "SHIPPING_FEE must be in [0, {}], got {}",
                MAX_PRICE, self.shipping_fee
            )));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate >= Decimal::ONE {
            return Err(config_error(format!(
                "TAX_RATE must be in [0, 1), got {}",
                self.tax_rate
            )));
        }
        self.page_size()?;
        Ok(())
    }

    /// Resolved invoice page size
    pub fn page_size(&self) -> AppResult<PageSize> {
        PageSize::from_name(&self.page_size).map_err(|e| config_error(e.to_string()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn config_error(message: String) -> AppError {
    AppError::with_message(ErrorCode::ConfigError, message)
}
