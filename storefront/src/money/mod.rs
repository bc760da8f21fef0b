//! Money calculation utilities using rust_decimal for precision
//!
//! Every formula boundary rounds with the same policy: 2 decimal places,
//! half away from zero. Aggregates are sums of already-rounded values, so a
//! subtotal always equals the sum of the line totals printed on the invoice.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use std::str::FromStr;

/// Decimal places kept on every monetary value (midpoints round away from zero)
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i64 = 9999;

/// Maximum allowed unit price or flat fee (1,000,000)
pub const MAX_PRICE: i64 = 1_000_000;

/// Maximum allowed markup percent
///
/// Together with the quantity and price caps this keeps every line product
/// far inside `Decimal`'s range.
pub const MAX_MARKUP: i64 = 1000;

/// Default sales tax rate (6.5%)
pub fn default_tax_rate() -> Decimal {
    Decimal::new(65, 3)
}

/// Round a monetary value with the storefront policy
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate a quantity entered by the user
pub fn validate_quantity(quantity: i64) -> AppResult<u32> {
    if quantity < 1 {
        return Err(AppError::invalid_quantity(quantity));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!(
                "quantity exceeds maximum allowed ({}), got {}",
                MAX_QUANTITY, quantity
            ),
        )
        .with_detail("quantity", quantity));
    }
    // Bounded by MAX_QUANTITY above
    Ok(quantity as u32)
}

/// Validate a unit price: non-negative and within bounds
pub fn validate_price(field: &str, price: Decimal) -> AppResult<()> {
    if price < Decimal::ZERO {
        return Err(AppError::invalid_price(field, price));
    }
    if price > Decimal::from(MAX_PRICE) {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            format!(
                "{} exceeds maximum allowed ({}), got {}",
                field, MAX_PRICE, price
            ),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a markup percent: non-negative and at most [`MAX_MARKUP`]
pub fn validate_markup(markup_percent: Decimal) -> AppResult<()> {
    if markup_percent < Decimal::ZERO {
        return Err(AppError::with_message(
            ErrorCode::InvalidMarkup,
            format!("markup percent must be non-negative, got {}", markup_percent),
        ));
    }
    if markup_percent > Decimal::from(MAX_MARKUP) {
        return Err(AppError::with_message(
            ErrorCode::InvalidMarkup,
            format!(
                "markup percent exceeds maximum allowed ({}), got {}",
                MAX_MARKUP, markup_percent
            ),
        )
        .with_detail("markup_percent", markup_percent.to_string()));
    }
    Ok(())
}

/// Parse an externally supplied markup parameter
///
/// Absent, unparsable, negative or out-of-range input falls back to 0
/// (logged, never an error).
pub fn parse_markup(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Decimal::ZERO;
    };

    let raw = raw.strip_suffix('%').unwrap_or(raw).trim();
    match Decimal::from_str(raw) {
        Ok(value) if value < Decimal::ZERO => {
            tracing::warn!(markup = %value, "negative markup ignored, using 0");
            Decimal::ZERO
        }
        Ok(value) if value > Decimal::from(MAX_MARKUP) => {
            tracing::warn!(markup = %value, max = MAX_MARKUP, "markup above maximum ignored, using 0");
            Decimal::ZERO
        }
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(markup = raw, error = %e, "unparsable markup ignored, using 0");
            Decimal::ZERO
        }
    }
}

/// Calculate the per-unit price charged to the customer
///
/// Formula: base_price * (1 + markup_percent / 100), rounded
pub fn calculate_final_price(base_price: Decimal, markup_percent: Decimal) -> Decimal {
    let multiplier = Decimal::ONE + markup_percent / Decimal::ONE_HUNDRED;
    round_money(base_price * multiplier)
}

/// Calculate a line total from an already-rounded final price
///
/// Formula: final_price * quantity, rounded
pub fn calculate_line_total(final_price: Decimal, quantity: u32) -> Decimal {
    round_money(final_price * Decimal::from(quantity))
}

/// Calculate the savings shown for a line
///
/// Formula: retail_price - base_price * quantity. The retail price is taken
/// per line, not per unit, so the result may be negative for larger
/// quantities.
pub fn calculate_savings(retail_price: Decimal, base_price: Decimal, quantity: u32) -> Decimal {
    round_money(retail_price - base_price * Decimal::from(quantity))
}

/// Calculate tax on a subtotal
pub fn calculate_tax(subtotal: Decimal, tax_rate: Decimal) -> Decimal {
    round_money(subtotal * tax_rate)
}

/// Format an amount with a currency sign and exactly two decimals
///
/// `1234.5` → `$1234.50`, `-5` → `-$5.00`
pub fn format_money(value: Decimal) -> String {
    let rounded = round_money(value);
    if rounded < Decimal::ZERO {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded)
    }
}

/// Format a fee, printing `FREE` when nothing is charged
pub fn format_fee(value: Decimal, free: bool) -> String {
    if free || value.is_zero() {
        "FREE".to_string()
    } else {
        format_money(value)
    }
}

/// Format a rate as a percentage label (`0.065` → `6.5%`)
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
