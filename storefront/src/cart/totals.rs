//! Order totals
//!
//! Recomputed from the lines on every call; nothing here is cached.

use crate::money::{calculate_tax, round_money};
use rust_decimal::Decimal;
use shared::models::{CartLine, DeliveryZone, OrderTotals};

/// Fees and rates that apply to the whole order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderCharges {
    pub shipping_fee: Decimal,
    pub delivery_zone: DeliveryZone,
    pub tax_rate: Decimal,
}

/// Calculate order totals from already-priced lines
///
/// - subtotal = sum of line totals
/// - tax = round(subtotal * tax_rate)
/// - grand_total = subtotal + tax + shipping + delivery
/// - total_retail = sum of retail_price * quantity
/// - total_savings = total_retail - subtotal
pub fn calculate_totals(lines: &[CartLine], charges: OrderCharges) -> OrderTotals {
    let subtotal: Decimal = lines.iter().map(|l| l.line_total).sum();
    let total_retail: Decimal = lines
        .iter()
        .map(|l| round_money(l.retail_price * Decimal::from(l.quantity)))
        .sum();

    let tax = calculate_tax(subtotal, charges.tax_rate);
    let delivery_fee = charges.delivery_zone.fee();
    let grand_total = subtotal + tax + charges.shipping_fee + delivery_fee;

    OrderTotals {
        subtotal,
        tax_rate: charges.tax_rate,
        tax,
        shipping_fee: charges.shipping_fee,
        delivery_zone: charges.delivery_zone,
        delivery_fee,
        grand_total,
        total_retail,
        total_savings: total_retail - subtotal,
    }
}
