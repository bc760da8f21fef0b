//! Cart Model
//!
//! Plain data produced by the storefront pricing code. All money fields are
//! already rounded to two decimal places when a value of these types exists.

use super::delivery_zone::DeliveryZone;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Display type of the cabinet
    pub item_type: String,
    pub name: String,
    /// Always >= 1
    pub quantity: u32,
    /// Retail (original) unit price
    pub retail_price: Decimal,
    /// Discounted unit price before markup
    pub base_price: Decimal,
    /// Markup percent active when the line was added
    pub markup_percent: Decimal,
    /// base_price * (1 + markup_percent / 100)
    pub final_price: Decimal,
    /// final_price * quantity
    pub line_total: Decimal,
    /// retail_price - base_price * quantity (may be negative)
    pub savings: Decimal,
}

/// Order totals derived from the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of line totals
    pub subtotal: Decimal,
    /// Rate the tax was computed with (0.065 = 6.5%)
    pub tax_rate: Decimal,
    pub tax: Decimal,
    pub shipping_fee: Decimal,
    pub delivery_zone: DeliveryZone,
    pub delivery_fee: Decimal,
    pub grand_total: Decimal,
    /// Sum of retail_price * quantity
    pub total_retail: Decimal,
    /// total_retail - subtotal
    pub total_savings: Decimal,
}

impl OrderTotals {
    pub fn is_shipping_free(&self) -> bool {
        self.shipping_fee.is_zero()
    }

    pub fn is_delivery_free(&self) -> bool {
        self.delivery_zone.is_pick_up() || self.delivery_fee.is_zero()
    }
}
