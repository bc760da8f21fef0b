//! Cart session
//!
//! Explicit per-customer context. Everything that influences pricing (markup,
//! delivery zone, shipping fee, tax rate) lives on the session and is passed
//! on to the totals, never read from ambient state.

use super::totals::{OrderCharges, calculate_totals};
use crate::core::Config;
use crate::money::{
    calculate_final_price, calculate_line_total, calculate_savings, default_tax_rate,
    validate_markup, validate_price, validate_quantity,
};
use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{CartLine, CatalogItem, DeliveryZone, OrderTotals};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CartSession {
    lines: Vec<CartLine>,
    markup_percent: Decimal,
    delivery_zone: DeliveryZone,
    shipping_fee: Decimal,
    tax_rate: Decimal,
}

impl CartSession {
    /// Empty cart with no markup, Pick Up delivery and the default tax rate
    pub fn new(shipping_fee: Decimal) -> Self {
        Self {
            lines: Vec::new(),
            markup_percent: Decimal::ZERO,
            delivery_zone: DeliveryZone::PickUp,
            shipping_fee,
            tax_rate: default_tax_rate(),
        }
    }

    /// Empty cart using the configured shipping fee and tax rate
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.shipping_fee).with_tax_rate(config.tax_rate)
    }

    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Set the markup for lines added from now on
    ///
    /// Existing lines keep the markup they were priced with.
    pub fn set_markup(&mut self, markup_percent: Decimal) -> AppResult<()> {
        validate_markup(markup_percent)?;
        debug!(markup = %markup_percent, "Markup set");
        self.markup_percent = markup_percent;
        Ok(())
    }

    pub fn set_delivery_zone(&mut self, zone: DeliveryZone) {
        debug!(zone = %zone, fee = %zone.fee(), "Delivery zone set");
        self.delivery_zone = zone;
    }

    /// Price and append a line
    ///
    /// All inputs are validated before the cart is touched, so a rejected
    /// item leaves the session unchanged.
    pub fn add_item(
        &mut self,
        name: &str,
        item_type: &str,
        quantity: i64,
        base_price: Decimal,
        retail_price: Decimal,
    ) -> AppResult<&CartLine> {
        let quantity = validate_quantity(quantity)?;
        validate_price("base_price", base_price)?;
        validate_price("retail_price", retail_price)?;

        let final_price = calculate_final_price(base_price, self.markup_percent);
        let line = CartLine {
            item_type: item_type.trim().to_string(),
            name: name.trim().to_string(),
            quantity,
            retail_price,
            base_price,
            markup_percent: self.markup_percent,
            final_price,
            line_total: calculate_line_total(final_price, quantity),
            savings: calculate_savings(retail_price, base_price, quantity),
        };

        info!(
            item = %line.name,
            item_type = %line.item_type,
            quantity,
            line_total = %line.line_total,
            "Item added to cart"
        );

        self.lines.push(line);
        let index = self.lines.len() - 1;
        Ok(&self.lines[index])
    }

    /// Add a catalog item at its discounted price
    pub fn add_catalog_item(&mut self, item: &CatalogItem, quantity: i64) -> AppResult<&CartLine> {
        self.add_item(
            &item.name,
            &item.type_label,
            quantity,
            item.discounted_price,
            item.retail_price,
        )
    }

    pub fn clear(&mut self) {
        info!(removed = self.lines.len(), "Cart cleared");
        self.lines.clear();
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn totals(&self) -> OrderTotals {
        calculate_totals(
            &self.lines,
            OrderCharges {
                shipping_fee: self.shipping_fee,
                delivery_zone: self.delivery_zone,
                tax_rate: self.tax_rate,
            },
        )
    }

    pub fn markup_percent(&self) -> Decimal {
        self.markup_percent
    }

    pub fn delivery_zone(&self) -> DeliveryZone {
        self.delivery_zone
    }

    pub fn shipping_fee(&self) -> Decimal {
        self.shipping_fee
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
