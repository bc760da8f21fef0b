//! Plain-text quote summary (terminal output)

use crate::money::{format_fee, format_money, format_rate};
use shared::models::{CartLine, OrderTotals};

const ITEM_WIDTH: usize = 20;
const TYPE_WIDTH: usize = 16;
const MONEY_WIDTH: usize = 12;
const QTY_WIDTH: usize = 5;
/// Money columns per line row
const MONEY_COLUMNS: usize = 5;

/// Render the cart lines and totals as an aligned text table
///
/// Each line shows its retail, base and final unit prices next to the
/// savings against retail, then quantity and line total.
pub fn render_summary(lines: &[CartLine], totals: &OrderTotals) -> String {
    let mut out = String::new();
    let width = TYPE_WIDTH + ITEM_WIDTH + MONEY_WIDTH * MONEY_COLUMNS + QTY_WIDTH + 7;
    let rule = "-".repeat(width);

    out.push_str(&row(
        "Type", "Item", "Retail", "Base", "You Save", "Final", "Qty", "Total",
    ));
    out.push_str(&rule);
    out.push('\n');

    for line in lines {
        out.push_str(&row(
            &clip(&line.item_type, TYPE_WIDTH),
            &clip(&line.name, ITEM_WIDTH),
            &format_money(line.retail_price),
            &format_money(line.base_price),
            &format_money(line.savings),
            &format_money(line.final_price),
            &line.quantity.to_string(),
            &format_money(line.line_total),
        ));
    }
    out.push_str(&rule);
    out.push('\n');

    let tax_label = format!("Tax ({})", format_rate(totals.tax_rate));
    let delivery_label = format!("Delivery ({})", totals.delivery_zone);
    let rows = [
        ("Retail Total", format_money(totals.total_retail)),
        ("You Save", format_money(totals.total_savings)),
        ("Subtotal", format_money(totals.subtotal)),
        (tax_label.as_str(), format_money(totals.tax)),
        (
            "Shipping",
            format_fee(totals.shipping_fee, totals.is_shipping_free()),
        ),
        (
            delivery_label.as_str(),
            format_fee(totals.delivery_fee, totals.is_delivery_free()),
        ),
        ("Grand Total", format_money(totals.grand_total)),
    ];
    let label_width = width - MONEY_WIDTH - 1;
    for (label, value) in rows {
        out.push_str(&format!(
            "{:>lw$} {:>mw$}\n",
            label,
            value,
            lw = label_width,
            mw = MONEY_WIDTH
        ));
    }

    out
}

#[allow(clippy::too_many_arguments)]
fn row(
    item_type: &str,
    item: &str,
    retail: &str,
    base: &str,
    savings: &str,
    final_price: &str,
    qty: &str,
    total: &str,
) -> String {
    format!(
        "{:<tw$} {:<iw$} {:>mw$} {:>mw$} {:>mw$} {:>mw$} {:>qw$} {:>mw$}\n",
        item_type,
        item,
        retail,
        base,
        savings,
        final_price,
        qty,
        total,
        tw = TYPE_WIDTH,
        iw = ITEM_WIDTH,
        mw = MONEY_WIDTH,
        qw = QTY_WIDTH,
    )
}

/// Clip to a column width on char boundaries
fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut clipped: String = s.chars().take(width.saturating_sub(3)).collect();
        clipped.push_str("...");
        clipped
    }
}
