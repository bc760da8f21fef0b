//! Invoice renderer
//!
//! Lays cart lines and order totals out on landscape pages. Rows advance by a
//! fixed increment; a row that would cross the low-water mark starts a new
//! page, and every page carries the column header and a page footer.

use super::types::{InvoiceHeader, RenderedInvoice};
use crate::money::{format_fee, format_money, format_rate};
use invoice_pdf::{Font, PageSize, PdfBuilder, PdfResult, truncate_to_width};
use shared::models::{CartLine, OrderTotals};

const MARGIN: f32 = 36.0;
const ROW_HEIGHT: f32 = 18.0;
/// Lowest baseline a row may use
const LOW_WATER: f32 = 60.0;
const FOOTER_Y: f32 = 24.0;

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 10.0;
const ROW_SIZE: f32 = 9.0;

/// Retail Total .. Grand Total
const TOTALS_ROWS: usize = 7;

/// Column positions for one page width
///
/// Text columns are left aligned at `*_x`; numeric columns are right aligned
/// at `*_r`, measured back from the right margin.
#[derive(Debug, Clone, Copy)]
struct Columns {
    type_x: f32,
    type_w: f32,
    item_x: f32,
    item_w: f32,
    retail_r: f32,
    unit_r: f32,
    final_r: f32,
    qty_r: f32,
    total_r: f32,
}

impl Columns {
    fn for_width(width: f32) -> Self {
        let right = width - MARGIN;
        let retail_r = right - 300.0;
        let item_x = MARGIN + 150.0;
        Self {
            type_x: MARGIN,
            type_w: 140.0,
            item_x,
            item_w: retail_r - 80.0 - item_x - 10.0,
            retail_r,
            unit_r: right - 220.0,
            final_r: right - 140.0,
            qty_r: right - 90.0,
            total_r: right,
        }
    }
}

/// Invoice renderer
pub struct InvoiceRenderer {
    page_size: PageSize,
    columns: Columns,
}

impl InvoiceRenderer {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            columns: Columns::for_width(page_size.width),
        }
    }

    /// Render an invoice to PDF bytes
    pub fn render(
        &self,
        header: &InvoiceHeader,
        lines: &[CartLine],
        totals: &OrderTotals,
    ) -> PdfResult<RenderedInvoice> {
        let mut b = PdfBuilder::new(self.page_size);
        b.title(&format!("Invoice - {}", header.business_name))
            .creation_date(&header.issued_at.format("D:%Y%m%d%H%M%S").to_string());

        let mut page = 1;
        let mut y = self.render_header(&mut b, header);
        y = self.render_column_header(&mut b, y);

        for line in lines {
            if y < LOW_WATER {
                y = self.break_page(&mut b, &mut page);
            }
            self.render_line(&mut b, y, line);
            y -= ROW_HEIGHT;
        }

        // Keep the totals block on one page
        let needed = ROW_HEIGHT * (TOTALS_ROWS as f32 - 1.0);
        if y - needed < LOW_WATER {
            y = self.break_page(&mut b, &mut page);
        }
        self.render_totals(&mut b, y, totals);
        self.render_footer(&mut b, page);

        let pages = b.page_count();
        Ok(RenderedInvoice {
            bytes: b.build()?,
            pages,
        })
    }

    /// Close the current page and open the next one; returns the first row baseline
    fn break_page(&self, b: &mut PdfBuilder, page: &mut usize) -> f32 {
        self.render_footer(b, *page);
        *page += 1;
        b.new_page();
        let top = self.page_size.height - MARGIN - ROW_SIZE;
        self.render_column_header(b, top)
    }

    /// Business name, contact and timestamp; returns the next baseline
    fn render_header(&self, b: &mut PdfBuilder, header: &InvoiceHeader) -> f32 {
        let right = self.page_size.width - MARGIN;
        let mut y = self.page_size.height - MARGIN - TITLE_SIZE;

        b.font(Font::HelveticaBold, TITLE_SIZE);
        b.text(MARGIN, y, &header.business_name);
        b.text_right(right, y, "INVOICE");

        y -= TITLE_SIZE;
        b.font(Font::Helvetica, BODY_SIZE);
        b.text(MARGIN, y, &header.contact_email);
        b.text_right(
            right,
            y,
            &format!("Date: {}", header.issued_at.format("%Y-%m-%d %H:%M")),
        );

        y -= 10.0;
        b.line(MARGIN, y, right, y, 1.0);

        y - ROW_HEIGHT - 4.0
    }

    /// Column titles at baseline `y`; returns the first row baseline
    fn render_column_header(&self, b: &mut PdfBuilder, y: f32) -> f32 {
        let c = &self.columns;
        b.font(Font::HelveticaBold, ROW_SIZE);
        b.text(c.type_x, y, "Type");
        b.text(c.item_x, y, "Item");
        b.text_right(c.retail_r, y, "Retail Price");
        b.text_right(c.unit_r, y, "Unit Price");
        b.text_right(c.final_r, y, "Final Price");
        b.text_right(c.qty_r, y, "Qty");
        b.text_right(c.total_r, y, "Line Total");
        b.hrule(MARGIN, c.total_r, y - 5.0);
        b.regular();

        y - ROW_HEIGHT
    }

    fn render_line(&self, b: &mut PdfBuilder, y: f32, line: &CartLine) {
        let c = &self.columns;
        b.font(Font::Helvetica, ROW_SIZE);
        b.text(
            c.type_x,
            y,
            &truncate_to_width(&line.item_type, c.type_w, ROW_SIZE),
        );
        b.text(c.item_x, y, &truncate_to_width(&line.name, c.item_w, ROW_SIZE));
        b.text_right(c.retail_r, y, &format_money(line.retail_price));
        b.text_right(c.unit_r, y, &format_money(line.base_price));
        b.text_right(c.final_r, y, &format_money(line.final_price));
        b.text_right(c.qty_r, y, &line.quantity.to_string());
        b.text_right(c.total_r, y, &format_money(line.line_total));
    }

    /// Summary rows under the last line, labels right aligned at the Qty column
    fn render_totals(&self, b: &mut PdfBuilder, y: f32, totals: &OrderTotals) {
        let c = &self.columns;
        let label_r = c.qty_r;
        b.hrule(c.unit_r - 60.0, c.total_r, y + ROW_HEIGHT - 5.0);

        let rows = [
            ("Retail Total".to_string(), format_money(totals.total_retail)),
            ("You Save".to_string(), format_money(totals.total_savings)),
            ("Subtotal".to_string(), format_money(totals.subtotal)),
            (
                format!("Tax ({})", format_rate(totals.tax_rate)),
                format_money(totals.tax),
            ),
            (
                "Shipping".to_string(),
                format_fee(totals.shipping_fee, totals.is_shipping_free()),
            ),
            (
                format!("Delivery ({})", totals.delivery_zone),
                format_fee(totals.delivery_fee, totals.is_delivery_free()),
            ),
        ];

        let mut y = y;
        b.font(Font::Helvetica, BODY_SIZE);
        for (label, value) in &rows {
            b.text_right(label_r, y, label);
            b.text_right(c.total_r, y, value);
            y -= ROW_HEIGHT;
        }

        b.hrule(c.unit_r - 60.0, c.total_r, y + ROW_HEIGHT - 5.0);
        b.bold();
        b.text_right(label_r, y, "Grand Total");
        b.text_right(c.total_r, y, &format_money(totals.grand_total));
        b.regular();
    }

    fn render_footer(&self, b: &mut PdfBuilder, page: usize) {
        b.font(Font::Helvetica, 8.0);
        b.text_center(self.page_size.width / 2.0, FOOTER_Y, &format!("Page {}", page));
    }
}
