//! Catalog Model

use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw catalog row as exported from the price sheet
///
/// Column names follow the sheet headers. Rows are untrusted until they pass
/// through [`CatalogItem::from_row`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "TYPE")]
    pub item_type: String,
    #[serde(rename = "ITEM")]
    pub name: String,
    #[serde(rename = "ORIGINAL PRICE")]
    pub retail_price: Decimal,
    #[serde(rename = "PRICE WITH DISCOUNT")]
    pub discounted_price: Decimal,
}

/// Validated catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Normalized type key (trimmed, lowercase)
    pub item_type: String,
    /// Type as written in the sheet (trimmed), used for display
    pub type_label: String,
    pub name: String,
    pub discounted_price: Decimal,
    pub retail_price: Decimal,
}

impl CatalogItem {
    /// Validate a raw row and normalize its type
    pub fn from_row(row: CatalogRow) -> AppResult<Self> {
        let type_label = row.item_type.trim().to_string();
        if type_label.is_empty() {
            return Err(invalid_row(&row.name, "TYPE is empty"));
        }

        let name = row.name.trim().to_string();
        if name.is_empty() {
            return Err(invalid_row(&type_label, "ITEM is empty"));
        }

        if row.retail_price < Decimal::ZERO {
            return Err(invalid_row(&name, "ORIGINAL PRICE is negative"));
        }
        if row.discounted_price < Decimal::ZERO {
            return Err(invalid_row(&name, "PRICE WITH DISCOUNT is negative"));
        }

        Ok(Self {
            item_type: normalize_type(&type_label),
            type_label,
            name,
            discounted_price: row.discounted_price,
            retail_price: row.retail_price,
        })
    }
}

/// Normalize a type string the way the catalog keys it (trim + lowercase)
pub fn normalize_type(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn invalid_row(context: &str, reason: &str) -> AppError {
    AppError::with_message(
        ErrorCode::CatalogRowInvalid,
        format!("invalid catalog row ({}): {}", context, reason),
    )
    .with_detail("reason", reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(item_type: &str, name: &str, retail: i64, discounted: i64) -> CatalogRow {
        CatalogRow {
            item_type: item_type.to_string(),
            name: name.to_string(),
            retail_price: Decimal::from(retail),
            discounted_price: Decimal::from(discounted),
        }
    }

    #[test]
    fn test_from_row_normalizes_type() {
        let item = CatalogItem::from_row(row("  Base Cabinets ", " B12 ", 250, 100)).unwrap();
        assert_eq!(item.item_type, "base cabinets");
        assert_eq!(item.type_label, "Base Cabinets");
        assert_eq!(item.name, "B12");
        assert_eq!(item.retail_price, Decimal::from(250));
        assert_eq!(item.discounted_price, Decimal::from(100));
    }

    #[test]
    fn test_from_row_rejects_blank_fields() {
        let err = CatalogItem::from_row(row("   ", "B12", 250, 100)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogRowInvalid);

        let err = CatalogItem::from_row(row("Base", "", 250, 100)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogRowInvalid);
    }

    #[test]
    fn test_from_row_rejects_negative_prices() {
        let err = CatalogItem::from_row(row("Base", "B12", -1, 100)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogRowInvalid);

        let err = CatalogItem::from_row(row("Base", "B12", 250, -5)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogRowInvalid);
    }

    #[test]
    fn test_row_deserializes_sheet_headers() {
        let json = r#"{"TYPE":"Wall","ITEM":"W3030","ORIGINAL PRICE":320.5,"PRICE WITH DISCOUNT":128.25}"#;
        let row: CatalogRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.item_type, "Wall");
        assert_eq!(row.name, "W3030");
        assert_eq!(row.retail_price, Decimal::new(3205, 1));
        assert_eq!(row.discounted_price, Decimal::new(12825, 2));
    }
}
