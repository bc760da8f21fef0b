//! Order request files
//!
//! ```json
//! { "delivery_zone": "Pick Up", "items": [{ "type": "Base Cabinet", "item": "B12", "qty": 2 }] }
//! ```

use super::CartSession;
use crate::catalog::Catalog;
use crate::money::validate_quantity;
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CatalogItem, DeliveryZone};
use std::path::Path;
use tracing::instrument;

#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub delivery_zone: DeliveryZone,
    #[serde(default)]
    pub items: Vec<OrderRequestItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequestItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub item: String,
    pub qty: i64,
}

impl OrderRequest {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::with_message(ErrorCode::InvalidFormat, format!("invalid order JSON: {}", e))
        })
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_message(
                ErrorCode::IoError,
                format!("failed to read order {}: {}", path.display(), e),
            )
        })?;
        Self::from_json_str(&json)
    }

    /// Resolve every item against the catalog, then fill the session
    ///
    /// Resolution runs to completion before the first line is added: a
    /// request with any unknown item or bad quantity adds nothing.
    pub fn apply(&self, catalog: &Catalog, session: &mut CartSession) -> AppResult<()> {
        let mut resolved: Vec<(&CatalogItem, i64)> = Vec::with_capacity(self.items.len());
        for (index, entry) in self.items.iter().enumerate() {
            validate_quantity(entry.qty).map_err(|e| e.with_detail("line", index))?;
            let item = catalog
                .find(&entry.item_type, &entry.item)
                .map_err(|e| e.with_detail("line", index))?;
            resolved.push((item, entry.qty));
        }

        session.set_delivery_zone(self.delivery_zone);
        for (item, qty) in resolved {
            session.add_catalog_item(item, qty)?;
        }
        Ok(())
    }
}
