//! Catalog Provider
//!
//! Read-only cabinet items grouped by type. Rows are validated once at load
//! time; lookups afterwards never fail on malformed data.
//!
//! Type names are matched on their normalized key (trim + lowercase). The
//! first spelling seen for a key is kept as its display name.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CatalogItem, CatalogRow, normalize_type};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One type of the catalog, as shown to the customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogType {
    /// Normalized key
    pub key: String,
    /// Display name
    pub label: String,
}

/// Immutable item list grouped by type
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    /// Types in first-seen order
    types: Vec<CatalogType>,
}

impl Catalog {
    /// Build a catalog from raw rows, rejecting the whole set on the first bad row
    pub fn from_rows(rows: Vec<CatalogRow>) -> AppResult<Self> {
        if rows.is_empty() {
            return Err(AppError::new(ErrorCode::CatalogEmpty));
        }

        let mut items = Vec::with_capacity(rows.len());
        let mut types: Vec<CatalogType> = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let item = CatalogItem::from_row(row).map_err(|e| e.with_detail("row", index))?;
            if !types.iter().any(|t| t.key == item.item_type) {
                types.push(CatalogType {
                    key: item.item_type.clone(),
                    label: item.type_label.clone(),
                });
            }
            items.push(item);
        }

        debug!(items = items.len(), types = types.len(), "Catalog built");
        Ok(Self { items, types })
    }

    /// Parse a JSON array of rows
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let rows: Vec<CatalogRow> = serde_json::from_str(json).map_err(|e| {
            AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("invalid catalog JSON: {}", e),
            )
        })?;
        Self::from_rows(rows)
    }

    /// Load a JSON catalog file
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_json(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_message(
                ErrorCode::IoError,
                format!("failed to read catalog {}: {}", path.display(), e),
            )
        })?;

        let catalog = Self::from_json_str(&json)?;
        info!(
            items = catalog.len(),
            types = catalog.types.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// All types in first-seen order
    pub fn types(&self) -> &[CatalogType] {
        &self.types
    }

    /// Resolve any spelling of a type name to its catalog entry
    pub fn resolve_type(&self, name: &str) -> AppResult<&CatalogType> {
        let key = normalize_type(name);
        self.types.iter().find(|t| t.key == key).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CatalogTypeNotFound,
                format!("unknown cabinet type: {}", name.trim()),
            )
            .with_detail("type", name.trim())
        })
    }

    /// Items of one type, in catalog order
    pub fn items_of_type(&self, name: &str) -> AppResult<Vec<&CatalogItem>> {
        let key = &self.resolve_type(name)?.key;
        Ok(self.items.iter().filter(|i| &i.item_type == key).collect())
    }

    /// Find an item by type and exact (trimmed) item name
    pub fn find(&self, type_name: &str, item_name: &str) -> AppResult<&CatalogItem> {
        let key = &self.resolve_type(type_name)?.key;
        let item_name = item_name.trim();
        self.items
            .iter()
            .find(|i| &i.item_type == key && i.name == item_name)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::CatalogItemNotFound,
                    format!("item {} not found in type {}", item_name, type_name.trim()),
                )
                .with_detail("type", type_name.trim())
                .with_detail("item", item_name)
            })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
