// Inventory port: read-only access to remote stock levels and catalog records.
//
// Boundaries
// - Only two reads: `stock/{id}` and `products/{id}`.
// - No retry, no caching. A failed call is reported as is.

use crate::modules::cart::core::product::{CatalogProduct, ProductId, Stock};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("inventory unavailable: {0}")]
    Unavailable(String),

    #[error("inventory responded with status {status} for {path}")]
    Status { status: u16, path: String },

    #[error("malformed inventory response for {path}: {reason}")]
    Malformed { path: String, reason: String },
}

#[async_trait]
pub trait Inventory: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, InventoryError>;

    /// `Ok(None)` when the catalog has no record for `product_id`.
    async fn product(&self, product_id: ProductId)
    -> Result<Option<CatalogProduct>, InventoryError>;
}

pub fn stock_path(product_id: ProductId) -> String {
    format!("stock/{product_id}")
}

pub fn product_path(product_id: ProductId) -> String {
    format!("products/{product_id}")
}

pub mod http;
pub mod in_memory;
