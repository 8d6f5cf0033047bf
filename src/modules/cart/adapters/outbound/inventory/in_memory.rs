// In memory implementation of the Inventory port.
//
// Purpose
// - Drive the cart store in tests and local development without a catalog server.
//
// Responsibilities
// - Answer stock and catalog reads from maps keyed by product id.
// - Answer unknown stock ids the way the catalog server does (status 404).
// - Count stock reads so tests can assert that no remote call happened.

use crate::modules::cart::adapters::outbound::inventory::{Inventory, InventoryError, stock_path};
use crate::modules::cart::core::product::{CatalogProduct, ProductId, Stock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryInventory {
    stock: RwLock<HashMap<ProductId, u32>>,
    catalog: RwLock<HashMap<ProductId, CatalogProduct>>,
    stock_reads: AtomicUsize,
    is_offline: AtomicBool,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: CatalogProduct, in_stock: u32) -> Self {
        self.stock.get_mut().insert(product.id, in_stock);
        self.catalog.get_mut().insert(product.id, product);
        self
    }

    /// Stock without a catalog record, as happens when the catalog drops a product.
    pub fn with_stock(mut self, product_id: ProductId, in_stock: u32) -> Self {
        self.stock.get_mut().insert(product_id, in_stock);
        self
    }

    pub async fn set_stock(&self, product_id: ProductId, in_stock: u32) {
        self.stock.write().await.insert(product_id, in_stock);
    }

    pub fn stock_reads(&self) -> usize {
        self.stock_reads.load(Ordering::SeqCst)
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), InventoryError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(InventoryError::Unavailable("Inventory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Inventory for InMemoryInventory {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, InventoryError> {
        self.stock_reads.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;
        self.stock
            .read()
            .await
            .get(&product_id)
            .map(|&amount| Stock { amount })
            .ok_or_else(|| InventoryError::Status {
                status: 404,
                path: stock_path(product_id),
            })
    }

    async fn product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<CatalogProduct>, InventoryError> {
        self.ensure_online()?;
        Ok(self.catalog.read().await.get(&product_id).cloned())
    }
}
