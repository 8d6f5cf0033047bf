// HTTP implementation of the Inventory port against the storefront catalog API.
//
// Wire format
// - GET {base}/stock/{id}    -> { "amount": n }
// - GET {base}/products/{id} -> product record, or 404 / null / {} when unknown

use crate::modules::cart::adapters::outbound::inventory::{
    Inventory, InventoryError, product_path, stock_path,
};
use crate::modules::cart::core::product::{CatalogProduct, ProductId, Stock};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: Client,
    base_url: String,
}

impl HttpInventory {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, InventoryError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InventoryError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Body of a successful response, `None` on 404.
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, InventoryError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "inventory request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                InventoryError::Unavailable(format!("cannot connect to {}", self.base_url))
            } else {
                InventoryError::Unavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(InventoryError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| InventoryError::Unavailable(e.to_string()))?;
        Ok(Some(body.to_vec()))
    }
}

fn malformed(path: &str, err: serde_json::Error) -> InventoryError {
    InventoryError::Malformed {
        path: path.to_string(),
        reason: err.to_string(),
    }
}

#[async_trait]
impl Inventory for HttpInventory {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, InventoryError> {
        let path = stock_path(product_id);
        let Some(body) = self.get(&path).await? else {
            return Err(InventoryError::Status {
                status: StatusCode::NOT_FOUND.as_u16(),
                path,
            });
        };
        serde_json::from_slice(&body).map_err(|e| malformed(&path, e))
    }

    async fn product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<CatalogProduct>, InventoryError> {
        let path = product_path(product_id);
        let Some(body) = self.get(&path).await? else {
            return Ok(None);
        };
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let record: Value = serde_json::from_slice(&body).map_err(|e| malformed(&path, e))?;
        match record {
            Value::Null => Ok(None),
            Value::Object(ref fields) if fields.is_empty() => Ok(None),
            record => serde_json::from_value(record)
                .map(Some)
                .map_err(|e| malformed(&path, e)),
        }
    }
}
