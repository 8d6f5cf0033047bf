// Catalog and cart entry data types.
//
// Boundaries
// - Catalog attributes (title, price, image, ...) are opaque to the cart and
//   travel untouched in `details`.
// - This file must not perform input or output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ProductId = u64;

/// A cart entry: the catalog record plus the selected quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub amount: u32,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Product {
    /// Unit price, when the catalog record carries a numeric `price`.
    pub fn price(&self) -> Option<f64> {
        self.details.get("price").and_then(Value::as_f64)
    }

    pub fn subtotal(&self) -> Option<f64> {
        self.price().map(|price| price * f64::from(self.amount))
    }
}

/// Product record as served by the catalog (`products/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl CatalogProduct {
    /// Turns the record into a fresh cart entry holding a single unit. Any
    /// `amount` the catalog sent is dropped.
    pub fn into_cart_entry(mut self) -> Product {
        self.details.remove("amount");
        Product {
            id: self.id,
            amount: 1,
            details: self.details,
        }
    }
}

/// Units available for a product (`stock/{id}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub amount: u32,
}
