// Cart is the canonical value held by the store and written to storage.
//
// Invariants
// - At most one entry per product id.
// - Every entry has an amount greater than zero.
// - Entries keep insertion order.
//
// Every transition returns a new Cart. Nothing mutates a Cart in place, so a
// snapshot taken by an in-flight operation is never observed half updated.

use crate::modules::cart::core::product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::num::NonZeroU32;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartInvariantError {
    #[error("product {0} appears more than once")]
    DuplicateProduct(ProductId),

    #[error("product {0} has an amount of zero")]
    EmptyAmount(ProductId),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn total_units(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.amount)).sum()
    }

    /// Sum of price times amount. Entries without a numeric price count as zero.
    pub fn total(&self) -> f64 {
        self.products.iter().filter_map(Product::subtotal).sum()
    }

    /// Returns a copy where `product_id` holds exactly `amount`, or `None` when
    /// the product is not in the cart.
    pub fn with_amount(&self, product_id: ProductId, amount: NonZeroU32) -> Option<Cart> {
        self.contains(product_id).then(|| Cart {
            products: self
                .products
                .iter()
                .map(|p| {
                    if p.id == product_id {
                        Product {
                            amount: amount.get(),
                            ..p.clone()
                        }
                    } else {
                        p.clone()
                    }
                })
                .collect(),
        })
    }

    /// Returns a copy without `product_id`, or `None` when it is not in the cart.
    pub fn without(&self, product_id: ProductId) -> Option<Cart> {
        self.contains(product_id).then(|| Cart {
            products: self
                .products
                .iter()
                .filter(|p| p.id != product_id)
                .cloned()
                .collect(),
        })
    }

    /// Appends `product` at the end. Callers must have checked that the id is
    /// not in the cart and that the amount is positive.
    pub(crate) fn appended(&self, product: Product) -> Cart {
        debug_assert!(!self.contains(product.id) && product.amount > 0);
        let mut products = self.products.clone();
        products.push(product);
        Cart { products }
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = CartInvariantError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.amount == 0 {
                return Err(CartInvariantError::EmptyAmount(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CartInvariantError::DuplicateProduct(product.id));
            }
        }
        Ok(Cart { products })
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.products
    }
}
