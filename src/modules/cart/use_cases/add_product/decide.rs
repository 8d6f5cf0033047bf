// Pure decision functions for adding one unit of a product to the cart.
//
// Responsibilities
// - Reject when the stock is empty or the cart already holds every available unit.
// - Increment an entry that is already in the cart.
// - Otherwise ask the caller for the catalog record and append it with one unit.
// - Never perform input or output.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::product::{CatalogProduct, ProductId, Stock};
use std::num::NonZeroU32;

#[derive(Debug, PartialEq)]
pub enum AddDecision {
    Increment { cart: Cart },
    Append(PendingAppend),
}

/// A product known to be absent from `cart` and in stock, waiting for its
/// catalog record.
#[derive(Debug, PartialEq)]
pub struct PendingAppend {
    cart: Cart,
    product_id: ProductId,
}

impl PendingAppend {
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Appends the catalog record with one unit. A missing record, or one
    /// describing another product, leaves nothing behind.
    pub fn complete(self, catalog: Option<CatalogProduct>) -> Result<Cart, DecideError> {
        match catalog {
            Some(record) if record.id == self.product_id => {
                Ok(self.cart.appended(record.into_cart_entry()))
            }
            _ => Err(DecideError::ProductNotFound {
                product_id: self.product_id,
            }),
        }
    }
}

pub fn decide_add(
    cart: &Cart,
    product_id: ProductId,
    stock: Stock,
) -> Result<AddDecision, DecideError> {
    if stock.amount == 0 {
        return Err(DecideError::OutOfStock { product_id });
    }

    match cart.find(product_id) {
        Some(entry) if entry.amount == stock.amount => Err(DecideError::OutOfStock { product_id }),
        Some(entry) => entry
            .amount
            .checked_add(1)
            .and_then(NonZeroU32::new)
            .and_then(|amount| cart.with_amount(product_id, amount))
            .map(|cart| AddDecision::Increment { cart })
            .ok_or(DecideError::ProductNotFound { product_id }),
        None => Ok(AddDecision::Append(PendingAppend {
            cart: cart.clone(),
            product_id,
        })),
    }
}
