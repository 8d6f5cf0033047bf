// Read model for the storefront header and cart footer.

use crate::modules::cart::core::cart::Cart;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub products: usize,
    pub units: u64,
    pub total: f64,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            products: cart.len(),
            units: cart.total_units(),
            total: cart.total(),
        }
    }
}
