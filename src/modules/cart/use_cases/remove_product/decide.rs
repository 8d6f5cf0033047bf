use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::product::ProductId;

pub fn decide_remove(cart: &Cart, product_id: ProductId) -> Result<Cart, DecideError> {
    cart.without(product_id)
        .ok_or(DecideError::ProductNotFound { product_id })
}
