use crate::modules::cart::core::product::ProductId;

/// Business rule rejections shared by every cart decider.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("requested quantity of product {product_id} is out of stock")]
    OutOfStock { product_id: ProductId },

    #[error("product {product_id} not found")]
    ProductNotFound { product_id: ProductId },
}
