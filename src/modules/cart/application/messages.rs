// Fixed user-facing messages, in the storefront locale (pt-BR).

use crate::modules::cart::application::errors::FailureKind;

pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";
pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado";
pub const ADD_PRODUCT_FAILED: &str = "Erro na adição do produto";
pub const REMOVE_PRODUCT_FAILED: &str = "Erro na remoção do produto";
pub const UPDATE_AMOUNT_FAILED: &str = "Erro na alteração de quantidade do produto";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

pub fn user_message(operation: CartOperation, kind: FailureKind) -> &'static str {
    match (operation, kind) {
        (CartOperation::RemoveProduct, _) => REMOVE_PRODUCT_FAILED,
        (_, FailureKind::OutOfStock) => OUT_OF_STOCK,
        (_, FailureKind::ProductNotFound) => PRODUCT_NOT_FOUND,
        (CartOperation::AddProduct, FailureKind::OperationFailed) => ADD_PRODUCT_FAILED,
        (CartOperation::UpdateProductAmount, FailureKind::OperationFailed) => UPDATE_AMOUNT_FAILED,
    }
}
