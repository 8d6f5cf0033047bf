use async_graphql::{EmptySubscription, ErrorExtensions, ID, MergedObject, Schema};

use crate::modules::cart::application::errors::{CartError, FailureKind};
use crate::modules::cart::application::messages::{CartOperation, user_message};
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::add_product::inbound::graphql as add_graphql;
use crate::modules::cart::use_cases::remove_product::inbound::graphql as remove_graphql;
use crate::modules::cart::use_cases::update_product_amount::inbound::graphql as update_graphql;

pub use crate::modules::cart::use_cases::get_cart::inbound::graphql::CartQuery as QueryRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    add_graphql::AddProductMutation,
    remove_graphql::RemoveProductMutation,
    update_graphql::UpdateProductAmountMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn parse_product_id(id: &ID) -> async_graphql::Result<ProductId> {
    id.parse::<ProductId>()
        .map_err(|_| async_graphql::Error::new(format!("invalid product id: {}", id.as_str())))
}

/// User message of a failed mutation, with its kind as an error extension.
pub fn cart_error(operation: CartOperation, err: &CartError) -> async_graphql::Error {
    let kind = err.kind();
    let code = match kind {
        FailureKind::OutOfStock => "OUT_OF_STOCK",
        FailureKind::ProductNotFound => "PRODUCT_NOT_FOUND",
        FailureKind::OperationFailed => "OPERATION_FAILED",
    };
    async_graphql::Error::new(user_message(operation, kind)).extend_with(|_, e| e.set("code", code))
}
