use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::cart::application::messages::CartOperation;
use crate::modules::cart::core::product::ProductId;
use crate::shell::http::cart_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    cart_response(
        CartOperation::AddProduct,
        state.store.add_product(product_id).await,
    )
}
