use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;

use crate::modules::cart::application::errors::{CartError, FailureKind};
use crate::modules::cart::application::messages::{CartOperation, user_message};
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::use_cases::add_product::inbound::http as add_http;
use crate::modules::cart::use_cases::get_cart::inbound::http as get_http;
use crate::modules::cart::use_cases::remove_product::inbound::http as remove_http;
use crate::modules::cart::use_cases::update_product_amount::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cart", get(get_http::handle))
        .route("/cart/summary", get(get_http::handle_summary))
        .route(
            "/cart/products/{product_id}",
            post(add_http::handle).delete(remove_http::handle),
        )
        .route(
            "/cart/products/{product_id}/amount",
            put(update_http::handle),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
}

fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::OutOfStock => StatusCode::CONFLICT,
        FailureKind::ProductNotFound => StatusCode::NOT_FOUND,
        FailureKind::OperationFailed => StatusCode::BAD_GATEWAY,
    }
}

/// Renders the outcome of a cart mutation: the new cart, or the user message.
pub fn cart_response(operation: CartOperation, result: Result<Cart, CartError>) -> Response {
    match result {
        Ok(cart) => Json(cart).into_response(),
        Err(err) => {
            let kind = err.kind();
            let body = ErrorBody {
                message: user_message(operation, kind),
            };
            (status_for(kind), Json(body)).into_response()
        }
    }
}
