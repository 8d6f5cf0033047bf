use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cart::application::messages::CartOperation;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shell::http::cart_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProductAmountBody {
    pub amount: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<UpdateProductAmountBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateProductAmount {
        product_id,
        amount: body.amount,
    };
    cart_response(
        CartOperation::UpdateProductAmount,
        state.store.update_product_amount(command).await,
    )
}

#[cfg(test)]
mod update_product_amount_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::infrastructure::storage::in_memory::InMemoryStorage;
    use crate::shell::state::AppState;
    use crate::shell::state::test_state::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/cart/products/{product_id}/amount", put(handle))
            .with_state(state)
    }

    async fn stocked_state() -> AppState {
        let storage =
            InMemoryStorage::new().with_entry("@RocketShoes:cart", r#"[{"id":1,"amount":2}]"#);
        make_test_state(storage).await
    }

    async fn put_amount(state: AppState, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(
                Request::put("/cart/products/1/amount")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_new_amount() {
        let (status, json) = put_amount(stocked_state().await, r#"{"amount":5}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([{"id": 1, "amount": 5}]));
    }

    #[tokio::test]
    async fn it_should_return_200_with_an_unchanged_cart_for_a_zero_amount() {
        let (status, json) = put_amount(stocked_state().await, r#"{"amount":0}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([{"id": 1, "amount": 2}]));
    }

    #[tokio::test]
    async fn it_should_return_409_when_the_amount_exceeds_the_stock() {
        let (status, json) = put_amount(stocked_state().await, r#"{"amount":10}"#).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            json,
            serde_json::json!({"message": "Quantidade solicitada fora de estoque"})
        );
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let (status, _) = put_amount(stocked_state().await, "not-json").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
