use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::cart::use_cases::get_cart::summary::CartSummary;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.cart().await)
}

pub async fn handle_summary(State(state): State<AppState>) -> impl IntoResponse {
    Json(CartSummary::from(&state.store.cart().await))
}
