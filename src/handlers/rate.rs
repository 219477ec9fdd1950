use crate::{
    handlers::AppState,
    models::{ApiResponse, ExchangeRate},
};
use axum::{extract::State, Json};

pub async fn current_rate(
    State(state): State<AppState>,
) -> Json<ApiResponse<Option<ExchangeRate>>> {
    Json(ApiResponse::ok(state.store.rate().await))
}
