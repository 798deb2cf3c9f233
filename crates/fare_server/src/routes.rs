use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::handlers::health::health_response;
use crate::handlers::pricing::{
    handle_calculate_price, handle_compare, handle_price_trace, list_presets,
};
use crate::handlers::ApiResponse;

#[derive(Debug, Clone)]
pub struct AppState {
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/calculate-price", post(calculate_price))
        .route("/api/compare", post(compare))
        .route("/api/price-trace", post(price_trace))
        .route("/api/presets", get(presets))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> ApiResponse {
    health_response(state.started_at.elapsed(), chrono::Utc::now())
}

// Raw bytes so malformed JSON gets the same 400 payload as a failed validation.
async fn calculate_price(body: Bytes) -> ApiResponse {
    handle_calculate_price(&body)
}

async fn compare(body: Bytes) -> ApiResponse {
    handle_compare(&body)
}

async fn price_trace(body: Bytes) -> ApiResponse {
    handle_price_trace(&body)
}

async fn presets() -> ApiResponse {
    list_presets()
}
