//! Liveness endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::state::AppState;

/// Liveness response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / - probe the store with `SELECT 1`
async fn root(State(state): State<AppState>) -> Result<Json<RootResponse>, ApiError> {
    state.store().ping().await.map_err(ApiError::Unavailable)?;

    Ok(Json(RootResponse {
        message: "Hello World! Database connection is successful.",
    }))
}

/// Root routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
