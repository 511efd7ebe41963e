use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tokio::task;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::HealthResponse,
};

async fn healthz() -> &'static str {
    "ok"
}

/// Liveness plus a round trip to the database.
async fn health(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    let pool = state.pool.clone();
    task::spawn_blocking(move || marketdash_storage_sqlite::ping(&pool))
        .await
        .map_err(|e| ApiError::internal("Database unavailable", e))?
        .map_err(|e| ApiError::internal("Database unavailable", e))?;
    Ok(Json(HealthResponse { ok: true, db: true }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/healthz", get(healthz))
}
