use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use marketdash_core::chat::ChatReply;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::ChatRequest,
};

async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatReply>> {
    let Json(request) =
        payload.map_err(|e| ApiError::internal("Failed to process chat message", e.body_text()))?;
    let reply = state
        .chat_service
        .respond(&request.message, request.context.as_ref());
    tracing::debug!("Chat intent: {:?}", reply.intent);
    Ok(Json(reply))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}
