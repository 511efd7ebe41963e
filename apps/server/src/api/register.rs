use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use marketdash_core::errors::{Error as CoreError, ValidationError};
use marketdash_core::users::NewUser;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{RegisterRequest, RegisterResponse},
};

async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload
        .map_err(|_| ApiError::Core(CoreError::from(ValidationError::InvalidPayload)))?;
    let new_user = NewUser::try_from(request).map_err(CoreError::from)?;

    match state.user_service.register(new_user).await {
        Ok(_) => Ok((StatusCode::CREATED, Json(RegisterResponse { ok: true }))),
        Err(e @ CoreError::Validation(_)) => Err(e.into()),
        Err(e) if e.is_conflict() => Err(e.into()),
        Err(e) => Err(ApiError::internal("Server error", e)),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/register", post(register))
}
