use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use marketdash_core::news::{NewsArticle, ALL_NEWS_TYPES};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::NewsQuery,
};

async fn get_news(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NewsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<NewsArticle>>> {
    let Query(query) = query?;
    let news_type = query.news_type.as_deref().unwrap_or(ALL_NEWS_TYPES);
    let articles = state
        .news_service
        .get_news(news_type)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch news", e))?;
    Ok(Json(articles))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/news", get(get_news))
}
