use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use marketdash_core::aggregation::{CapTiers, QuoteQuery};
use marketdash_core::quotes::StockQuote;
use marketdash_market_data::CryptoQuote;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

const CRYPTO_FAILED: &str = "Failed to fetch cryptocurrency data";
const STOCKS_FAILED: &str = "Failed to fetch stock data";

async fn get_crypto(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QuoteQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<CryptoQuote>>> {
    let Query(query) = query?;
    let entry = state
        .market_data_service
        .get_crypto_quotes()
        .await
        .map_err(|e| ApiError::internal(CRYPTO_FAILED, e))?;
    Ok(Json(query.apply(&entry.payload)))
}

async fn get_stocks(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QuoteQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<StockQuote>>> {
    let Query(query) = query?;
    let entry = state
        .market_data_service
        .get_stock_quotes()
        .await
        .map_err(|e| ApiError::internal(STOCKS_FAILED, e))?;
    Ok(Json(query.apply(&entry.payload)))
}

async fn get_stock_tiers(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QuoteQuery>, QueryRejection>,
) -> ApiResult<Json<CapTiers<StockQuote>>> {
    let Query(query) = query?;
    let entry = state
        .market_data_service
        .get_stock_quotes()
        .await
        .map_err(|e| ApiError::internal(STOCKS_FAILED, e))?;
    Ok(Json(query.apply_tiered(&entry.payload)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/crypto", get(get_crypto))
        .route("/stocks", get(get_stocks))
        .route("/stocks/tiers", get(get_stock_tiers))
}
