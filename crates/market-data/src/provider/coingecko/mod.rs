//! CoinGecko market data provider implementation.
//!
//! This module provides:
//! - Coin listings via the /coins/markets endpoint
//! - Crypto headlines via the /news endpoint
//!
//! The public API is keyless but rate limited per IP.
//! API documentation: https://docs.coingecko.com/reference/introduction

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{CryptoNewsItem, CryptoQuote};
use crate::provider::{CryptoMarketProvider, CryptoNewsProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";
const DEFAULT_VS_CURRENCY: &str = "inr";
const DEFAULT_PER_PAGE: u32 = 100;
const DESCRIPTION_FALLBACK_CHARS: usize = 200;
const DEFAULT_NEWS_SOURCE: &str = "CoinGecko";

// ============================================================================
// API Response Structures
// ============================================================================

/// Item of the /coins/markets response
#[derive(Debug, Deserialize)]
struct MarketCoin {
    id: String,
    symbol: String,
    name: String,
    image: Option<String>,
    current_price: Option<f64>,
    market_cap: Option<f64>,
    market_cap_rank: Option<u32>,
    total_volume: Option<f64>,
    high_24h: Option<f64>,
    low_24h: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    price_change_percentage_1h_in_currency: Option<f64>,
    price_change_percentage_7d_in_currency: Option<f64>,
    circulating_supply: Option<f64>,
    total_supply: Option<f64>,
    ath: Option<f64>,
    atl: Option<f64>,
}

/// Response from /news endpoint
#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    data: Vec<NewsEntry>,
}

/// Individual headline. Ids and timestamps arrive as numbers or strings
/// depending on the feed, so they are kept as raw JSON.
#[derive(Debug, Deserialize)]
struct NewsEntry {
    news_id: Option<Value>,
    id: Option<Value>,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    thumb_2x: Option<String>,
    image: Option<String>,
    author: Option<String>,
    updated_at: Option<Value>,
}

// ============================================================================
// CoinGeckoProvider
// ============================================================================

/// CoinGecko market data provider.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    vs_currency: String,
    per_page: u32,
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CoinGeckoProvider {
    /// Create a provider talking to `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("marketdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Quote currency for listings (e.g. `inr`, `usd`).
    pub fn with_vs_currency(mut self, vs_currency: impl Into<String>) -> Self {
        self.vs_currency = vs_currency.into().to_lowercase();
        self
    }

    /// Number of listings requested per call.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Make a GET request to the CoinGecko API.
    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("CoinGecko request: {} with {} params", endpoint, params.len());

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::ProviderError {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }
}

#[async_trait]
impl CryptoMarketProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_markets(&self) -> Result<Vec<CryptoQuote>, MarketDataError> {
        let per_page = self.per_page.to_string();
        let params = [
            ("vs_currency", self.vs_currency.as_str()),
            ("order", "market_cap_desc"),
            ("per_page", per_page.as_str()),
            ("page", "1"),
            ("sparkline", "false"),
            ("price_change_percentage", "1h,24h,7d"),
        ];
        let text = self.fetch("/coins/markets", &params).await?;
        parse_markets(&text)
    }
}

#[async_trait]
impl CryptoNewsProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_news(&self, limit: usize) -> Result<Vec<CryptoNewsItem>, MarketDataError> {
        let text = self.fetch("/news", &[]).await?;
        parse_news(&text, limit, Utc::now())
    }
}

// ============================================================================
// Normalisation
// ============================================================================

fn parse_markets(text: &str) -> Result<Vec<CryptoQuote>, MarketDataError> {
    let coins: Vec<MarketCoin> =
        serde_json::from_str(text).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse markets response: {}", e),
        })?;
    Ok(coins.into_iter().map(normalize_coin).collect())
}

fn decimal(value: Option<f64>) -> Option<Decimal> {
    value.and_then(|v| Decimal::try_from(v).ok())
}

fn normalize_coin(coin: MarketCoin) -> CryptoQuote {
    CryptoQuote {
        symbol: coin.symbol.to_uppercase(),
        current_price: decimal(coin.current_price),
        market_cap: decimal(coin.market_cap),
        market_cap_rank: coin.market_cap_rank,
        total_volume: decimal(coin.total_volume),
        price_change_percentage_1h: decimal(coin.price_change_percentage_1h_in_currency)
            .unwrap_or_default(),
        price_change_percentage_24h: decimal(coin.price_change_percentage_24h)
            .unwrap_or_default(),
        price_change_percentage_7d: decimal(coin.price_change_percentage_7d_in_currency)
            .unwrap_or_default(),
        high_24h: decimal(coin.high_24h),
        low_24h: decimal(coin.low_24h),
        circulating_supply: decimal(coin.circulating_supply),
        total_supply: decimal(coin.total_supply),
        ath: decimal(coin.ath),
        atl: decimal(coin.atl),
        id: coin.id,
        name: coin.name,
        image: coin.image,
    }
}

fn parse_news(
    text: &str,
    limit: usize,
    now: DateTime<Utc>,
) -> Result<Vec<CryptoNewsItem>, MarketDataError> {
    let response: NewsResponse =
        serde_json::from_str(text).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse news response: {}", e),
        })?;

    Ok(response
        .data
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, entry)| normalize_news_entry(entry, index, now))
        .collect())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Seconds or milliseconds since the epoch, or an RFC 3339 string.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let from_epoch = |raw: i64| {
        let secs = if raw > 10_000_000_000 { raw / 1000 } else { raw };
        Utc.timestamp_opt(secs, 0).single()
    };
    match value {
        Value::Number(n) => n.as_i64().and_then(from_epoch),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| s.parse::<i64>().ok().and_then(from_epoch)),
        _ => None,
    }
}

fn normalize_news_entry(entry: NewsEntry, index: usize, now: DateTime<Utc>) -> CryptoNewsItem {
    let id = entry
        .news_id
        .as_ref()
        .and_then(id_string)
        .or_else(|| entry.id.as_ref().and_then(id_string))
        .unwrap_or_else(|| format!("coingecko-{}", index));

    let summary = non_empty(entry.description);
    let description = summary.clone().or_else(|| {
        non_empty(entry.content)
            .map(|content| content.chars().take(DESCRIPTION_FALLBACK_CHARS).collect())
    });

    let published_at = match entry.updated_at.as_ref().and_then(parse_timestamp) {
        Some(ts) => ts,
        None => {
            if entry.updated_at.is_some() {
                warn!("Unparseable news timestamp for {}, using current time", id);
            }
            now
        }
    };

    CryptoNewsItem {
        id,
        title: entry.title.unwrap_or_default(),
        description,
        summary,
        url: entry.url.unwrap_or_default(),
        image: non_empty(entry.thumb_2x).or(non_empty(entry.image)),
        source: non_empty(entry.author).unwrap_or_else(|| DEFAULT_NEWS_SOURCE.to_string()),
        published_at,
    }
}
