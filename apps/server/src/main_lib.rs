use std::sync::Arc;

use crate::{
    auth::AuthManager,
    config::{Config, LogFormat},
};
use anyhow::Context;
use marketdash_core::{
    cache::{Clock, SystemClock},
    chat::{ChatService, ChatServiceTrait},
    market_data::{MarketDataService, MarketDataServiceTrait},
    news::{CryptoNewsSource, NewsService, NewsServiceTrait, NewsSourceTrait, StockHeadlines},
    users::{UserService, UserServiceTrait},
};
use marketdash_market_data::CoinGeckoProvider;
use marketdash_storage_sqlite::{
    db::{self, spawn_writer},
    users::UserRepository,
    DbPool,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub market_data_service: Arc<dyn MarketDataServiceTrait>,
    pub news_service: Arc<dyn NewsServiceTrait>,
    pub chat_service: Arc<dyn ChatServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub pool: Arc<DbPool>,
    pub auth: Option<Arc<AuthManager>>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

fn chrono_ttl(ttl: std::time::Duration, name: &str) -> anyhow::Result<chrono::Duration> {
    chrono::Duration::from_std(ttl).with_context(|| format!("{name} is out of range"))
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let coingecko = Arc::new(
        CoinGeckoProvider::new(config.coingecko_base_url.clone())
            .with_vs_currency(config.vs_currency.clone()),
    );
    tracing::info!(
        "CoinGecko source: {} ({})",
        config.coingecko_base_url,
        config.vs_currency
    );

    let market_data_service: Arc<dyn MarketDataServiceTrait> =
        Arc::new(MarketDataService::with_ttl(
            coingecko.clone(),
            chrono_ttl(config.market_cache_ttl, "MD_MARKET_CACHE_TTL_SECS")?,
            clock.clone(),
        ));

    let news_sources: Vec<Arc<dyn NewsSourceTrait>> = vec![
        Arc::new(CryptoNewsSource::new(coingecko)),
        Arc::new(StockHeadlines::with_clock(clock.clone())),
    ];
    let news_service: Arc<dyn NewsServiceTrait> = Arc::new(NewsService::with_ttl(
        news_sources,
        chrono_ttl(config.news_cache_ttl, "MD_NEWS_CACHE_TTL_SECS")?,
        clock,
    ));

    let chat_service: Arc<dyn ChatServiceTrait> = Arc::new(ChatService::new());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer));
    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(user_repo));

    let auth = config
        .auth
        .as_ref()
        .map(AuthManager::new)
        .transpose()?
        .map(Arc::new);
    if auth.is_none() {
        tracing::warn!("MD_SECRET_KEY not set; login and session endpoints are disabled");
    }

    Ok(Arc::new(AppState {
        market_data_service,
        news_service,
        chat_service,
        user_service,
        pool,
        auth,
    }))
}
