use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use log::{error, info};
use marketdash_market_data::{CryptoMarketProvider, CryptoQuote};

use super::market_data_traits::MarketDataServiceTrait;
use crate::cache::{CacheEntry, Clock, SystemClock, TtlCache};
use crate::constants::{CRYPTO_CACHE_KEY, MARKET_CACHE_TTL_SECS, STOCK_CACHE_KEY};
use crate::errors::{Error, Result};
use crate::quotes::{generate_stock_quotes, StockQuote};

pub struct MarketDataService {
    crypto_provider: Arc<dyn CryptoMarketProvider>,
    crypto_cache: TtlCache<Vec<CryptoQuote>>,
    stock_cache: TtlCache<Vec<StockQuote>>,
}

impl MarketDataService {
    pub fn new(crypto_provider: Arc<dyn CryptoMarketProvider>) -> Self {
        Self::with_ttl(
            crypto_provider,
            Duration::seconds(MARKET_CACHE_TTL_SECS as i64),
            Arc::new(SystemClock),
        )
    }

    pub fn with_ttl(
        crypto_provider: Arc<dyn CryptoMarketProvider>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        MarketDataService {
            crypto_provider,
            crypto_cache: TtlCache::with_clock(ttl, clock.clone()),
            stock_cache: TtlCache::with_clock(ttl, clock),
        }
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn get_crypto_quotes(&self) -> Result<CacheEntry<Vec<CryptoQuote>>> {
        self.crypto_cache
            .get_or_refresh(CRYPTO_CACHE_KEY, || async {
                let quotes = self.crypto_provider.get_markets().await.map_err(|e| {
                    error!(
                        "Failed to fetch markets from {}: {}",
                        self.crypto_provider.id(),
                        e
                    );
                    Error::from(e)
                })?;
                info!(
                    "Fetched {} crypto quotes from {}",
                    quotes.len(),
                    self.crypto_provider.id()
                );
                Ok(quotes)
            })
            .await
    }

    async fn get_stock_quotes(&self) -> Result<CacheEntry<Vec<StockQuote>>> {
        self.stock_cache
            .get_or_refresh(STOCK_CACHE_KEY, || async {
                let quotes = {
                    let mut rng = rand::thread_rng();
                    generate_stock_quotes(&mut rng)
                };
                info!("Generated {} synthetic stock quotes", quotes.len());
                Ok::<_, Error>(quotes)
            })
            .await
    }
}
