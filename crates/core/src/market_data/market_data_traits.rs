use async_trait::async_trait;
use marketdash_market_data::CryptoQuote;

use crate::cache::CacheEntry;
use crate::errors::Result;
use crate::quotes::StockQuote;

/// Trait for market data service operations
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    /// Top coins by market cap, served from cache while fresh.
    async fn get_crypto_quotes(&self) -> Result<CacheEntry<Vec<CryptoQuote>>>;
    /// One hundred synthetic equities, regenerated on every cache miss.
    async fn get_stock_quotes(&self) -> Result<CacheEntry<Vec<StockQuote>>>;
}
