//! Provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CryptoNewsItem, CryptoQuote};

/// A source of live cryptocurrency listings.
#[async_trait]
pub trait CryptoMarketProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the current listings, ordered the way the source ranks them.
    ///
    /// A complete response or an error; never a partial list.
    async fn get_markets(&self) -> Result<Vec<CryptoQuote>, MarketDataError>;
}

/// A source of crypto headlines.
#[async_trait]
pub trait CryptoNewsProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Fetch at most `limit` headlines in source order.
    async fn get_news(&self, limit: usize) -> Result<Vec<CryptoNewsItem>, MarketDataError>;
}
