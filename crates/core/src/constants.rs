use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Time-to-live for crypto and stock listings
pub const MARKET_CACHE_TTL_SECS: u64 = 30;

/// Time-to-live for the aggregated news feed
pub const NEWS_CACHE_TTL_SECS: u64 = 5 * 60;

/// Cache keys, one per data source
pub const CRYPTO_CACHE_KEY: &str = "crypto";
pub const STOCK_CACHE_KEY: &str = "stocks";
pub const NEWS_CACHE_KEY: &str = "news";

/// Market capitalization at or above which a stock is large cap
pub const LARGE_CAP_THRESHOLD: Decimal = dec!(200000000000);

/// Market capitalization at or above which a stock is mid cap
pub const MID_CAP_THRESHOLD: Decimal = dec!(50000000000);

/// Number of crypto headlines kept per refresh
pub const CRYPTO_NEWS_LIMIT: usize = 20;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Decimal precision for generated prices
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
