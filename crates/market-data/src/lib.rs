//! Marketdash Market Data Crate
//!
//! Adapters for third-party market sources. Every adapter normalises the
//! upstream payload into the crate's own models so that callers never see
//! provider-specific field names or units.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +--------------------+
//! |  CoinGecko REST  | --> | CoinGeckoProvider  |
//! +------------------+     +--------------------+
//!                             |              |
//!                             v              v
//!                      +-------------+  +---------------+
//!                      | CryptoQuote |  | CryptoNewsItem|
//!                      +-------------+  +---------------+
//! ```
//!
//! # Core Types
//!
//! - [`CryptoQuote`] - Normalised coin listing (price, market cap, change %)
//! - [`CryptoNewsItem`] - Normalised crypto headline
//! - [`CryptoMarketProvider`] / [`CryptoNewsProvider`] - provider seams
//! - [`MarketDataError`] - errors raised by providers

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CryptoNewsItem, CryptoQuote};
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::{CryptoMarketProvider, CryptoNewsProvider};
