//! Cached access to crypto listings and synthetic stock quotes.

mod market_data_service;
mod market_data_traits;

pub use market_data_service::MarketDataService;
pub use market_data_traits::MarketDataServiceTrait;
