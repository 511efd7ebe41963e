//! Market data provider abstractions and implementations.
//!
//! Providers are split by what they serve (listings, news) so a source
//! that only offers one of them can still plug in.

mod traits;

pub mod coingecko;

pub use traits::{CryptoMarketProvider, CryptoNewsProvider};
