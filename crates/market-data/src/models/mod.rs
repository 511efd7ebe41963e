//! Normalised market data models.

mod crypto;
mod news;

pub use crypto::CryptoQuote;
pub use news::CryptoNewsItem;
