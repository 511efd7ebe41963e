//! Quote models shared by the crypto and stock endpoints, plus the synthetic
//! stock generator.

mod quotes_model;
mod stock_generator;

pub use quotes_model::{MarketQuote, StockQuote};
pub use stock_generator::{generate_stock_quotes, StockListing, NAMED_LISTINGS, PADDING_SECTORS};
