//! Marketdash Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the market dashboard: the
//! process-local cache, the synthetic stock generator, the quote aggregation
//! pipeline, news aggregation, the keyword chatbot and user registration.
//! It is database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod aggregation;
pub mod cache;
pub mod chat;
pub mod constants;
pub mod errors;
pub mod market_data;
pub mod news;
pub mod quotes;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
