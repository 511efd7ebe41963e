//! Filtering, sorting and market-cap bucketing over quote lists.
//!
//! All functions are pure and leave their input untouched.

mod aggregation_model;
mod filter;
mod sort;
mod tiers;

pub use aggregation_model::{CapTier, CapTiers, QuoteQuery, SortKey, SortOrder, SortSpec};
pub use filter::{filter_quotes, matches_query};
pub use sort::{compare_by, sort_quotes};
pub use tiers::{bucket_by_market_cap, classify_market_cap};
