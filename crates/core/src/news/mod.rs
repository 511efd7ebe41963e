//! Market news: crypto headlines from upstream plus a fixed stock briefing,
//! merged, tagged with a keyword sentiment and cached.

mod news_model;
mod news_service;
mod news_sources;
mod news_traits;
mod sentiment;

pub use news_model::{NewsArticle, NewsCategory, Sentiment, ALL_NEWS_TYPES};
pub use news_service::NewsService;
pub use news_sources::{CryptoNewsSource, StockHeadlines};
pub use news_traits::{NewsServiceTrait, NewsSourceTrait};
pub use sentiment::{analyze_sentiment, NEGATIVE_WORDS, POSITIVE_WORDS};
