use async_trait::async_trait;

use super::news_model::NewsArticle;
use crate::errors::Result;

/// A feed contributing articles to the aggregated news list.
#[async_trait]
pub trait NewsSourceTrait: Send + Sync {
    fn id(&self) -> &'static str;
    async fn fetch_articles(&self) -> Result<Vec<NewsArticle>>;
}

/// Trait for news service operations
#[async_trait]
pub trait NewsServiceTrait: Send + Sync {
    /// Articles of the given `type` (`all`, `crypto`, `stock`), newest first.
    async fn get_news(&self, news_type: &str) -> Result<Vec<NewsArticle>>;
}
