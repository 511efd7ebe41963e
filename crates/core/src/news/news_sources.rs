use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use marketdash_market_data::{CryptoNewsItem, CryptoNewsProvider};

use super::news_model::{NewsArticle, NewsCategory, Sentiment};
use super::news_traits::NewsSourceTrait;
use super::sentiment::analyze_sentiment;
use crate::cache::{Clock, SystemClock};
use crate::constants::CRYPTO_NEWS_LIMIT;
use crate::errors::Result;

/// Crypto headlines from an upstream provider, tagged with a keyword
/// sentiment computed over the title and the feed's own description.
pub struct CryptoNewsSource {
    provider: Arc<dyn CryptoNewsProvider>,
    limit: usize,
}

impl CryptoNewsSource {
    pub fn new(provider: Arc<dyn CryptoNewsProvider>) -> Self {
        Self {
            provider,
            limit: CRYPTO_NEWS_LIMIT,
        }
    }

    fn to_article(item: CryptoNewsItem) -> NewsArticle {
        let sentiment = analyze_sentiment(&format!(
            "{} {}",
            item.title,
            item.summary.as_deref().unwrap_or("")
        ));
        NewsArticle {
            id: item.id,
            title: item.title,
            description: item.description,
            url: item.url,
            image: item.image,
            source: item.source,
            published_at: item.published_at,
            category: NewsCategory::Crypto,
            sentiment,
        }
    }
}

#[async_trait]
impl NewsSourceTrait for CryptoNewsSource {
    fn id(&self) -> &'static str {
        self.provider.id()
    }

    async fn fetch_articles(&self) -> Result<Vec<NewsArticle>> {
        let items = self.provider.get_news(self.limit).await?;
        Ok(items.into_iter().map(Self::to_article).collect())
    }
}

struct Headline {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    source: &'static str,
    hours_ago: i64,
    sentiment: Sentiment,
}

const STOCK_HEADLINES: [Headline; 3] = [
    Headline {
        id: "stock-1",
        title: "Indian Markets Show Strong Growth Momentum",
        description: "BSE Sensex and NSE Nifty continue their upward trajectory as investor sentiment remains positive.",
        source: "Market Watch",
        hours_ago: 0,
        sentiment: Sentiment::Positive,
    },
    Headline {
        id: "stock-2",
        title: "IT Sector Leads Market Rally",
        description: "Technology stocks including TCS, Infosys, and Wipro show significant gains in today's trading session.",
        source: "Financial Express",
        hours_ago: 1,
        sentiment: Sentiment::Positive,
    },
    Headline {
        id: "stock-3",
        title: "Banking Sector Consolidation Continues",
        description: "Major banking stocks show mixed performance as sector consolidation remains in focus.",
        source: "Economic Times",
        hours_ago: 2,
        sentiment: Sentiment::Neutral,
    },
];

/// Fixed equity briefing. Timestamps are relative to the clock at fetch time.
pub struct StockHeadlines {
    clock: Arc<dyn Clock>,
}

impl StockHeadlines {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for StockHeadlines {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSourceTrait for StockHeadlines {
    fn id(&self) -> &'static str {
        "STOCK_HEADLINES"
    }

    async fn fetch_articles(&self) -> Result<Vec<NewsArticle>> {
        let now = self.clock.now();
        Ok(STOCK_HEADLINES
            .iter()
            .map(|h| NewsArticle {
                id: h.id.to_string(),
                title: h.title.to_string(),
                description: Some(h.description.to_string()),
                url: "#".to_string(),
                image: None,
                source: h.source.to_string(),
                published_at: now - Duration::hours(h.hours_ago),
                category: NewsCategory::Stock,
                sentiment: h.sentiment,
            })
            .collect())
    }
}
