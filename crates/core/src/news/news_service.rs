use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use log::{debug, warn};

use super::news_model::NewsArticle;
use super::news_traits::{NewsServiceTrait, NewsSourceTrait};
use crate::cache::{Clock, SystemClock, TtlCache};
use crate::constants::{NEWS_CACHE_KEY, NEWS_CACHE_TTL_SECS};
use crate::errors::{Error, Result};

pub struct NewsService {
    sources: Vec<Arc<dyn NewsSourceTrait>>,
    cache: TtlCache<Vec<NewsArticle>>,
}

impl NewsService {
    pub fn new(sources: Vec<Arc<dyn NewsSourceTrait>>) -> Self {
        Self::with_ttl(
            sources,
            Duration::seconds(NEWS_CACHE_TTL_SECS as i64),
            Arc::new(SystemClock),
        )
    }

    pub fn with_ttl(
        sources: Vec<Arc<dyn NewsSourceTrait>>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        NewsService {
            sources,
            cache: TtlCache::with_clock(ttl, clock),
        }
    }

    /// Pulls every source in turn and merges the results newest first.
    /// Sources that fail are skipped; the merge only fails when all do.
    async fn collect_articles(&self) -> Result<Vec<NewsArticle>> {
        let mut articles = Vec::new();
        let mut last_error = None;
        let mut succeeded = 0usize;

        for source in &self.sources {
            match source.fetch_articles().await {
                Ok(mut batch) => {
                    debug!("News source {} returned {} articles", source.id(), batch.len());
                    succeeded += 1;
                    articles.append(&mut batch);
                }
                Err(e) => {
                    warn!("News source {} failed, skipping: {}", source.id(), e);
                    last_error = Some(e);
                }
            }
        }

        if succeeded == 0 {
            let reason = last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no news sources configured".to_string());
            return Err(Error::Unavailable(reason));
        }

        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(articles)
    }
}

#[async_trait]
impl NewsServiceTrait for NewsService {
    async fn get_news(&self, news_type: &str) -> Result<Vec<NewsArticle>> {
        let entry = self
            .cache
            .get_or_refresh(NEWS_CACHE_KEY, || self.collect_articles())
            .await?;

        Ok(entry
            .payload
            .iter()
            .filter(|a| a.matches_type(news_type))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::news::{NewsCategory, Sentiment, StockHeadlines};
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedSource {
        articles: Vec<NewsArticle>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn ok(articles: Vec<NewsArticle>) -> Arc<Self> {
            Arc::new(Self {
                articles,
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                articles: Vec::new(),
                fail: true,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl NewsSourceTrait for ScriptedSource {
        fn id(&self) -> &'static str {
            "SCRIPTED"
        }

        async fn fetch_articles(&self) -> Result<Vec<NewsArticle>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Unavailable("HTTP 503".to_string()));
            }
            Ok(self.articles.clone())
        }
    }

    fn crypto(id: &str, published_at: DateTime<Utc>) -> NewsArticle {
        NewsArticle {
            id: id.to_string(),
            title: format!("Headline {id}"),
            description: None,
            url: "https://example.com".to_string(),
            image: None,
            source: "CoinGecko".to_string(),
            published_at,
            category: NewsCategory::Crypto,
            sentiment: Sentiment::Neutral,
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn service(sources: Vec<Arc<dyn NewsSourceTrait>>) -> (Arc<ManualClock>, NewsService) {
        let clock = Arc::new(ManualClock::new(start()));
        let svc = NewsService::with_ttl(sources, Duration::seconds(300), clock.clone());
        (clock, svc)
    }

    #[tokio::test]
    async fn test_merges_sources_newest_first() {
        let clock = Arc::new(ManualClock::new(start()));
        let crypto_source = ScriptedSource::ok(vec![
            crypto("old", start() - Duration::hours(5)),
            crypto("fresh", start() + Duration::minutes(1)),
        ]);
        let svc = NewsService::with_ttl(
            vec![
                crypto_source,
                Arc::new(StockHeadlines::with_clock(clock.clone())),
            ],
            Duration::seconds(300),
            clock,
        );

        let all = svc.get_news("all").await.unwrap();
        let ids: Vec<_> = all.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["fresh", "stock-1", "stock-2", "stock-3", "old"]);
        assert!(all
            .windows(2)
            .all(|pair| pair[0].published_at >= pair[1].published_at));
    }

    #[tokio::test]
    async fn test_type_filter() {
        let (_clock, svc) = service(vec![
            ScriptedSource::ok(vec![crypto("c1", start())]),
            Arc::new(StockHeadlines::with_clock(Arc::new(ManualClock::new(start())))),
        ]);

        assert_eq!(svc.get_news("all").await.unwrap().len(), 4);
        let crypto_only = svc.get_news("crypto").await.unwrap();
        assert_eq!(crypto_only.len(), 1);
        assert_eq!(crypto_only[0].id, "c1");
        assert!(svc
            .get_news("stock")
            .await
            .unwrap()
            .iter()
            .all(|a| a.category == NewsCategory::Stock));
        assert!(svc.get_news("forex").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_source_is_skipped() {
        let failing = ScriptedSource::failing();
        let (_clock, svc) = service(vec![
            failing.clone(),
            Arc::new(StockHeadlines::with_clock(Arc::new(ManualClock::new(start())))),
        ]);

        let news = svc.get_news("all").await.unwrap();
        assert_eq!(news.len(), 3);
        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_all_sources_failing_is_an_error() {
        let (_clock, svc) = service(vec![ScriptedSource::failing(), ScriptedSource::failing()]);
        let err = svc.get_news("all").await.unwrap_err();
        assert!(matches!(err, Error::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_feed_cached_for_ttl_across_types() {
        let source = ScriptedSource::ok(vec![crypto("c1", start())]);
        let (clock, svc) = service(vec![source.clone()]);

        svc.get_news("all").await.unwrap();
        svc.get_news("crypto").await.unwrap();
        clock.advance(Duration::seconds(299));
        svc.get_news("stock").await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        clock.advance(Duration::seconds(1));
        svc.get_news("all").await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
