use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value of the `type` filter that selects every category.
pub const ALL_NEWS_TYPES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Crypto,
    Stock,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Crypto => "crypto",
            NewsCategory::Stock => "stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub source: String,
    pub published_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub category: NewsCategory,
    pub sentiment: Sentiment,
}

impl NewsArticle {
    /// Whether the article passes the `type` query filter.
    /// `all` keeps everything; an unknown type keeps nothing.
    pub fn matches_type(&self, news_type: &str) -> bool {
        news_type == ALL_NEWS_TYPES || self.category.as_str() == news_type
    }
}
