use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A crypto headline normalised from an upstream news feed.
///
/// Classification (category, sentiment) is left to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoNewsItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// The feed's own description, without the `content` fallback.
    #[serde(default, skip_serializing)]
    pub summary: Option<String>,
    pub url: String,
    pub image: Option<String>,
    pub source: String,
    pub published_at: DateTime<Utc>,
}
