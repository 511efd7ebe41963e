use serde::Serialize;

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    Greeting,
    StockRecommendation,
    CryptoRecommendation,
    MarketStatus,
    Investment,
    Price,
    Comparison,
    Learning,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    #[serde(skip)]
    pub intent: ChatIntent,
    pub response: String,
}
