use super::chat_model::ChatIntent;

/// Condition tested against the lower-cased message.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// Message starts with any of the words.
    Prefix(&'static [&'static str]),
    /// Every group must have at least one word occurring as a substring.
    Keywords(&'static [&'static [&'static str]]),
}

impl Predicate {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Predicate::Prefix(words) => words.iter().any(|w| lowered.starts_with(w)),
            Predicate::Keywords(groups) => groups
                .iter()
                .all(|group| group.iter().any(|w| lowered.contains(w))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChatRule {
    pub intent: ChatIntent,
    pub predicate: Predicate,
    pub response: &'static str,
}

const RECOMMEND_VERBS: &[&str] = &["recommend", "suggest", "good"];

/// Rules in priority order; the first match wins.
pub const CHAT_RULES: &[ChatRule] = &[
    ChatRule {
        intent: ChatIntent::Greeting,
        predicate: Predicate::Prefix(&["hi", "hello", "hey", "greetings"]),
        response: "Hello! I'm your Market Assistant. I can help you with stock and cryptocurrency information. What would you like to know?",
    },
    ChatRule {
        intent: ChatIntent::StockRecommendation,
        predicate: Predicate::Keywords(&[&["stock"], RECOMMEND_VERBS]),
        response: "Based on current market trends, here are some popular Indian stocks:\n\n• **Large Cap**: Reliance Industries (RELIANCE.BSE), TCS (TCS.BSE), HDFC Bank (HDFCBANK.BSE)\n• **Mid Cap**: Zomato, Delhivery, Info Edge\n• **IT Sector**: Infosys, Wipro, Tech Mahindra\n\nRemember to do your own research and consider your risk tolerance before investing!",
    },
    ChatRule {
        intent: ChatIntent::CryptoRecommendation,
        predicate: Predicate::Keywords(&[&["crypto"], RECOMMEND_VERBS]),
        response: "Here are some popular cryptocurrencies to consider:\n\n• **Bitcoin (BTC)**: Market leader and most established\n• **Ethereum (ETH)**: Leading smart contract platform\n• **Binance Coin (BNB)**: Exchange token with multiple utilities\n• **Cardano (ADA)**: Proof-of-stake blockchain platform\n\nAlways research and understand the risks before investing in crypto!",
    },
    ChatRule {
        intent: ChatIntent::MarketStatus,
        predicate: Predicate::Keywords(&[&["market"], &["today", "now", "current"]]),
        response: "The current market is showing mixed signals. Indian stocks have been resilient with strong IT and banking sectors. In crypto, Bitcoin remains stable around its current levels. Check the dashboard for real-time data!",
    },
    ChatRule {
        intent: ChatIntent::Investment,
        predicate: Predicate::Keywords(&[&["invest", "buy"]]),
        response: "Investment tips:\n\n1. **Diversify**: Don't put all eggs in one basket\n2. **Research**: Study the company/project fundamentals\n3. **Long-term view**: Markets fluctuate, stay patient\n4. **Risk management**: Only invest what you can afford to lose\n5. **Stay updated**: Follow market news regularly\n\nCheck the news section for the latest market updates!",
    },
    ChatRule {
        intent: ChatIntent::Price,
        predicate: Predicate::Keywords(&[&["price", "worth"]]),
        response: "You can see real-time prices for all stocks and cryptocurrencies on the dashboard. Simply search for the asset you're interested in, and click on it for detailed information including charts and market data.",
    },
    ChatRule {
        intent: ChatIntent::Comparison,
        predicate: Predicate::Keywords(&[&["compare", "better", "vs"]]),
        response: "To compare assets:\n\n1. Check their market cap and volume\n2. Look at historical performance\n3. Analyze the volatility\n4. Consider the use case (for crypto) or business model (for stocks)\n\nUse the dashboard's sort and filter features to compare multiple assets side by side!",
    },
    ChatRule {
        intent: ChatIntent::Learning,
        predicate: Predicate::Keywords(&[&["learn", "understand", "explain"]]),
        response: "I can help explain:\n\n• **Market Cap**: Total value of all coins/shares\n• **Volume**: Amount traded in 24 hours\n• **Change %**: Price movement over time\n• **Large/Mid/Small Cap**: Company size classification\n\nWhat specific term would you like me to explain?",
    },
];

pub const FALLBACK_RESPONSE: &str = "I'm here to help with stock and cryptocurrency questions! You can ask me about:\n\n• Stock or crypto recommendations\n• Market trends and analysis\n• Investment tips\n• Price information\n• Comparing different assets\n\nWhat would you like to know?";
