use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cryptocurrency listing normalised from an upstream market source.
///
/// Field names follow the dashboard wire format (snake_case). Change
/// percentages default to zero when the source omits them; every other
/// numeric field stays nullable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CryptoQuote {
    pub id: String,
    /// Upper-cased ticker (e.g. `BTC`)
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<Decimal>,
    pub price_change_percentage_1h: Decimal,
    pub price_change_percentage_24h: Decimal,
    pub price_change_percentage_7d: Decimal,
    pub high_24h: Option<Decimal>,
    pub low_24h: Option<Decimal>,
    pub circulating_supply: Option<Decimal>,
    pub total_supply: Option<Decimal>,
    pub ath: Option<Decimal>,
    pub atl: Option<Decimal>,
}
