use marketdash_market_data::CryptoQuote;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A synthetic equity quote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub current_price: Decimal,
    pub change_percent: Decimal,
    pub change_amount: Decimal,
    pub volume: u64,
    pub market_cap: u64,
    pub high_24h: Decimal,
    pub low_24h: Decimal,
    pub open_price: Decimal,
    pub previous_close: Decimal,
    /// 1-based position in the generated list
    pub rank: u32,
}

/// Read-only view over a quote used by the filter, sort and bucketing
/// functions. Absent numeric fields read as zero.
pub trait MarketQuote {
    fn symbol(&self) -> &str;
    fn name(&self) -> &str;
    fn rank(&self) -> u32;
    fn price(&self) -> Decimal;
    /// 24h change percentage
    fn change_percent(&self) -> Decimal;
    fn market_cap(&self) -> Decimal;
}

impl MarketQuote for StockQuote {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rank(&self) -> u32 {
        self.rank
    }

    fn price(&self) -> Decimal {
        self.current_price
    }

    fn change_percent(&self) -> Decimal {
        self.change_percent
    }

    fn market_cap(&self) -> Decimal {
        Decimal::from(self.market_cap)
    }
}

impl MarketQuote for CryptoQuote {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rank(&self) -> u32 {
        self.market_cap_rank.unwrap_or(0)
    }

    fn price(&self) -> Decimal {
        self.current_price.unwrap_or_default()
    }

    fn change_percent(&self) -> Decimal {
        self.price_change_percentage_24h
    }

    fn market_cap(&self) -> Decimal {
        self.market_cap.unwrap_or_default()
    }
}
