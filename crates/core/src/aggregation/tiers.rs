use rust_decimal::Decimal;

use super::aggregation_model::{CapTier, CapTiers};
use crate::constants::{LARGE_CAP_THRESHOLD, MID_CAP_THRESHOLD};
use crate::quotes::MarketQuote;

pub fn classify_market_cap(market_cap: Decimal) -> CapTier {
    if market_cap >= LARGE_CAP_THRESHOLD {
        CapTier::LargeCap
    } else if market_cap >= MID_CAP_THRESHOLD {
        CapTier::MidCap
    } else {
        CapTier::SmallCap
    }
}

pub fn bucket_by_market_cap<Q: MarketQuote + Clone>(quotes: &[Q]) -> CapTiers<Q> {
    let mut tiers = CapTiers::default();
    for quote in quotes {
        tiers.push(classify_market_cap(quote.market_cap()), quote.clone());
    }
    tiers
}
