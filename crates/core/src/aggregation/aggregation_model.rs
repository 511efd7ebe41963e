use serde::{Deserialize, Serialize};

use super::{bucket_by_market_cap, filter_quotes, sort_quotes};
use crate::quotes::MarketQuote;

/// Field a quote list can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Rank,
    Price,
    Change,
    #[serde(alias = "marketCap")]
    MarketCap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Sort state after the user selects `key` on a table header.
    ///
    /// Selecting the active key flips the order; any other key becomes
    /// active in descending order.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.order.flipped())
        } else {
            Self::new(key, SortOrder::Desc)
        }
    }
}

/// Market capitalization class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapTier {
    LargeCap,
    MidCap,
    SmallCap,
}

/// Quotes partitioned by [`CapTier`], each tier in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapTiers<Q> {
    pub large_cap: Vec<Q>,
    pub mid_cap: Vec<Q>,
    pub small_cap: Vec<Q>,
}

impl<Q> Default for CapTiers<Q> {
    fn default() -> Self {
        Self {
            large_cap: Vec::new(),
            mid_cap: Vec::new(),
            small_cap: Vec::new(),
        }
    }
}

impl<Q> CapTiers<Q> {
    pub fn len(&self) -> usize {
        self.large_cap.len() + self.mid_cap.len() + self.small_cap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn push(&mut self, tier: CapTier, quote: Q) {
        match tier {
            CapTier::LargeCap => self.large_cap.push(quote),
            CapTier::MidCap => self.mid_cap.push(quote),
            CapTier::SmallCap => self.small_cap.push(quote),
        }
    }
}

/// Query-string parameters accepted by the market endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuoteQuery {
    pub q: Option<String>,
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
}

impl QuoteQuery {
    /// The requested ordering, or `None` when neither `sort` nor `order`
    /// was given.
    pub fn sort_spec(&self) -> Option<SortSpec> {
        if self.sort.is_none() && self.order.is_none() {
            return None;
        }
        Some(SortSpec::new(
            self.sort.unwrap_or_default(),
            self.order.unwrap_or_default(),
        ))
    }

    /// Filters then sorts. Without parameters the input order is preserved.
    pub fn apply<Q: MarketQuote + Clone>(&self, quotes: &[Q]) -> Vec<Q> {
        let filtered = filter_quotes(quotes, self.q.as_deref().unwrap_or(""));
        match self.sort_spec() {
            Some(spec) => sort_quotes(&filtered, spec),
            None => filtered,
        }
    }

    pub fn apply_tiered<Q: MarketQuote + Clone>(&self, quotes: &[Q]) -> CapTiers<Q> {
        bucket_by_market_cap(&self.apply(quotes))
    }
}
