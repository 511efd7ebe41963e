use std::cmp::Ordering;

use super::aggregation_model::{SortKey, SortOrder, SortSpec};
use crate::quotes::MarketQuote;

/// Compares two quotes on `key` in ascending order.
pub fn compare_by<Q: MarketQuote + ?Sized>(a: &Q, b: &Q, key: SortKey) -> Ordering {
    match key {
        SortKey::Rank => a.rank().cmp(&b.rank()),
        SortKey::Price => a.price().cmp(&b.price()),
        SortKey::Change => a.change_percent().cmp(&b.change_percent()),
        SortKey::MarketCap => a.market_cap().cmp(&b.market_cap()),
    }
}

/// Stable sort. Equal elements keep their input order in both directions.
pub fn sort_quotes<Q: MarketQuote + Clone>(quotes: &[Q], spec: SortSpec) -> Vec<Q> {
    let mut sorted = quotes.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_by(a, b, spec.key);
        match spec.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    sorted
}
