use crate::quotes::MarketQuote;

/// Case-insensitive substring match against name or symbol.
/// An empty query matches everything.
pub fn matches_query<Q: MarketQuote + ?Sized>(quote: &Q, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    quote.name().to_lowercase().contains(&needle)
        || quote.symbol().to_lowercase().contains(&needle)
}

pub fn filter_quotes<Q: MarketQuote + Clone>(quotes: &[Q], query: &str) -> Vec<Q> {
    quotes
        .iter()
        .filter(|q| matches_query(*q, query))
        .cloned()
        .collect()
}
