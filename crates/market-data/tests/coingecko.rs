use httpmock::{Method::GET, MockServer};
use marketdash_market_data::{
    CoinGeckoProvider, CryptoMarketProvider, CryptoNewsProvider, MarketDataError,
};
use serde_json::json;

#[tokio::test]
async fn offline_markets_sends_dashboard_query() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/coins/markets")
            .query_param("vs_currency", "inr")
            .query_param("order", "market_cap_desc")
            .query_param("per_page", "100")
            .query_param("page", "1")
            .query_param("sparkline", "false")
            .query_param("price_change_percentage", "1h,24h,7d");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                {
                    "id": "ethereum",
                    "symbol": "eth",
                    "name": "Ethereum",
                    "current_price": 250000.0,
                    "market_cap": 30000000000000.0,
                    "market_cap_rank": 2,
                    "price_change_percentage_24h": 2.5
                }
            ]));
    });

    let provider = CoinGeckoProvider::new(server.base_url());
    let quotes = provider.get_markets().await.unwrap();

    mock.assert();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].symbol, "ETH");
    assert_eq!(quotes[0].market_cap_rank, Some(2));
}

#[tokio::test]
async fn offline_markets_surfaces_http_failure() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/coins/markets");
        then.status(503).body("maintenance");
    });

    let provider = CoinGeckoProvider::new(server.base_url());
    let err = provider.get_markets().await.unwrap_err();

    mock.assert_hits(1);
    match err {
        MarketDataError::ProviderError { provider, message } => {
            assert_eq!(provider, "COINGECKO");
            assert!(message.contains("503"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn offline_markets_maps_rate_limit() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/coins/markets");
        then.status(429);
    });

    let provider = CoinGeckoProvider::new(server.base_url());
    let err = provider.get_markets().await.unwrap_err();
    assert!(matches!(err, MarketDataError::RateLimited { .. }));
}

#[tokio::test]
async fn offline_news_takes_first_items() {
    let server = MockServer::start();

    let items: Vec<_> = (0..30)
        .map(|i| json!({ "news_id": i, "title": format!("Headline {i}"), "url": "https://example.com" }))
        .collect();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/news");
        then.status(200).json_body(json!({ "data": items }));
    });

    let provider = CoinGeckoProvider::new(server.base_url()).with_vs_currency("usd");
    let news = provider.get_news(20).await.unwrap();

    mock.assert();
    assert_eq!(news.len(), 20);
    assert_eq!(news[0].id, "0");
    assert_eq!(news[19].title, "Headline 19");
}

#[tokio::test]
async fn unreachable_upstream_is_an_error() {
    let provider = CoinGeckoProvider::new("http://127.0.0.1:9");
    let err = provider.get_markets().await.unwrap_err();
    assert!(matches!(
        err,
        MarketDataError::ProviderError { .. } | MarketDataError::Timeout { .. }
    ));
}
