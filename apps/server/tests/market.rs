mod common;

use axum::http::StatusCode;
use common::{build_test_app, UNREACHABLE_UPSTREAM};
use httpmock::{Method::GET, MockServer};
use serde_json::json;

fn coin(id: &str, symbol: &str, name: &str, rank: u32, price: f64, change: f64) -> serde_json::Value {
    json!({
        "id": id,
        "symbol": symbol,
        "name": name,
        "current_price": price,
        "market_cap": price * 1000.0,
        "market_cap_rank": rank,
        "price_change_percentage_24h": change
    })
}

#[tokio::test]
async fn crypto_listing_is_cached_and_queryable() {
    let server = MockServer::start_async().await;
    let markets = server
        .mock_async(|when, then| {
            when.method(GET).path("/coins/markets");
            then.status(200).json_body(json!([
                coin("bitcoin", "btc", "Bitcoin", 1, 5000000.0, 1.5),
                coin("ethereum", "eth", "Ethereum", 2, 250000.0, -2.0),
                coin("bitcoin-cash", "bch", "Bitcoin Cash", 15, 30000.0, 4.0),
            ]));
        })
        .await;

    let app = build_test_app(&server.base_url(), false).await;

    let (status, body) = app.get("/api/crypto").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["symbol"], "BTC");

    let (status, body) = app.get("/api/crypto?q=bitcoin&sort=change&order=desc").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["bitcoin-cash", "bitcoin"]);

    // Both requests were served from one upstream call.
    markets.assert_hits_async(1).await;
}

#[tokio::test]
async fn crypto_upstream_failure_is_generic_500() {
    let app = build_test_app(UNREACHABLE_UPSTREAM, false).await;
    let (status, body) = app.get("/api/crypto").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch cryptocurrency data");
    assert_eq!(body["code"], 500);
}

#[tokio::test]
async fn stocks_are_stable_within_ttl() {
    let app = build_test_app(UNREACHABLE_UPSTREAM, false).await;

    let (status, first) = app.get("/api/stocks").await;
    assert_eq!(status, StatusCode::OK);
    let stocks = first.as_array().unwrap();
    assert_eq!(stocks.len(), 100);
    assert_eq!(stocks[0]["symbol"], "RELIANCE");
    assert_eq!(stocks[0]["rank"], 1);
    assert_eq!(stocks[99]["symbol"], "STOCK100");

    let (_, second) = app.get("/api/stocks").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn stocks_sort_and_filter() {
    let app = build_test_app(UNREACHABLE_UPSTREAM, false).await;

    let (status, body) = app.get("/api/stocks?sort=price&order=desc").await;
    assert_eq!(status, StatusCode::OK);
    let prices: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["current_price"].as_f64().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));

    let (_, body) = app.get("/api/stocks?q=bank").await;
    let matches = body.as_array().unwrap();
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|s| {
        let name = s["name"].as_str().unwrap().to_lowercase();
        let symbol = s["symbol"].as_str().unwrap().to_lowercase();
        name.contains("bank") || symbol.contains("bank")
    }));

    let (status, body) = app.get("/api/stocks?sort=volume").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn stock_tiers_partition_listing() {
    let app = build_test_app(UNREACHABLE_UPSTREAM, false).await;

    let (status, tiers) = app.get("/api/stocks/tiers").await;
    assert_eq!(status, StatusCode::OK);

    let large = tiers["largeCap"].as_array().unwrap();
    let mid = tiers["midCap"].as_array().unwrap();
    let small = tiers["smallCap"].as_array().unwrap();
    assert_eq!(large.len() + mid.len() + small.len(), 100);
    assert!(large
        .iter()
        .all(|s| s["market_cap"].as_u64().unwrap() >= 200_000_000_000));
    assert!(mid.iter().all(|s| {
        let cap = s["market_cap"].as_u64().unwrap();
        (50_000_000_000..200_000_000_000).contains(&cap)
    }));
    assert!(small
        .iter()
        .all(|s| s["market_cap"].as_u64().unwrap() < 50_000_000_000));
}
