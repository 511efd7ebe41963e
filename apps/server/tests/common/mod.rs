#![allow(dead_code)]

use std::sync::Mutex;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use marketdash_server::{api::app_router, build_state, config::Config};
use rand::{rngs::OsRng, RngCore};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

// Config is read from the process environment, which tests share.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 3] = ["MD_DB_PATH", "MD_COINGECKO_BASE_URL", "MD_SECRET_KEY"];

pub struct TestApp {
    pub router: Router,
    _db_dir: TempDir,
}

fn random_secret() -> String {
    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);
    BASE64.encode(secret_bytes)
}

/// Builds a router over a fresh database. `with_auth` toggles the JWT
/// subsystem by setting or clearing `MD_SECRET_KEY`.
pub async fn build_test_app(coingecko_base_url: &str, with_auth: bool) -> TestApp {
    let db_dir = tempfile::tempdir().unwrap();
    let config = {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("MD_DB_PATH", db_dir.path().join("test.db"));
        std::env::set_var("MD_COINGECKO_BASE_URL", coingecko_base_url);
        if with_auth {
            std::env::set_var("MD_SECRET_KEY", random_secret());
        } else {
            std::env::remove_var("MD_SECRET_KEY");
        }
        let config = Config::from_env().unwrap();
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        config
    };

    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        _db_dir: db_dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_token(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, json)
    }
}

/// A base URL nothing listens on.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:9";
