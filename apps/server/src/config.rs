use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;

use crate::auth::{decode_secret_key, AuthConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format '{other}', expected 'text' or 'json'"),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_format: LogFormat,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub coingecko_base_url: String,
    pub vs_currency: String,
    pub market_cache_ttl: Duration,
    pub news_cache_ttl: Duration,
    pub auth: Option<AuthConfig>,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_secs(key: &str, default: u64) -> anyhow::Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {key}: {raw}"))?;
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

fn env_millis(key: &str, default: u64) -> anyhow::Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {key}: {raw}"))?;
            Ok(Duration::from_millis(millis))
        }
        Err(_) => Ok(Duration::from_millis(default)),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("MD_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid MD_LISTEN_ADDR")?;
        let db_path = env_or("MD_DB_PATH", "./db/app.db");
        let cors_allow = env_or("MD_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let log_format: LogFormat = env_or("MD_LOG_FORMAT", "text")
            .parse()
            .context("Invalid MD_LOG_FORMAT")?;
        let request_timeout = env_millis("MD_REQUEST_TIMEOUT_MS", 30_000)?;
        let static_dir = env_or("MD_STATIC_DIR", "dist");
        let coingecko_base_url = env_or(
            "MD_COINGECKO_BASE_URL",
            marketdash_market_data::provider::coingecko::DEFAULT_BASE_URL,
        );
        let vs_currency = env_or("MD_VS_CURRENCY", "inr");
        let market_cache_ttl = env_secs(
            "MD_MARKET_CACHE_TTL_SECS",
            marketdash_core::constants::MARKET_CACHE_TTL_SECS,
        )?;
        let news_cache_ttl = env_secs(
            "MD_NEWS_CACHE_TTL_SECS",
            marketdash_core::constants::NEWS_CACHE_TTL_SECS,
        )?;

        let auth = match std::env::var("MD_SECRET_KEY") {
            Ok(raw) if !raw.trim().is_empty() => Some(AuthConfig {
                jwt_secret: decode_secret_key(&raw).context("Invalid MD_SECRET_KEY")?,
                access_token_ttl: env_secs("MD_ACCESS_TOKEN_TTL_SECS", 86_400)?,
            }),
            _ => None,
        };

        Ok(Self {
            listen_addr,
            log_format,
            db_path,
            cors_allow,
            request_timeout,
            static_dir,
            coingecko_base_url,
            vs_currency,
            market_cache_ttl,
            news_cache_ttl,
            auth,
        })
    }
}
