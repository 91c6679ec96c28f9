use std::env;
use std::time::Duration;

/// Provider endpoints and ingestion tuning, read from the environment.
///
/// Values are validated by type only; anything unparseable falls back to
/// its default.
#[derive(Debug, Clone)]
pub struct FeedConfiguration {
    /// Base URL of the by-id endpoint. The article id is appended as `?id=`.
    pub single_url: String,
    /// Base URL of the list endpoint. The page size is appended as `?count=`.
    pub list_url: String,
    /// Number of items requested from the list endpoint.
    pub count: u32,
    /// Upper bound on concurrent detail-fetch workers per run.
    pub max_workers: usize,
    /// Interval between two scheduled ingestion runs.
    pub frequency: Duration,
}

impl FeedConfiguration {
    pub fn from_env() -> Self {
        FeedConfiguration {
            single_url: env::var("FEED_SINGLE_URL").unwrap_or_else(|_| {
                String::from("https://www.wearehullcity.co.uk/api/incrowd/getnewsarticleinformation")
            }),
            list_url: env::var("FEED_LIST_URL").unwrap_or_else(|_| {
                String::from("https://www.wearehullcity.co.uk/api/incrowd/getnewlistinformation")
            }),
            count: parse_env("FEED_COUNT", 50),
            max_workers: parse_env("FEED_MAX_WORKERS", 30),
            frequency: Duration::from_secs(parse_env("FEED_FREQUENCY_SECONDS", 1800)),
        }
    }
}

/// Cache expiration and key namespace, read from the environment.
#[derive(Debug, Clone)]
pub struct CacheConfiguration {
    pub expiration_seconds: usize,
    pub key_prefix: String,
}

impl CacheConfiguration {
    pub fn from_env() -> Self {
        CacheConfiguration {
            expiration_seconds: parse_env("REDIS_EXPIRATION_SECONDS", 3600),
            key_prefix: env::var("REDIS_KEY_PREFIX").unwrap_or_else(|_| String::from("articles")),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}
