use std::env;
use std::path::PathBuf;

use twitter_client::Credentials;

const DEFAULT_FRESH_SECS: u64 = 900;
const DEFAULT_STALE_SECS: u64 = 86_400;

#[derive(Debug, Clone)]
pub enum CacheBackend {
    Memory,
    File { path: PathBuf },
    Redis { url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub username: String,
    /// `None` when any of the four secrets is missing; the timeline route
    /// reports NotConfigured instead of calling upstream.
    pub credentials: Option<Credentials>,
    pub cache_backend: CacheBackend,
    pub fresh_ttl_secs: u64,
    pub stale_ttl_secs: u64,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Config {
        let credentials = match (
            env::var("X_API_KEY"),
            env::var("X_API_SECRET"),
            env::var("X_ACCESS_TOKEN"),
            env::var("X_ACCESS_SECRET"),
        ) {
            (Ok(consumer_key), Ok(consumer_secret), Ok(access_token), Ok(access_secret)) => Some(Credentials {
                consumer_key,
                consumer_secret,
                access_token,
                access_secret,
            }),
            _ => None,
        };

        let cache_backend = match env::var("CACHE_BACKEND").as_deref().unwrap_or("memory") {
            "memory" => CacheBackend::Memory,
            "file" => CacheBackend::File {
                path: env::var("CACHE_FILE").unwrap_or_else(|_| "tweet_cache.json".to_string()).into(),
            },
            "redis" => CacheBackend::Redis {
                url: env::var("REDIS_URL").expect("REDIS_URL must be set for the redis cache backend"),
            },
            other => {
                tracing::warn!("Unknown cache backend `{}`, using memory", other);
                CacheBackend::Memory
            }
        };

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            username: env::var("TWITTER_USERNAME").unwrap_or_else(|_| "ZekePrivacy".to_string()),
            credentials,
            cache_backend,
            fresh_ttl_secs: parse_secs("CACHE_FRESH_SECS", DEFAULT_FRESH_SECS),
            stale_ttl_secs: parse_secs("CACHE_STALE_SECS", DEFAULT_STALE_SECS),
            static_dir: env::var("STATIC_DIR").ok().map(PathBuf::from),
        }
    }
}

fn parse_secs(key: &str, default: u64) -> u64 {
    env::var(key).ok().and_then(|value| value.parse().ok()).unwrap_or(default)
}
