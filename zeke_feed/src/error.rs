use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Twitter API not configured")]
    NotConfigured,
    #[error("User `{0}` not found")]
    UserNotFound(String),
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[source] twitter_client::Error),

    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Cannot encode/decode JSON: {0}")]
    JSONError(#[from] serde_json::Error),
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
