use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::RwLock;

use std::path::PathBuf;

use crate::error::Result;
use crate::model::CachedTimeline;

const REDIS_TIMELINE_KEY: &str = "zeke:timeline";

/// Single-slot storage for the cached timeline.
/// Stores never expire entries themselves; the reader decides staleness.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn load(&self) -> Result<Option<CachedTimeline>>;
    async fn save(&self, entry: &CachedTimeline) -> Result<()>;
}

/// Process-scoped slot, lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<CachedTimeline>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn load(&self) -> Result<Option<CachedTimeline>> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, entry: &CachedTimeline) -> Result<()> {
        *self.slot.write().await = Some(entry.clone());
        Ok(())
    }
}

/// Durable slot backed by one JSON file, written via temp file and rename so
/// a concurrent reader never observes a torn write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }
}

#[async_trait]
impl CacheStore for FileStore {
    async fn load(&self) -> Result<Option<CachedTimeline>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&content) {
            Ok(entry) => Ok(Some(entry)),
            Err(err) => {
                tracing::warn!("Discarding unreadable cache file {}: {}", self.path.display(), err);
                Ok(None)
            }
        }
    }

    async fn save(&self, entry: &CachedTimeline) -> Result<()> {
        let content = serde_json::to_string(entry)?;
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &content).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

/// Slot stored under a fixed key in Redis, shared across server instances.
pub struct RedisStore {
    client: redis::Client,
    key: String,
}

impl RedisStore {
    pub fn new(url: &str) -> Result<Self> {
        Ok(RedisStore {
            client: redis::Client::open(url)?,
            key: REDIS_TIMELINE_KEY.to_string(),
        })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn load(&self) -> Result<Option<CachedTimeline>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let content: Option<String> = conn.get(&self.key).await?;
        match content {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, entry: &CachedTimeline) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let content = serde_json::to_string(entry)?;
        let _: () = conn.set(&self.key, content).await?;
        Ok(())
    }
}
